//! Nearest-color lookup over a linear color index

use crate::color::average::Color;
use crate::colormap::index::{ColorIndex, ColorSample};

/// Color a cell is matched against
///
/// Fuzzing may push channels outside `0..=255`; they are kept as drawn so
/// distances rank candidates against the jittered value itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MatchTarget([i64; 3]);

impl MatchTarget {
    /// `color` shifted by one signed offset per channel
    pub fn jittered(color: Color, offsets: [i32; 3]) -> Self {
        let [r, g, b] = color.channels();
        let [dr, dg, db] = offsets;
        Self([
            i64::from(r) + i64::from(dr),
            i64::from(g) + i64::from(dg),
            i64::from(b) + i64::from(db),
        ])
    }

    /// Channels as `[r, g, b]`
    pub const fn channels(self) -> [i64; 3] {
        self.0
    }
}

impl From<Color> for MatchTarget {
    fn from(color: Color) -> Self {
        Self::jittered(color, [0; 3])
    }
}

/// Distance larger than any target can produce
///
/// Targets lie within an `i32` offset of a channel value, so each squared
/// difference stays below `(2³¹ + 255)²` and their sum below `u64::MAX`.
pub const DISTANCE_SENTINEL: u64 = u64::MAX;

/// Squared Euclidean distance between a target and a candidate color
pub const fn squared_distance(target: MatchTarget, color: Color) -> u64 {
    let [r, g, b] = target.0;
    let dr = r.abs_diff(color.r as i64);
    let dg = g.abs_diff(color.g as i64);
    let db = b.abs_diff(color.b as i64);
    dr.saturating_mul(dr)
        .saturating_add(dg.saturating_mul(dg))
        .saturating_add(db.saturating_mul(db))
}

/// Position of the sample closest to `target`
///
/// Scans every sample; a later sample replaces the current best only when it
/// is strictly closer, so the earliest of several equally close samples wins.
/// Returns `None` for an empty index.
pub fn nearest_position(
    target: impl Into<MatchTarget>,
    samples: &[ColorSample],
) -> Option<usize> {
    let target = target.into();
    let mut best_distance = DISTANCE_SENTINEL;
    let mut best = None;

    for (position, sample) in samples.iter().enumerate() {
        let distance = squared_distance(target, sample.color);
        if distance < best_distance {
            best_distance = distance;
            best = Some(position);
        }
    }

    best
}

/// Sample whose color is closest to `target`
pub fn nearest_match(
    target: impl Into<MatchTarget>,
    index: &ColorIndex,
) -> Option<&ColorSample> {
    nearest_position(target, index.samples()).and_then(|position| index.get(position))
}
