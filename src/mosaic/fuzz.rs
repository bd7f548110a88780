//! Random jitter of sampled source colors

use crate::color::matching::MatchTarget;
use crate::io::error::{Result, invalid_parameter};
use crate::mosaic::source::SourceSample;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Per-channel uniform jitter in `[-magnitude, magnitude]`
///
/// Luminance samples draw a single offset shared by all three channels, so
/// they stay gray. Jittered channels are not clamped to the channel range.
pub struct Fuzz {
    magnitude: i32,
    rng: StdRng,
}

impl Fuzz {
    /// Jitter generator, reproducible when `seed` is given
    ///
    /// # Errors
    ///
    /// Returns an error if `magnitude` does not fit in an `i32`
    pub fn new(magnitude: u32, seed: Option<u64>) -> Result<Self> {
        let magnitude = i32::try_from(magnitude)
            .map_err(|e| invalid_parameter("fuzz", &magnitude, &e))?;
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Ok(Self { magnitude, rng })
    }

    /// Whether samples are left untouched
    pub const fn is_disabled(&self) -> bool {
        self.magnitude == 0
    }

    fn offset(&mut self) -> i32 {
        self.rng.random_range(-self.magnitude..=self.magnitude)
    }

    /// Matching target for `sample`; a disabled fuzz leaves it unchanged
    pub fn perturb(&mut self, sample: SourceSample) -> MatchTarget {
        if self.is_disabled() {
            return sample.to_color().into();
        }

        let offsets = match sample {
            SourceSample::Luma(_) => [self.offset(); 3],
            SourceSample::Rgb(_) => [self.offset(), self.offset(), self.offset()],
        };
        MatchTarget::jittered(sample.to_color(), offsets)
    }
}
