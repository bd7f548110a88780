use crate::color::average::Color;
use std::path::PathBuf;

/// Mean color of one candidate together with the file it came from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorSample {
    /// Average color of the candidate
    pub color: Color,
    /// Candidate file
    pub path: PathBuf,
}

impl ColorSample {
    /// Pair a color with its candidate
    pub fn new(color: Color, path: impl Into<PathBuf>) -> Self {
        Self {
            color,
            path: path.into(),
        }
    }
}

/// Ordered list of candidate colors
///
/// Order is discovery order and only matters for tie-breaking during
/// matching. The index is immutable once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorIndex {
    samples: Vec<ColorSample>,
}

impl ColorIndex {
    /// Wrap samples in their final order
    pub const fn new(samples: Vec<ColorSample>) -> Self {
        Self { samples }
    }

    /// All samples in index order
    pub fn samples(&self) -> &[ColorSample] {
        &self.samples
    }

    /// Sample at `position`
    pub fn get(&self, position: usize) -> Option<&ColorSample> {
        self.samples.get(position)
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the index holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate samples in index order
    pub fn iter(&self) -> std::slice::Iter<'_, ColorSample> {
        self.samples.iter()
    }
}

impl FromIterator<ColorSample> for ColorIndex {
    fn from_iter<I: IntoIterator<Item = ColorSample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ColorIndex {
    type Item = &'a ColorSample;
    type IntoIter = std::slice::Iter<'a, ColorSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
