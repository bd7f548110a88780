//! Reduction of an image to its mean RGB color

use crate::io::image::is_grayscale;
use image::{DynamicImage, GrayImage, Rgb, RgbImage};
use serde::{Deserialize, Serialize};

/// Mean red, green and blue intensity of an image or pixel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Equal-channel color for a luminance value
    pub const fn gray(luminance: u8) -> Self {
        Self::new(luminance, luminance, luminance)
    }

    /// Channels as `[r, g, b]`
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.channels()
    }
}

impl From<Rgb<u8>> for Color {
    fn from(pixel: Rgb<u8>) -> Self {
        Self::from(pixel.0)
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Self(color.channels())
    }
}

/// Arithmetic mean of each channel with truncating division
///
/// Returns `None` for an empty pixel sequence.
pub fn average_pixels<I>(pixels: I) -> Option<Color>
where
    I: IntoIterator<Item = [u8; 3]>,
{
    let mut sums = [0_u64; 3];
    let mut count = 0_u64;

    for [r, g, b] in pixels {
        sums[0] += u64::from(r);
        sums[1] += u64::from(g);
        sums[2] += u64::from(b);
        count += 1;
    }

    if count == 0 {
        return None;
    }

    // Each mean is bounded by the largest channel value, so it fits in u8
    let [r, g, b] = sums.map(|sum| (sum / count) as u8);
    Some(Color::new(r, g, b))
}

/// Mean color of an RGB raster
pub fn average_rgb(image: &RgbImage) -> Option<Color> {
    average_pixels(image.pixels().map(|pixel| pixel.0))
}

/// Mean color of a luminance raster, spread equally over all channels
pub fn average_luma(image: &GrayImage) -> Option<Color> {
    average_pixels(image.pixels().map(|pixel| [pixel.0[0]; 3]))
}

/// Mean color of a decoded image
///
/// Grayscale images (with or without alpha) are averaged on their luminance
/// and yield an equal-channel color; everything else is averaged in RGB.
/// Returns `None` when the image has no pixels.
pub fn average_color(image: &DynamicImage) -> Option<Color> {
    if image.width() == 0 || image.height() == 0 {
        return None;
    }

    if is_grayscale(image) {
        average_luma(&image.to_luma8())
    } else {
        average_rgb(&image.to_rgb8())
    }
}
