//! Source photograph access in its native channel layout

use crate::color::average::Color;
use crate::io::image::is_grayscale;
use image::{DynamicImage, GrayImage, RgbImage};

/// One pixel read from the source
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceSample {
    /// Single luminance channel
    Luma(u8),
    /// Red, green and blue channels
    Rgb(Color),
}

impl SourceSample {
    /// Equal-channel expansion for luminance, identity for RGB
    pub const fn to_color(self) -> Color {
        match self {
            Self::Luma(luminance) => Color::gray(luminance),
            Self::Rgb(color) => color,
        }
    }
}

/// Decoded source kept as luminance when it has no color
#[derive(Clone, Debug)]
pub enum SourceRaster {
    /// Grayscale source
    Gray(GrayImage),
    /// Color source
    Rgb(RgbImage),
}

impl SourceRaster {
    /// Width in pixels
    pub fn width(&self) -> u32 {
        match self {
            Self::Gray(image) => image.width(),
            Self::Rgb(image) => image.width(),
        }
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        match self {
            Self::Gray(image) => image.height(),
            Self::Rgb(image) => image.height(),
        }
    }

    /// Pixel at `(x, y)`, `None` outside the raster
    pub fn sample(&self, x: u32, y: u32) -> Option<SourceSample> {
        match self {
            Self::Gray(image) => image
                .get_pixel_checked(x, y)
                .map(|pixel| SourceSample::Luma(pixel.0[0])),
            Self::Rgb(image) => image
                .get_pixel_checked(x, y)
                .map(|pixel| SourceSample::Rgb(Color::from(*pixel))),
        }
    }
}

impl From<&DynamicImage> for SourceRaster {
    fn from(image: &DynamicImage) -> Self {
        if is_grayscale(image) {
            Self::Gray(image.to_luma8())
        } else {
            Self::Rgb(image.to_rgb8())
        }
    }
}
