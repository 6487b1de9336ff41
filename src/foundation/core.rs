//! Core value types shared across the crate.

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Output raster dimensions in pixels.
///
/// Both dimensions are at least 1; see
/// [`resolve_raster_dimensions`](crate::render::dimensions::resolve_raster_dimensions).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RasterDimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl RasterDimensions {
    /// Total number of pixels, saturating on overflow.
    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }
}

/// Supported pixel formats for page rasters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PixelFormat {
    /// 8-bit RGBA with straight (non-premultiplied) alpha.
    Rgba8,
    /// 8-bit opaque RGB; cannot represent transparency.
    Rgb8,
}

impl PixelFormat {
    /// Bytes of storage per pixel.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgba8 => 4,
            Self::Rgb8 => 3,
        }
    }

    /// Return `true` when the format carries an alpha channel.
    pub fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba8)
    }
}

/// 8-bit RGBA color with straight alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Opaque white, the default background for formats without alpha.
    pub fn white() -> Self {
        Self::opaque(255, 255, 255)
    }

    /// Build an opaque color.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}
