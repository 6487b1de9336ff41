//! Per-page geometry metadata as read from a document.

use crate::foundation::error::{FolioError, FolioResult};

/// Visible sub-rectangle of a page's media, in page-space units
/// (points at 72 units per inch).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CropBox {
    /// Crop width in page units.
    pub width: f32,
    /// Crop height in page units.
    pub height: f32,
}

impl CropBox {
    /// Create a crop box.
    ///
    /// Values are not validated here; the render path rejects non-positive
    /// dimensions with [`FolioError::InvalidGeometry`].
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Page display rotation, one of the four cardinal angles, clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Rotation {
    /// No rotation.
    None,
    /// Quarter turn clockwise.
    Clockwise90,
    /// Half turn.
    Clockwise180,
    /// Three-quarter turn clockwise.
    Clockwise270,
}

impl Rotation {
    /// Validate a raw rotation value read from the document layer.
    ///
    /// Only the four cardinal angles are legal; anything else is a
    /// data-integrity error in the document, surfaced as
    /// [`FolioError::InvalidGeometry`].
    pub fn from_degrees(degrees: i32) -> FolioResult<Self> {
        match degrees {
            0 => Ok(Self::None),
            90 => Ok(Self::Clockwise90),
            180 => Ok(Self::Clockwise180),
            270 => Ok(Self::Clockwise270),
            other => Err(FolioError::invalid_geometry(format!(
                "rotation must be one of 0/90/180/270, got {other}"
            ))),
        }
    }

    /// Rotation angle in degrees.
    pub fn degrees(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Clockwise90 => 90,
            Self::Clockwise180 => 180,
            Self::Clockwise270 => 270,
        }
    }

    /// Rotation angle in radians, clockwise-positive in the raster's
    /// y-down frame.
    pub fn radians(self) -> f64 {
        f64::from(self.degrees()).to_radians()
    }

    /// Return `true` when the rotation swaps the raster's width and height.
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::Clockwise90 | Self::Clockwise270)
    }
}

/// Immutable geometry metadata for one page.
///
/// The rotation is carried as the raw integer stored in the document, so a
/// malformed document surfaces as [`FolioError::InvalidGeometry`] at render
/// time rather than at load time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageGeometry {
    /// Crop region of the page.
    pub crop: CropBox,
    /// Raw rotation value in degrees as stored in the document.
    pub rotation_degrees: i32,
}

impl PageGeometry {
    /// Create page geometry from a crop box and a raw rotation value.
    pub fn new(crop: CropBox, rotation_degrees: i32) -> Self {
        Self {
            crop,
            rotation_degrees,
        }
    }

    /// Validated rotation for this page.
    pub fn rotation(&self) -> FolioResult<Rotation> {
        Rotation::from_degrees(self.rotation_degrees)
    }
}
