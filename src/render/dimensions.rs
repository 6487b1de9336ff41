//! Output raster dimension resolution.

use crate::document::geometry::{CropBox, Rotation};
use crate::foundation::core::RasterDimensions;
use crate::foundation::error::{FolioError, FolioResult};

/// Resolve output raster dimensions for a page rendered at `scale`.
///
/// Each axis is `round(crop * scale)` using round-half-away-from-zero
/// (`f32::round`), clamped to at least one pixel. The pair is swapped for
/// the 90 and 270 degree rotations so the rotated page fills the raster.
///
/// Fails with [`FolioError::InvalidGeometry`] when the crop box is not
/// strictly positive or `scale` is not a finite positive number.
pub fn resolve_raster_dimensions(
    crop: CropBox,
    rotation: Rotation,
    scale: f32,
) -> FolioResult<RasterDimensions> {
    if !crop.width.is_finite() || !crop.height.is_finite() || crop.width <= 0.0 || crop.height <= 0.0
    {
        return Err(FolioError::invalid_geometry(format!(
            "crop box must be positive, got {}x{}",
            crop.width, crop.height
        )));
    }
    if !scale.is_finite() || scale <= 0.0 {
        return Err(FolioError::invalid_geometry(format!(
            "scale must be > 0, got {scale}"
        )));
    }

    // Float-to-int casts saturate, so oversized products surface later as an
    // allocation failure rather than wrapping.
    let width = ((crop.width * scale).round() as u32).max(1);
    let height = ((crop.height * scale).round() as u32).max(1);

    Ok(if rotation.swaps_axes() {
        RasterDimensions {
            width: height,
            height: width,
        }
    } else {
        RasterDimensions { width, height }
    })
}
