//! Page transform construction.
//!
//! Maps page-space content coordinates into raster pixels. Order matters:
//! the scale is installed first, then a rotation-dependent translate, then
//! the clockwise rotation itself, so the rotated crop region lands inside
//! the `[0,width) x [0,height)` raster window instead of rotating off-frame.

use crate::document::geometry::{CropBox, Rotation};
use crate::foundation::core::Affine;
use crate::render::surface::RenderSurface;

/// Build the page transform for a crop box, rotation and per-axis scale.
///
/// Composition, in the order applied to a content point: rotate
/// (clockwise-positive in the raster's y-down frame), then the rotation's
/// translate, then scale. The translate amounts are expressed in page units;
/// the leading scale carries them into pixel units along with everything
/// else the drawer paints.
pub fn page_transform(crop: CropBox, rotation: Rotation, scale_x: f32, scale_y: f32) -> Affine {
    let t_scale = Affine::scale_non_uniform(f64::from(scale_x), f64::from(scale_y));
    if rotation == Rotation::None {
        return t_scale;
    }

    let (tx, ty) = match rotation {
        Rotation::None => (0.0, 0.0),
        Rotation::Clockwise90 => (f64::from(crop.height), 0.0),
        Rotation::Clockwise270 => (0.0, f64::from(crop.width)),
        Rotation::Clockwise180 => (f64::from(crop.width), f64::from(crop.height)),
    };
    let t_translate = Affine::translate((tx, ty));
    let t_rotate = Affine::rotate(rotation.radians());

    // Canonical order: S(scale) * T(translate) * R(rot); `a * b` applies `b` first.
    t_scale * t_translate * t_rotate
}

/// Install the page transform on `surface`.
pub fn apply_page_transform(
    surface: &mut dyn RenderSurface,
    crop: CropBox,
    rotation: Rotation,
    scale_x: f32,
    scale_y: f32,
) {
    surface.set_transform(page_transform(crop, rotation, scale_x, scale_y));
}
