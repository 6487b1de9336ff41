//! Drawing surface contract and the CPU raster implementation.

use crate::foundation::core::{Affine, Point, Rect, Rgba8};
use crate::render::raster::PageRaster;

/// A mutable drawing target bound to a raster buffer.
///
/// The contract is deliberately minimal (install an affine transform, fill
/// rectangles) so the orchestration layer stays portable across raster
/// backends. Coordinates handed to drawing primitives are in content space
/// and mapped through the active transform.
pub trait RenderSurface {
    /// Replace the active coordinate transform.
    fn set_transform(&mut self, transform: Affine);

    /// The active coordinate transform.
    fn transform(&self) -> Affine;

    /// Fill `rect` (content space) with `color`, mapped through the active
    /// transform. Fills overwrite destination pixels; compositing is the
    /// content drawer's concern.
    fn fill_rect(&mut self, rect: Rect, color: Rgba8);
}

/// CPU surface writing straight into a [`PageRaster`].
pub struct CpuSurface<'a> {
    raster: &'a mut PageRaster,
    transform: Affine,
}

impl<'a> CpuSurface<'a> {
    /// Bind a surface to `raster` with the identity transform.
    pub fn new(raster: &'a mut PageRaster) -> Self {
        Self {
            raster,
            transform: Affine::IDENTITY,
        }
    }
}

impl RenderSurface for CpuSurface<'_> {
    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn transform(&self) -> Affine {
        self.transform
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        let rect = rect.abs();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        // A degenerate transform has no inverse; nothing sensible to paint.
        if self.transform.determinant().abs() < 1e-12 {
            return;
        }
        let inverse = self.transform.inverse();

        // Walk the device-space bounding box of the mapped rect and keep the
        // pixels whose centers map back inside the source rect. Exact for the
        // cardinal rotations this crate composes.
        let bbox = self.transform.transform_rect_bbox(rect);
        let x0 = bbox.x0.floor().max(0.0) as u32;
        let y0 = bbox.y0.floor().max(0.0) as u32;
        let x1 = bbox.x1.ceil().clamp(0.0, f64::from(self.raster.width())) as u32;
        let y1 = bbox.y1.ceil().clamp(0.0, f64::from(self.raster.height())) as u32;

        for y in y0..y1 {
            for x in x0..x1 {
                let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                let p = inverse * center;
                if p.x >= rect.x0 && p.x < rect.x1 && p.y >= rect.y0 && p.y < rect.y1 {
                    self.raster.put_pixel(x, y, color);
                }
            }
        }
    }
}
