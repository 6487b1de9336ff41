//! Content drawer capability seam.

use crate::document::geometry::CropBox;
use crate::render::surface::RenderSurface;

/// Paints a page's visual content onto a prepared surface.
///
/// The orchestrator invokes [`ContentDrawer::draw_page`] exactly once per
/// render call, after the page transform has been installed on `surface`.
/// Interpreting the document's content (paths, text, images, color spaces)
/// is entirely the implementation's concern. Failures are propagated
/// uninterpreted as [`FolioError::ContentDraw`](crate::FolioError::ContentDraw)
/// and the partially painted raster is discarded.
pub trait ContentDrawer {
    /// Paint all visual content within `crop` onto `surface` using the
    /// surface's active coordinate transform.
    fn draw_page(&self, surface: &mut dyn RenderSurface, crop: CropBox) -> anyhow::Result<()>;
}

/// Drawer that paints nothing, producing bare background rasters.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoContent;

impl ContentDrawer for NoContent {
    fn draw_page(&self, _surface: &mut dyn RenderSurface, _crop: CropBox) -> anyhow::Result<()> {
        Ok(())
    }
}
