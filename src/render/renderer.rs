//! Render orchestrator and public entry points.

use tracing::debug;

use crate::document::provider::Document;
use crate::foundation::core::PixelFormat;
use crate::foundation::error::{FolioError, FolioResult};
use crate::render::dimensions::resolve_raster_dimensions;
use crate::render::drawer::ContentDrawer;
use crate::render::raster::PageRaster;
use crate::render::surface::CpuSurface;
use crate::render::transform::apply_page_transform;

/// Page-space units per inch (points).
const UNITS_PER_INCH: f32 = 72.0;

/// Renders document pages to pixel rasters.
///
/// The renderer holds read-only references to an injected [`Document`] and
/// [`ContentDrawer`] and never mutates either. Render calls take `&self`, so
/// callers may render several pages concurrently from separate threads
/// provided the document and drawer are immutable for the duration or
/// externally synchronized; the renderer adds no synchronization of its own.
pub struct PageRenderer<'a> {
    document: &'a dyn Document,
    drawer: &'a dyn ContentDrawer,
}

impl<'a> PageRenderer<'a> {
    /// Create a renderer over `document`, painting content with `drawer`.
    pub fn new(document: &'a dyn Document, drawer: &'a dyn ContentDrawer) -> Self {
        Self { document, drawer }
    }

    /// Render the page at `page_index` at scale 1 (72 DPI) as RGBA.
    pub fn render_image(&self, page_index: usize) -> FolioResult<PageRaster> {
        self.render_image_with(page_index, 1.0, PixelFormat::Rgba8)
    }

    /// Render the page at `page_index` at `dpi` as RGBA.
    pub fn render_image_at_dpi(&self, page_index: usize, dpi: f32) -> FolioResult<PageRaster> {
        self.render_image_with(page_index, dpi / UNITS_PER_INCH, PixelFormat::Rgba8)
    }

    /// Render the page at `page_index` at `scale` in `format`.
    ///
    /// Pipeline:
    /// 1. fetch page geometry from the document
    /// 2. resolve raster dimensions (rotation-aware)
    /// 3. allocate and background-initialize the raster
    /// 4. install the page transform on a surface bound to the raster
    /// 5. delegate content painting to the drawer
    ///
    /// Any failing step aborts the whole call and surfaces to the caller;
    /// no partial raster is returned and no step is retried.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn render_image_with(
        &self,
        page_index: usize,
        scale: f32,
        format: PixelFormat,
    ) -> FolioResult<PageRaster> {
        let page = self.document.page(page_index)?;
        let rotation = page.rotation()?;
        let dims = resolve_raster_dimensions(page.crop, rotation, scale)?;
        debug!(
            width = dims.width,
            height = dims.height,
            ?rotation,
            "resolved raster dimensions"
        );

        let mut raster = PageRaster::allocate(dims, format)?;
        {
            let mut surface = CpuSurface::new(&mut raster);
            apply_page_transform(&mut surface, page.crop, rotation, scale, scale);
            self.drawer
                .draw_page(&mut surface, page.crop)
                .map_err(FolioError::ContentDraw)?;
        }
        Ok(raster)
    }
}
