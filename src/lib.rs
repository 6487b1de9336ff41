//! Folio rasterizes one page of a paginated structured document into an
//! in-memory pixel buffer.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `PageGeometry + scale -> RasterDimensions` (rotation-aware
//!    width/height swap)
//! 2. **Allocate**: `RasterDimensions + PixelFormat -> PageRaster`
//!    (background-initialized)
//! 3. **Transform**: install the scale/translate/rotate page transform on a
//!    surface bound to the raster
//! 4. **Draw**: delegate content painting to the injected [`ContentDrawer`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No content interpretation**: paths, text, images and color spaces are
//!   the [`ContentDrawer`]'s concern, behind a single capability seam.
//! - **No partial output**: any failing step aborts the render call; errors
//!   propagate to the caller unretried, never logged-and-swallowed.
//! - **No shared state across calls**: each render call exclusively owns its
//!   raster until returning it, and the document is read-only throughout.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Document collaborator: page geometry values and the provider seam.
pub mod document;
mod foundation;
/// Page rasterization: dimensions, buffers, surfaces, transform, orchestration.
pub mod render;

pub use document::geometry::{CropBox, PageGeometry, Rotation};
pub use document::provider::{Document, InMemoryDocument};
pub use foundation::core::{Affine, PixelFormat, Point, RasterDimensions, Rect, Rgba8, Vec2};
pub use foundation::error::{FolioError, FolioResult};
pub use render::dimensions::resolve_raster_dimensions;
pub use render::drawer::{ContentDrawer, NoContent};
pub use render::raster::PageRaster;
pub use render::renderer::PageRenderer;
pub use render::surface::{CpuSurface, RenderSurface};
pub use render::transform::{apply_page_transform, page_transform};
