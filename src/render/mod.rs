//! Page rasterization: dimension resolution, buffer allocation, the page
//! transform, and the orchestrator that ties them to a content drawer.

/// Raster dimension resolution from page geometry.
pub mod dimensions;
/// Content drawer capability seam.
pub mod drawer;
/// Raster buffer allocation and pixel storage.
pub mod raster;
/// Render orchestrator and public entry points.
pub mod renderer;
/// Drawing surface contract and CPU implementation.
pub mod surface;
/// Page transform construction.
pub mod transform;
