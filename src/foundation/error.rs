/// Convenience result type used across Folio.
pub type FolioResult<T> = Result<T, FolioError>;

/// Top-level error taxonomy used by rendering APIs.
///
/// Every error aborts the render call that produced it; nothing is retried
/// internally and no partial raster is ever returned alongside an error.
#[derive(thiserror::Error, Debug)]
pub enum FolioError {
    /// Requested page index is outside the document's page range.
    #[error("page not found: index {index} out of range 0..{page_count}")]
    PageNotFound {
        /// Zero-based page index that was requested.
        index: usize,
        /// Number of pages in the document.
        page_count: usize,
    },

    /// Malformed page geometry or render parameters (crop box, rotation,
    /// scale). Indicates bad document data or a caller contract violation.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Raster buffer could not be allocated at the computed dimensions.
    #[error("allocation failed for {width}x{height} raster")]
    Allocation {
        /// Attempted raster width in pixels.
        width: u32,
        /// Attempted raster height in pixels.
        height: u32,
    },

    /// The content drawer collaborator failed. The cause is carried opaquely
    /// and not interpreted here.
    #[error("content draw failed: {0}")]
    ContentDraw(#[source] anyhow::Error),
}

impl FolioError {
    /// Build a [`FolioError::PageNotFound`] value.
    pub fn page_not_found(index: usize, page_count: usize) -> Self {
        Self::PageNotFound { index, page_count }
    }

    /// Build a [`FolioError::InvalidGeometry`] value.
    pub fn invalid_geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }
}
