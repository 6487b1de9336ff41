//! Read-only document provider seam.

use crate::document::geometry::PageGeometry;
use crate::foundation::error::{FolioError, FolioResult};

/// Read-only provider of per-page geometry.
///
/// The renderer holds a shared reference to the document for the duration of
/// its use and never mutates it. When render calls are issued concurrently
/// from several threads, the caller must keep the document immutable for the
/// duration or synchronize access externally; this crate adds no
/// synchronization of its own.
pub trait Document {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Geometry for the page at `index`.
    ///
    /// Fails with [`FolioError::PageNotFound`] when `index` is outside
    /// `0..page_count()`.
    fn page(&self, index: usize) -> FolioResult<PageGeometry>;
}

/// A document assembled from in-memory page geometry.
///
/// Useful for synthetic documents in tests and for callers whose page
/// metadata has already been parsed elsewhere.
#[derive(Clone, Debug, Default)]
pub struct InMemoryDocument {
    pages: Vec<PageGeometry>,
}

impl InMemoryDocument {
    /// Create a document from page geometry in page order.
    pub fn new(pages: Vec<PageGeometry>) -> Self {
        Self { pages }
    }

    /// Append a page, returning its zero-based index.
    pub fn push_page(&mut self, page: PageGeometry) -> usize {
        self.pages.push(page);
        self.pages.len() - 1
    }
}

impl Document for InMemoryDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> FolioResult<PageGeometry> {
        self.pages
            .get(index)
            .copied()
            .ok_or_else(|| FolioError::page_not_found(index, self.pages.len()))
    }
}
