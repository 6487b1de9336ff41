//! Raster buffer allocation and pixel storage.

use crate::foundation::core::{PixelFormat, RasterDimensions, Rgba8};
use crate::foundation::error::{FolioError, FolioResult};

/// An in-memory page raster: tightly packed, row-major pixels.
///
/// A raster is exclusively owned by the render call that allocated it until
/// it is returned to the caller; no other component retains a reference
/// after the call completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRaster {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<u8>,
}

impl PageRaster {
    /// Allocate a raster of `dims` in `format` with its background
    /// initialized: fully transparent for formats with an alpha channel,
    /// flood-filled opaque white otherwise.
    ///
    /// Fails with [`FolioError::Allocation`] when the byte length overflows
    /// or the allocation itself fails; the error carries the attempted
    /// dimensions.
    pub fn allocate(dims: RasterDimensions, format: PixelFormat) -> FolioResult<Self> {
        let alloc_err = || FolioError::Allocation {
            width: dims.width,
            height: dims.height,
        };

        let len = (dims.width as usize)
            .checked_mul(dims.height as usize)
            .and_then(|px| px.checked_mul(format.bytes_per_pixel()))
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or_else(alloc_err)?;

        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| alloc_err())?;
        data.resize(len, 0);

        let mut raster = Self {
            width: dims.width,
            height: dims.height,
            format,
            data,
        };
        if !format.has_alpha() {
            raster.fill(Rgba8::white());
        }
        Ok(raster)
    }

    /// Raster width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel format of the stored data.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Pixel bytes, tightly packed and row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Flood-fill every pixel with `color`.
    ///
    /// The alpha channel is dropped for formats that cannot store it.
    pub fn fill(&mut self, color: Rgba8) {
        match self.format {
            PixelFormat::Rgba8 => {
                for px in self.data.chunks_exact_mut(4) {
                    px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
                }
            }
            PixelFormat::Rgb8 => {
                for px in self.data.chunks_exact_mut(3) {
                    px.copy_from_slice(&[color.r, color.g, color.b]);
                }
            }
        }
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// Formats without an alpha channel read back as fully opaque.
    /// Out-of-bounds reads return `None`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        let idx = self.pixel_index(x, y)?;
        Some(match self.format {
            PixelFormat::Rgba8 => Rgba8 {
                r: self.data[idx],
                g: self.data[idx + 1],
                b: self.data[idx + 2],
                a: self.data[idx + 3],
            },
            PixelFormat::Rgb8 => Rgba8::opaque(self.data[idx], self.data[idx + 1], self.data[idx + 2]),
        })
    }

    /// Write the pixel at `(x, y)`; out-of-bounds writes are discarded.
    pub(crate) fn put_pixel(&mut self, x: u32, y: u32, color: Rgba8) {
        let Some(idx) = self.pixel_index(x, y) else {
            return;
        };
        match self.format {
            PixelFormat::Rgba8 => {
                self.data[idx..idx + 4].copy_from_slice(&[color.r, color.g, color.b, color.a]);
            }
            PixelFormat::Rgb8 => {
                self.data[idx..idx + 3].copy_from_slice(&[color.r, color.g, color.b]);
            }
        }
    }

    fn pixel_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let row = (y as usize) * (self.width as usize);
        Some((row + x as usize) * self.format.bytes_per_pixel())
    }
}
