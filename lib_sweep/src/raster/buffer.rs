use super::color::Bgr;
use log::error;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Error, Debug)]
pub enum BufferError {
    #[error("pixel access out of bounds: row {row}, col {col}")]
    OutOfBounds { row: u32, col: u32 },
    #[error("stride {stride} is too small for width {width} at 4 bytes per pixel")]
    StrideTooSmall { stride: usize, width: u32 },
    #[error("buffer too short: expected at least {expected} bytes, got {actual}")]
    BufferTooShort { expected: usize, actual: usize },
}

/// A mutable view over a caller-owned raster in (blue, green, red, alpha)
/// byte order, 4 bytes per pixel, row-major with an explicit stride.
///
/// The view borrows the backing slice for the duration of a cleanup pass;
/// the decode/encode collaborator keeps ownership of the allocation. The
/// stride is the byte length of one row and may exceed `width * 4` when the
/// source format pads rows; padding bytes are never read or written.
pub struct PixelBuffer<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
    stride: usize,
}

impl<'a> PixelBuffer<'a> {
    /// Wraps a raw byte slice, validating the geometry up front.
    ///
    /// # Errors
    /// - `BufferError::StrideTooSmall` if `stride < width * 4`
    /// - `BufferError::BufferTooShort` if the slice cannot hold
    ///   `stride * height` bytes
    pub fn new(
        data: &'a mut [u8],
        width: u32,
        height: u32,
        stride: usize,
    ) -> Result<Self, BufferError> {
        if stride < width as usize * BYTES_PER_PIXEL {
            error!("stride {} too small for width {}", stride, width);
            return Err(BufferError::StrideTooSmall { stride, width });
        }

        let expected = stride * height as usize;
        if data.len() < expected {
            error!(
                "buffer of {} bytes cannot hold {}x{} rows of stride {}",
                data.len(),
                width,
                height,
                stride
            );
            return Err(BufferError::BufferTooShort {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    fn offset(&self, row: u32, col: u32) -> Result<usize, BufferError> {
        if row >= self.height || col >= self.width {
            return Err(BufferError::OutOfBounds { row, col });
        }
        Ok(row as usize * self.stride + col as usize * BYTES_PER_PIXEL)
    }

    /// Reads the color and alpha of the pixel at `(row, col)`.
    ///
    /// # Errors
    /// - `BufferError::OutOfBounds` if `row`/`col` fall outside the image
    pub fn read(&self, row: u32, col: u32) -> Result<(Bgr, u8), BufferError> {
        let off = self.offset(row, col)?;
        let px = &self.data[off..off + BYTES_PER_PIXEL];
        Ok((Bgr::new(px[0], px[1], px[2]), px[3]))
    }

    /// Writes all four channels of the pixel at `(row, col)`.
    ///
    /// # Errors
    /// - `BufferError::OutOfBounds` if `row`/`col` fall outside the image
    pub fn write_bgra(
        &mut self,
        row: u32,
        col: u32,
        color: Bgr,
        alpha: u8,
    ) -> Result<(), BufferError> {
        let off = self.offset(row, col)?;
        let px = &mut self.data[off..off + BYTES_PER_PIXEL];
        px[0] = color.b;
        px[1] = color.g;
        px[2] = color.r;
        px[3] = alpha;
        Ok(())
    }
}
