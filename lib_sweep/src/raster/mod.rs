pub mod buffer;
pub mod color;

pub use buffer::{BufferError, PixelBuffer};
pub use color::Bgr;
