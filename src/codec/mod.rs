//! JPEG decoding and encoding of [PixelBuffer](crate::PixelBuffer).
pub use decode::*;
pub use encode::*;

mod decode;
mod encode;
