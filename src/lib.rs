#![doc = include_str!("../README.md")]
//!
//! ## Feature flags
#![doc = document_features::document_features!()]

pub use area::resize_area;
pub use color_space::ColorSpace;
pub use crop_box::CropBox;
pub use errors::*;
pub use nearest::resize_nearest;
pub use pixel_buffer::PixelBuffer;
pub use resizer::{ResizeAlg, Resizer};

#[macro_use]
mod utils;

mod area;
mod color_space;
mod crop_box;
mod errors;
mod nearest;
mod pixel_buffer;
mod resizer;
#[cfg(feature = "for_testing")]
pub mod testing;

cfg_if::cfg_if! {
    if #[cfg(feature = "bilinear")] {
        mod bilinear;
        pub use bilinear::resize_bilinear;
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "jpeg")] {
        pub mod codec;
        pub use codec::{decode, decode_reader, encode, DecodeOptions, EncodeOptions};
    }
}

#[cfg(feature = "image")]
mod image_crate;
