use resize::Pixel::{Gray8, RGB8, RGBA8P};
use resize::Type::Triangle;
use rgb::FromSlice;

use crate::{PixelBuffer, ResizeError};

/// Resize the image with bilinear filter provided by `resize` crate.
///
/// Only images with 1, 3 or 4 components are supported. Four
/// components are filtered independently, without any special
/// treatment of alpha channel.
pub fn resize_bilinear(
    src_image: &PixelBuffer,
    dst_width: u32,
    dst_height: u32,
) -> Result<PixelBuffer, ResizeError> {
    check_bilinear_args(src_image, dst_width, dst_height)?;
    let components = src_image.components();

    let mut dst_image = PixelBuffer::new_like(src_image, dst_width, dst_height);
    let (src_w, src_h) = (src_image.width() as usize, src_image.height() as usize);
    let (dst_w, dst_h) = (dst_width as usize, dst_height as usize);
    let src = src_image.buffer();
    let dst = dst_image.buffer_mut();

    let res = match components {
        1 => resize::new(src_w, src_h, dst_w, dst_h, Gray8, Triangle)
            .and_then(|mut r| r.resize(src.as_gray(), dst.as_gray_mut())),
        3 => resize::new(src_w, src_h, dst_w, dst_h, RGB8, Triangle)
            .and_then(|mut r| r.resize(src.as_rgb(), dst.as_rgb_mut())),
        _ => resize::new(src_w, src_h, dst_w, dst_h, RGBA8P, Triangle)
            .and_then(|mut r| r.resize(src.as_rgba(), dst.as_rgba_mut())),
    };
    res.map_err(|_| ResizeError::InvalidSize)?;

    Ok(dst_image)
}

pub(crate) fn check_bilinear_args(
    src_image: &PixelBuffer,
    dst_width: u32,
    dst_height: u32,
) -> Result<(), ResizeError> {
    let components = src_image.components();
    if !matches!(components, 1 | 3 | 4) {
        return Err(ResizeError::UnsupportedComponents(components));
    }
    if dst_width == 0 || dst_height == 0 || src_image.is_empty() {
        return Err(ResizeError::InvalidSize);
    }
    Ok(())
}
