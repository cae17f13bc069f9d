use crate::PixelBuffer;

/// Resize the image by copying the nearest source pixel into every
/// pixel of the result.
///
/// Works for both upscaling and downscaling. If any of destination
/// dimensions is zero, the result is an empty image.
pub fn resize_nearest(src_image: &PixelBuffer, dst_width: u32, dst_height: u32) -> PixelBuffer {
    let mut x_in_tab = Vec::new();
    resample_nearest(src_image, dst_width, dst_height, &mut x_in_tab)
}

/// Resample image by nearest-neighbor, using given vector as storage
/// for the table of horizontal source positions.
pub(crate) fn resample_nearest(
    src_image: &PixelBuffer,
    dst_width: u32,
    dst_height: u32,
    x_in_tab: &mut Vec<usize>,
) -> PixelBuffer {
    let mut dst_image = PixelBuffer::new_like(src_image, dst_width, dst_height);
    if dst_image.is_empty() || src_image.is_empty() {
        return dst_image;
    }

    let components = src_image.components();
    let src_width = src_image.width();
    let x_scale = src_width as f32 / dst_width as f32;
    let y_scale = src_image.height() as f32 / dst_height as f32;

    // Pretabulate horizontal pixel positions
    let max_src_x = src_width as usize - 1;
    x_in_tab.clear();
    x_in_tab.extend(
        (0..dst_width).map(|x| ((x as f32 * x_scale).floor() as usize).min(max_src_x) * components),
    );

    let max_src_y = src_image.height() as usize - 1;
    let src_row_size = src_image.row_size();
    let dst_row_size = dst_image.row_size();
    let src_buffer = src_image.buffer();
    let dst_rows = dst_image.buffer_mut().chunks_exact_mut(dst_row_size);
    for (y, dst_row) in dst_rows.enumerate() {
        let src_y = ((y as f32 * y_scale).floor() as usize).min(max_src_y);
        let src_row_offset = src_y * src_row_size;
        let src_row = &src_buffer[src_row_offset..src_row_offset + src_row_size];
        match components {
            1 => copy_pixels::<1>(src_row, dst_row, x_in_tab),
            3 => copy_pixels::<3>(src_row, dst_row, x_in_tab),
            _ => copy_pixels_dyn(src_row, dst_row, x_in_tab, components),
        }
    }

    dst_image
}

#[inline]
fn copy_pixels<const N: usize>(src_row: &[u8], dst_row: &mut [u8], x_in_tab: &[usize]) {
    for (&x_in, dst_pixel) in x_in_tab.iter().zip(dst_row.chunks_exact_mut(N)) {
        dst_pixel.copy_from_slice(&src_row[x_in..x_in + N]);
    }
}

fn copy_pixels_dyn(src_row: &[u8], dst_row: &mut [u8], x_in_tab: &[usize], components: usize) {
    for (&x_in, dst_pixel) in x_in_tab.iter().zip(dst_row.chunks_exact_mut(components)) {
        dst_pixel.copy_from_slice(&src_row[x_in..x_in + components]);
    }
}
