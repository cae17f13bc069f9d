use crate::{PixelBuffer, ResizeError};

pub(crate) use table::*;

mod table;

/// Downscale the image with area-weighted ("box") filter.
///
/// Every pixel of the result is an average of all source pixels that it
/// covers, weighted by the covered area. This algorithm doesn't support
/// upscaling, a destination size that is zero or greater than the source
/// size is rejected with [ResizeError::InvalidSize].
///
/// Result values are truncated to `u8`, not rounded.
pub fn resize_area(
    src_image: &PixelBuffer,
    dst_width: u32,
    dst_height: u32,
) -> Result<PixelBuffer, ResizeError> {
    let mut row_buffer = Vec::new();
    let mut accum_buffer = Vec::new();
    resample_area(
        src_image,
        dst_width,
        dst_height,
        &mut row_buffer,
        &mut accum_buffer,
    )
}

pub(crate) fn check_area_size(
    src_image: &PixelBuffer,
    dst_width: u32,
    dst_height: u32,
) -> Result<(), ResizeError> {
    if dst_width == 0
        || dst_height == 0
        || dst_width > src_image.width()
        || dst_height > src_image.height()
    {
        return Err(ResizeError::InvalidSize);
    }
    Ok(())
}

/// Resample image with area filter, using given vectors as temporary
/// storage for rows of the result.
pub(crate) fn resample_area(
    src_image: &PixelBuffer,
    dst_width: u32,
    dst_height: u32,
    row_buffer: &mut Vec<f32>,
    accum_buffer: &mut Vec<f32>,
) -> Result<PixelBuffer, ResizeError> {
    check_area_size(src_image, dst_width, dst_height)?;
    let components = src_image.components();

    test_log!("compute horizontal area table");
    let horiz_table = compute_area_table(src_image.width(), dst_width, components);
    test_log!("compute vertical area table");
    let vert_table = compute_area_table(src_image.height(), dst_height, components);

    let mut dst_image = PixelBuffer::new_like(src_image, dst_width, dst_height);
    let dst_row_size = dst_image.row_size();
    prepare_buffer(row_buffer, dst_row_size);
    prepare_buffer(accum_buffer, dst_row_size);

    let src_buffer = src_image.buffer();
    let src_width = src_image.width() as usize;
    let dst_buffer = dst_image.buffer_mut();

    for vert_group in vert_table.groups() {
        accum_buffer.fill(0.);
        for vert_item in vert_group.items {
            // `src_index` is a row number multiplied by count of components.
            let src_row_offset = src_width * vert_item.src_index;
            let src_row = &src_buffer[src_row_offset..src_row_offset + src_image.row_size()];

            row_buffer.fill(0.);
            match components {
                1 => horiz_accumulate::<1>(src_row, &horiz_table, row_buffer),
                3 => horiz_accumulate::<3>(src_row, &horiz_table, row_buffer),
                _ => horiz_accumulate_dyn(src_row, &horiz_table, row_buffer, components),
            }

            let alpha = vert_item.alpha;
            accum_buffer
                .iter_mut()
                .zip(row_buffer.iter())
                .for_each(|(acc, &v)| *acc += alpha * v);
        }

        let dst_row_offset = vert_group.dst_index * dst_width as usize;
        let dst_row = &mut dst_buffer[dst_row_offset..dst_row_offset + dst_row_size];
        dst_row
            .iter_mut()
            .zip(accum_buffer.iter())
            .for_each(|(dst, &v)| *dst = v as u8);
    }

    Ok(dst_image)
}

fn prepare_buffer(buffer: &mut Vec<f32>, size: usize) {
    buffer.clear();
    buffer.resize(size, 0.);
}

/// Accumulate weighted source pixels of one row for images with
/// fixed count of components.
#[inline]
fn horiz_accumulate<const N: usize>(src_row: &[u8], table: &AreaTable, row_buffer: &mut [f32]) {
    for item in table.items.iter() {
        let src_pixel = &src_row[item.src_index..item.src_index + N];
        let dst_pixel = &mut row_buffer[item.dst_index..item.dst_index + N];
        for (d, &s) in dst_pixel.iter_mut().zip(src_pixel) {
            *d += s as f32 * item.alpha;
        }
    }
}

fn horiz_accumulate_dyn(
    src_row: &[u8],
    table: &AreaTable,
    row_buffer: &mut [f32],
    components: usize,
) {
    for item in table.items.iter() {
        let src_pixel = &src_row[item.src_index..item.src_index + components];
        let dst_pixel = &mut row_buffer[item.dst_index..item.dst_index + components];
        dst_pixel
            .iter_mut()
            .zip(src_pixel)
            .for_each(|(d, &s)| *d += s as f32 * item.alpha);
    }
}
