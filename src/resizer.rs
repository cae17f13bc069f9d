use crate::area::{check_area_size, resample_area};
use crate::nearest::resample_nearest;
use crate::{PixelBuffer, ResizeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum ResizeAlg {
    /// Copy the nearest source pixel. Supports upscaling.
    Nearest,
    /// Area-weighted average of source pixels. Downscaling only.
    #[default]
    Area,
    #[cfg(feature = "bilinear")]
    /// Bilinear interpolation provided by `resize` crate.
    Bilinear,
}

/// Methods of this structure used to resize images.
///
/// Unlike [resize_area](crate::resize_area) and
/// [resize_nearest](crate::resize_nearest), `Resizer` keeps its
/// temporary buffers between calls.
#[derive(Default, Debug, Clone)]
pub struct Resizer {
    pub algorithm: ResizeAlg,
    row_buffer: Vec<f32>,
    accum_buffer: Vec<f32>,
    x_in_tab: Vec<usize>,
}

impl Resizer {
    /// Creates instance of `Resizer`
    pub fn new(algorithm: ResizeAlg) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    /// Resize source image to given size and return the result as
    /// new image.
    pub fn resize(
        &mut self,
        src_image: &PixelBuffer,
        dst_width: u32,
        dst_height: u32,
    ) -> Result<PixelBuffer, ResizeError> {
        match self.algorithm {
            ResizeAlg::Nearest => Ok(resample_nearest(
                src_image,
                dst_width,
                dst_height,
                &mut self.x_in_tab,
            )),
            ResizeAlg::Area => {
                check_area_size(src_image, dst_width, dst_height)?;
                if let Some(copy) = copy_of_same_size(src_image, dst_width, dst_height) {
                    return Ok(copy);
                }
                resample_area(
                    src_image,
                    dst_width,
                    dst_height,
                    &mut self.row_buffer,
                    &mut self.accum_buffer,
                )
            }
            #[cfg(feature = "bilinear")]
            ResizeAlg::Bilinear => {
                crate::bilinear::check_bilinear_args(src_image, dst_width, dst_height)?;
                if let Some(copy) = copy_of_same_size(src_image, dst_width, dst_height) {
                    return Ok(copy);
                }
                crate::resize_bilinear(src_image, dst_width, dst_height)
            }
        }
    }

    /// Returns the size of internal buffers used to store the results of
    /// intermediate resizing steps.
    pub fn size_of_internal_buffers(&self) -> usize {
        (self.row_buffer.capacity() + self.accum_buffer.capacity()) * std::mem::size_of::<f32>()
            + self.x_in_tab.capacity() * std::mem::size_of::<usize>()
    }

    /// Deallocates the internal buffers used to store the results of
    /// intermediate resizing steps.
    pub fn reset_internal_buffers(&mut self) {
        if self.row_buffer.capacity() > 0 {
            self.row_buffer = Vec::new();
        }
        if self.accum_buffer.capacity() > 0 {
            self.accum_buffer = Vec::new();
        }
        if self.x_in_tab.capacity() > 0 {
            self.x_in_tab = Vec::new();
        }
    }
}

/// Filtering of an image into the same size gives a copy of the image.
fn copy_of_same_size(src_image: &PixelBuffer, dst_width: u32, dst_height: u32) -> Option<PixelBuffer> {
    if src_image.width() == dst_width && src_image.height() == dst_height && !src_image.is_empty() {
        test_log!("copy source image without resizing");
        let copy = src_image.clone();
        Some(copy.with_origin(dst_width, dst_height))
    } else {
        None
    }
}
