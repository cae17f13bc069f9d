use crate::{ColorSpace, CropBox, CropBoxError, ImageBufferError, ResizeError};

/// Owned buffer with pixels of decoded image.
///
/// Pixels are stored row by row, components of each pixel are interleaved
/// (for 3 components: `R, G, B, R, G, B, ...`). The length of the buffer
/// is always equal to `width * height * components`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
    origin_width: u32,
    origin_height: u32,
    components: usize,
    color_space: ColorSpace,
}

impl PixelBuffer {
    /// Create a zero-filled buffer with given dimensions.
    pub fn new(
        width: u32,
        height: u32,
        components: usize,
        color_space: ColorSpace,
    ) -> Result<Self, ImageBufferError> {
        if components == 0 {
            return Err(ImageBufferError::InvalidComponentsCount);
        }
        Ok(Self::zeroed(width, height, components, color_space))
    }

    fn zeroed(width: u32, height: u32, components: usize, color_space: ColorSpace) -> Self {
        Self {
            data: vec![0; buffer_size(width, height, components)],
            width,
            height,
            origin_width: width,
            origin_height: height,
            components,
            color_space,
        }
    }

    /// Create a buffer from vector with pixels data.
    pub fn from_vec(
        width: u32,
        height: u32,
        components: usize,
        color_space: ColorSpace,
        data: Vec<u8>,
    ) -> Result<Self, ImageBufferError> {
        if components == 0 {
            return Err(ImageBufferError::InvalidComponentsCount);
        }
        if data.len() != buffer_size(width, height, components) {
            return Err(ImageBufferError::InvalidBufferSize);
        }
        Ok(Self {
            data,
            width,
            height,
            origin_width: width,
            origin_height: height,
            components,
            color_space,
        })
    }

    /// Set dimensions of the image this buffer was produced from.
    #[must_use]
    pub fn with_origin(mut self, origin_width: u32, origin_height: u32) -> Self {
        self.origin_width = origin_width;
        self.origin_height = origin_height;
        self
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn origin_width(&self) -> u32 {
        self.origin_width
    }

    #[inline]
    pub fn origin_height(&self) -> u32 {
        self.origin_height
    }

    /// Count of bytes per pixel.
    #[inline]
    pub fn components(&self) -> usize {
        self.components
    }

    #[inline]
    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    /// Buffer with image pixels data.
    #[inline]
    pub fn buffer(&self) -> &[u8] {
        &self.data
    }

    /// Mutable buffer with image pixels data.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Count of bytes in one row of pixels.
    #[inline]
    pub fn row_size(&self) -> usize {
        self.width as usize * self.components
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if the length of the buffer matches its dimensions.
    pub fn is_consistent(&self) -> bool {
        self.components > 0
            && self.data.len() == buffer_size(self.width, self.height, self.components)
    }

    /// Components of the pixel at given position.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * self.components;
        self.data.get(offset..offset + self.components)
    }

    /// Iterate over rows of pixels.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // `max(1)` keeps `chunks_exact` valid for zero-width images,
        // the buffer is empty in this case anyway.
        self.data.chunks_exact(self.row_size().max(1))
    }

    /// Copy a rectangular region of the image into new buffer.
    pub fn crop(&self, crop_box: CropBox) -> Result<PixelBuffer, CropBoxError> {
        crop_box.check_bounds(self.width, self.height)?;
        let mut data = Vec::with_capacity(buffer_size(
            crop_box.width,
            crop_box.height,
            self.components,
        ));
        let start = crop_box.left as usize * self.components;
        let end = start + crop_box.width as usize * self.components;
        for row in self
            .rows()
            .skip(crop_box.top as usize)
            .take(crop_box.height as usize)
        {
            data.extend_from_slice(&row[start..end]);
        }
        Ok(Self {
            data,
            width: crop_box.width,
            height: crop_box.height,
            origin_width: crop_box.width,
            origin_height: crop_box.height,
            components: self.components,
            color_space: self.color_space,
        })
    }

    /// Downscale the image with area-weighted filter.
    ///
    /// See [resize_area](crate::resize_area).
    pub fn resize_area(&self, dst_width: u32, dst_height: u32) -> Result<PixelBuffer, ResizeError> {
        crate::resize_area(self, dst_width, dst_height)
    }

    /// Resize the image by nearest-neighbor sampling.
    ///
    /// See [resize_nearest](crate::resize_nearest).
    pub fn resize_nearest(&self, dst_width: u32, dst_height: u32) -> PixelBuffer {
        crate::resize_nearest(self, dst_width, dst_height)
    }

    /// Create an empty image with the same pixel format as the source one.
    pub(crate) fn new_like(src: &PixelBuffer, width: u32, height: u32) -> Self {
        Self::zeroed(width, height, src.components, src.color_space)
    }
}

#[inline]
pub(crate) fn buffer_size(width: u32, height: u32, components: usize) -> usize {
    width as usize * height as usize * components
}
