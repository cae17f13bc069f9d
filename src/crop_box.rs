use crate::CropBoxError;

/// A crop box parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl CropBox {
    pub fn new(left: u32, top: u32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Checks that the crop box lies within an image with given dimensions.
    pub(crate) fn check_bounds(&self, img_width: u32, img_height: u32) -> Result<(), CropBoxError> {
        if self.left >= img_width || self.top >= img_height {
            return Err(CropBoxError::PositionIsOutOfImageBoundaries);
        }
        let right = self.left as u64 + self.width as u64;
        let bottom = self.top as u64 + self.height as u64;
        if right > img_width as u64 || bottom > img_height as u64 {
            return Err(CropBoxError::SizeIsOutOfImageBoundaries);
        }
        Ok(())
    }
}
