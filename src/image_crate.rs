use image::{DynamicImage, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};

use crate::{ColorSpace, PixelBuffer, UnsupportedPixelFormat};

impl TryFrom<&DynamicImage> for PixelBuffer {
    type Error = UnsupportedPixelFormat;

    fn try_from(image: &DynamicImage) -> Result<Self, Self::Error> {
        let (components, color_space) = match image {
            DynamicImage::ImageLuma8(_) => (1, ColorSpace::Grayscale),
            DynamicImage::ImageLumaA8(_) => (2, ColorSpace::Unknown),
            DynamicImage::ImageRgb8(_) => (3, ColorSpace::Rgb),
            DynamicImage::ImageRgba8(_) => (4, ColorSpace::ExtRgba),
            _ => return Err(UnsupportedPixelFormat),
        };
        PixelBuffer::from_vec(
            image.width(),
            image.height(),
            components,
            color_space,
            image.as_bytes().to_vec(),
        )
        .map_err(|_| UnsupportedPixelFormat)
    }
}

impl TryFrom<PixelBuffer> for DynamicImage {
    type Error = UnsupportedPixelFormat;

    fn try_from(buffer: PixelBuffer) -> Result<Self, Self::Error> {
        let (width, height) = (buffer.width(), buffer.height());
        let components = buffer.components();
        let color_space = buffer.color_space();
        let image = match (components, color_space) {
            (1, ColorSpace::Grayscale | ColorSpace::Unknown) => {
                GrayImage::from_raw(width, height, buffer.into_vec()).map(Self::ImageLuma8)
            }
            (2, ColorSpace::Unknown) => {
                GrayAlphaImage::from_raw(width, height, buffer.into_vec()).map(Self::ImageLumaA8)
            }
            (3, ColorSpace::Rgb | ColorSpace::ExtRgb | ColorSpace::Unknown) => {
                RgbImage::from_raw(width, height, buffer.into_vec()).map(Self::ImageRgb8)
            }
            (4, ColorSpace::ExtRgba | ColorSpace::ExtRgbx | ColorSpace::Unknown) => {
                RgbaImage::from_raw(width, height, buffer.into_vec()).map(Self::ImageRgba8)
            }
            _ => None,
        };
        image.ok_or(UnsupportedPixelFormat)
    }
}
