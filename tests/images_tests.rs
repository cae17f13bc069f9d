use image::{DynamicImage, RgbImage};
use pixel_resample::{
    ColorSpace, CropBox, CropBoxError, ImageBufferError, PixelBuffer, UnsupportedPixelFormat,
};
use testing::gradient_image;

#[test]
fn create_image_from_wrong_buffer() {
    let res = PixelBuffer::from_vec(64, 32, 3, ColorSpace::Rgb, vec![0; 64 * 32 * 3 - 1]);
    assert_eq!(res.unwrap_err(), ImageBufferError::InvalidBufferSize);

    let res = PixelBuffer::from_vec(64, 32, 3, ColorSpace::Rgb, vec![0; 64 * 32 * 3 + 1]);
    assert_eq!(res.unwrap_err(), ImageBufferError::InvalidBufferSize);

    let res = PixelBuffer::from_vec(64, 32, 0, ColorSpace::Unknown, vec![]);
    assert_eq!(res.unwrap_err(), ImageBufferError::InvalidComponentsCount);
}

#[test]
fn new_image_without_components() {
    let res = PixelBuffer::new(64, 32, 0, ColorSpace::Unknown);
    assert_eq!(res.unwrap_err(), ImageBufferError::InvalidComponentsCount);
}

#[test]
fn new_image() {
    let image = PixelBuffer::new(10, 5, 4, ColorSpace::Cmyk).unwrap();
    assert_eq!(image.buffer().len(), 200);
    assert!(image.buffer().iter().all(|&v| v == 0));
    assert!(image.is_consistent());
    assert_eq!(image.row_size(), 40);
    assert_eq!(image.rows().count(), 5);
    assert_eq!(image.origin_width(), 10);

    let image = image.with_origin(100, 50);
    assert_eq!(image.origin_width(), 100);
    assert_eq!(image.origin_height(), 50);
    assert_eq!(image.width(), 10);
}

#[test]
fn pixel_access() {
    let image = PixelBuffer::from_vec(2, 2, 3, ColorSpace::Rgb, (0..12).collect()).unwrap();
    assert_eq!(image.pixel(0, 0), Some(&[0, 1, 2][..]));
    assert_eq!(image.pixel(1, 0), Some(&[3, 4, 5][..]));
    assert_eq!(image.pixel(1, 1), Some(&[9, 10, 11][..]));
    assert_eq!(image.pixel(2, 0), None);
    assert_eq!(image.pixel(0, 2), None);
}

#[test]
fn crop_image() {
    let image = gradient_image(10, 8, 3);
    let cropped = image.crop(CropBox::new(2, 3, 4, 5)).unwrap();
    assert_eq!(cropped.width(), 4);
    assert_eq!(cropped.height(), 5);
    assert_eq!(cropped.buffer().len(), 4 * 5 * 3);
    assert_eq!(cropped.origin_width(), 4);
    assert_eq!(cropped.color_space(), ColorSpace::Rgb);
    for y in 0..5 {
        for x in 0..4 {
            assert_eq!(cropped.pixel(x, y), image.pixel(x + 2, y + 3));
        }
    }

    assert_eq!(
        image.crop(CropBox::new(10, 0, 1, 1)).unwrap_err(),
        CropBoxError::PositionIsOutOfImageBoundaries
    );
    assert_eq!(
        image.crop(CropBox::new(5, 5, 6, 2)).unwrap_err(),
        CropBoxError::SizeIsOutOfImageBoundaries
    );
    assert_eq!(
        image.crop(CropBox::new(0, 1, 10, u32::MAX)).unwrap_err(),
        CropBoxError::SizeIsOutOfImageBoundaries
    );
}

#[test]
fn dynamic_image_conversions() {
    let rgb_image = RgbImage::from_fn(7, 5, |x, y| image::Rgb([x as u8, y as u8, 200]));
    let dyn_image = DynamicImage::ImageRgb8(rgb_image);

    let buffer = PixelBuffer::try_from(&dyn_image).unwrap();
    assert_eq!(buffer.width(), 7);
    assert_eq!(buffer.height(), 5);
    assert_eq!(buffer.components(), 3);
    assert_eq!(buffer.color_space(), ColorSpace::Rgb);
    assert_eq!(buffer.pixel(3, 4), Some(&[3, 4, 200][..]));

    let small = buffer.resize_nearest(3, 2);
    let small_dyn = DynamicImage::try_from(small).unwrap();
    assert_eq!(small_dyn.width(), 3);
    assert_eq!(small_dyn.height(), 2);
    assert!(matches!(small_dyn, DynamicImage::ImageRgb8(_)));

    let gray = PixelBuffer::new(4, 4, 1, ColorSpace::Grayscale).unwrap();
    assert!(matches!(
        DynamicImage::try_from(gray),
        Ok(DynamicImage::ImageLuma8(_))
    ));
}

#[test]
fn unsupported_dynamic_image_conversions() {
    let cmyk = PixelBuffer::new(4, 4, 4, ColorSpace::Cmyk).unwrap();
    assert_eq!(
        DynamicImage::try_from(cmyk).unwrap_err(),
        UnsupportedPixelFormat
    );
    let ycbcr = PixelBuffer::new(4, 4, 3, ColorSpace::YCbCr).unwrap();
    assert!(DynamicImage::try_from(ycbcr).is_err());

    let rgb16 = DynamicImage::new_rgb16(4, 4);
    assert_eq!(
        PixelBuffer::try_from(&rgb16).unwrap_err(),
        UnsupportedPixelFormat
    );
}
