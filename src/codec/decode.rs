use std::io::Read;

use jpeg_decoder::{Decoder, PixelFormat};

use crate::{ColorSpace, CropBox, DecodeError, PixelBuffer};

/// Rational scale factor applied by decoder, e.g. `1/2`, `1/4`, `1/8`.
///
/// The decoder scales image in DCT domain and can only choose one of
/// the factors `n/8`, so the real factor is the smallest one that gives
/// an image not smaller than requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleFactor {
    pub num: u32,
    pub denom: u32,
}

impl ScaleFactor {
    pub fn new(num: u32, denom: u32) -> Self {
        Self { num, denom }
    }

    /// Size of one image dimension after scaling, rounded up.
    fn apply(&self, size: u16) -> u16 {
        let scaled = (size as u64 * self.num as u64).div_ceil(self.denom as u64);
        scaled.clamp(1, size as u64) as u16
    }
}

/// Options of decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Region of the image to keep. Whole image is kept by default.
    pub crop: Option<CropBox>,
    /// Scale factor applied while decoding.
    pub scale: Option<ScaleFactor>,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn crop(mut self, crop_box: CropBox) -> Self {
        self.crop = Some(crop_box);
        self
    }

    #[must_use]
    pub fn scale(mut self, num: u32, denom: u32) -> Self {
        self.scale = Some(ScaleFactor::new(num, denom));
        self
    }

    fn check(&self) -> Result<(), DecodeError> {
        if self.crop.is_some() && self.scale.is_some() {
            return Err(DecodeError::UnsupportedOptions);
        }
        if let Some(scale) = self.scale {
            if scale.num == 0 || scale.denom == 0 {
                return Err(DecodeError::InvalidScaleFactor);
            }
        }
        Ok(())
    }
}

/// Decode JPEG image.
///
/// Grayscale images are decoded into 1 component per pixel, color
/// images into RGB, CMYK and YCCK images into CMYK.
pub fn decode(data: &[u8], options: &DecodeOptions) -> Result<PixelBuffer, DecodeError> {
    if data.is_empty() {
        return Err(DecodeError::EmptyImage);
    }
    options.check()?;

    let mut decoder = Decoder::new(data);
    decoder.read_info().map_err(codec_error)?;
    let info = decoder.info().ok_or(DecodeError::EmptyImage)?;
    let (origin_width, origin_height) = (info.width, info.height);

    let (width, height) = match options.scale {
        Some(scale) => {
            test_log!("scale image while decoding");
            decoder
                .scale(scale.apply(origin_width), scale.apply(origin_height))
                .map_err(codec_error)?
        }
        None => (origin_width, origin_height),
    };

    let (components, color_space) = match info.pixel_format {
        PixelFormat::L8 => (1, ColorSpace::Grayscale),
        PixelFormat::RGB24 => (3, ColorSpace::Rgb),
        PixelFormat::CMYK32 => (4, ColorSpace::Cmyk),
        _ => return Err(DecodeError::UnsupportedPixelFormat),
    };

    let pixels = decoder.decode().map_err(codec_error)?;
    if pixels.is_empty() {
        return Err(DecodeError::EmptyImage);
    }
    let image = PixelBuffer::from_vec(
        width as u32,
        height as u32,
        components,
        color_space,
        pixels,
    )
    .map_err(|err| DecodeError::Codec(err.to_string()))?;

    let image = match options.crop {
        Some(crop_box) => {
            test_log!("crop decoded image");
            image.crop(crop_box)?
        }
        None => image,
    };
    Ok(image.with_origin(origin_width as u32, origin_height as u32))
}

/// Read whole JPEG image from reader and decode it.
pub fn decode_reader<R: Read>(
    mut reader: R,
    options: &DecodeOptions,
) -> Result<PixelBuffer, DecodeError> {
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .map_err(|err| DecodeError::Io(err.to_string()))?;
    decode(&data, options)
}

fn codec_error(err: jpeg_decoder::Error) -> DecodeError {
    DecodeError::Codec(err.to_string())
}
