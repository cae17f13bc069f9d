use jpeg_encoder::{ColorType, Encoder, SamplingFactor};

use crate::{ColorSpace, EncodeError, PixelBuffer};

/// Chroma subsampling of encoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Subsampling {
    S444,
    S422,
    #[default]
    S420,
    S440,
    S411,
}

impl From<Subsampling> for SamplingFactor {
    fn from(subsampling: Subsampling) -> Self {
        match subsampling {
            Subsampling::S444 => SamplingFactor::R_4_4_4,
            Subsampling::S422 => SamplingFactor::R_4_2_2,
            Subsampling::S420 => SamplingFactor::R_4_2_0,
            Subsampling::S440 => SamplingFactor::R_4_4_0,
            Subsampling::S411 => SamplingFactor::R_4_1_1,
        }
    }
}

/// Options of encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Quality of compression in range `1..=100`.
    pub quality: u8,
    pub subsampling: Subsampling,
    pub progressive: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            quality: 95,
            subsampling: Subsampling::default(),
            progressive: false,
        }
    }
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    #[must_use]
    pub fn subsampling(mut self, subsampling: Subsampling) -> Self {
        self.subsampling = subsampling;
        self
    }

    #[must_use]
    pub fn progressive(mut self, progressive: bool) -> Self {
        self.progressive = progressive;
        self
    }
}

/// Encode image into JPEG.
pub fn encode(image: &PixelBuffer, options: &EncodeOptions) -> Result<Vec<u8>, EncodeError> {
    if image.is_empty() {
        return Err(EncodeError::EmptyImage);
    }
    if !image.is_consistent() {
        return Err(EncodeError::InconsistentBuffer);
    }
    if !(1..=100).contains(&options.quality) {
        return Err(EncodeError::InvalidQuality(options.quality));
    }
    let max_size = u16::MAX as u32;
    if image.width() > max_size || image.height() > max_size {
        return Err(EncodeError::ImageTooLarge);
    }
    let color_type = jpeg_color_type(image.color_space(), image.components()).ok_or(
        EncodeError::UnsupportedColorSpace(image.color_space(), image.components()),
    )?;

    let mut result = Vec::new();
    let mut encoder = Encoder::new(&mut result, options.quality);
    encoder.set_sampling_factor(options.subsampling.into());
    encoder.set_progressive(options.progressive);
    encoder
        .encode(
            image.buffer(),
            image.width() as u16,
            image.height() as u16,
            color_type,
        )
        .map_err(|err| EncodeError::Codec(err.to_string()))?;
    Ok(result)
}

fn jpeg_color_type(color_space: ColorSpace, components: usize) -> Option<ColorType> {
    let color_type = match color_space {
        ColorSpace::Unknown => {
            return match components {
                1 => Some(ColorType::Luma),
                3 => Some(ColorType::Rgb),
                _ => None,
            }
        }
        cs if cs.is_grayscale() => ColorType::Luma,
        ColorSpace::Rgb | ColorSpace::ExtRgb => ColorType::Rgb,
        ColorSpace::ExtBgr => ColorType::Bgr,
        ColorSpace::ExtRgba | ColorSpace::ExtRgbx => ColorType::Rgba,
        ColorSpace::ExtBgra | ColorSpace::ExtBgrx => ColorType::Bgra,
        ColorSpace::YCbCr => ColorType::Ycbcr,
        ColorSpace::Cmyk => ColorType::Cmyk,
        ColorSpace::Ycck => ColorType::Ycck,
        _ => return None,
    };
    (color_space.components() == Some(components)).then_some(color_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_types() {
        assert!(matches!(
            jpeg_color_type(ColorSpace::Grayscale, 1),
            Some(ColorType::Luma)
        ));
        assert!(matches!(
            jpeg_color_type(ColorSpace::Unknown, 3),
            Some(ColorType::Rgb)
        ));
        assert!(jpeg_color_type(ColorSpace::Grayscale, 3).is_none());
        assert!(jpeg_color_type(ColorSpace::ExtArgb, 4).is_none());
        assert!(jpeg_color_type(ColorSpace::Unknown, 2).is_none());
    }
}
