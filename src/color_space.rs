/// Color space of decoded pixels.
///
/// Resampling never looks at this tag, it is carried from the source
/// buffer to the result unchanged. Only the count of components
/// affects how pixels are processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ColorSpace {
    #[default]
    Unknown,
    Grayscale,
    Rgb,
    YCbCr,
    Cmyk,
    Ycck,
    ExtRgb,
    ExtRgbx,
    ExtBgr,
    ExtBgrx,
    ExtXbgr,
    ExtXrgb,
    ExtRgba,
    ExtBgra,
    ExtAbgr,
    ExtArgb,
    /// Packed 5-6-5 bits RGB, two bytes per pixel.
    Rgb565,
}

impl ColorSpace {
    /// Returns the usual count of components for pixels in this color space.
    pub fn components(&self) -> Option<usize> {
        match self {
            Self::Unknown => None,
            Self::Grayscale => Some(1),
            Self::Rgb565 => Some(2),
            Self::Rgb | Self::YCbCr | Self::ExtRgb | Self::ExtBgr => Some(3),
            Self::Cmyk
            | Self::Ycck
            | Self::ExtRgbx
            | Self::ExtBgrx
            | Self::ExtXbgr
            | Self::ExtXrgb
            | Self::ExtRgba
            | Self::ExtBgra
            | Self::ExtAbgr
            | Self::ExtArgb => Some(4),
        }
    }

    #[inline]
    pub fn is_grayscale(&self) -> bool {
        matches!(self, Self::Grayscale)
    }
}
