use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeError {
    #[error("Destination size is zero or greater than the size of the source image")]
    InvalidSize,
    #[error("Count of pixel components ({0}) is not supported by the resize algorithm")]
    UnsupportedComponents(usize),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageBufferError {
    #[error("Size of buffer doesn't match to width * height * components")]
    InvalidBufferSize,
    #[error("Count of pixel components must be greater than zero")]
    InvalidComponentsCount,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropBoxError {
    #[error("Position of the crop box is out of the image boundaries")]
    PositionIsOutOfImageBoundaries,
    #[error("Size of the crop box is out of the image boundaries")]
    SizeIsOutOfImageBoundaries,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Pixel format of the image is not supported")]
pub struct UnsupportedPixelFormat;

#[cfg(feature = "jpeg")]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Source image is empty")]
    EmptyImage,
    #[error("Crop and scale can't be used together while decoding")]
    UnsupportedOptions,
    #[error("Numerator and denominator of the scale factor must be greater than zero")]
    InvalidScaleFactor,
    #[error("Decoded image has unsupported pixel format")]
    UnsupportedPixelFormat,
    #[error(transparent)]
    CropBox(#[from] CropBoxError),
    #[error("Failed to read source image: {0}")]
    Io(String),
    #[error("JPEG decoding failed: {0}")]
    Codec(String),
}

#[cfg(feature = "jpeg")]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Image is empty")]
    EmptyImage,
    #[error("Size of image buffer doesn't match to width * height * components")]
    InconsistentBuffer,
    #[error("Quality must be in range 1..=100, got {0}")]
    InvalidQuality(u8),
    #[error("Image dimensions exceed the JPEG limit of 65535 pixels")]
    ImageTooLarge,
    #[error("Color space {0:?} with {1} components can't be stored as JPEG")]
    UnsupportedColorSpace(crate::ColorSpace, usize),
    #[error("JPEG encoding failed: {0}")]
    Codec(String),
}
