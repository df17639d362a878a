/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Error when the data length does not match the image shape.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when a pixel coordinate is out of bounds.
    #[error("Pixel coordinate ({0}, {1}) out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when an image has a zero width or height.
    #[error("Image must have at least one row and one column, got {0}x{1}")]
    ZeroImageSize(usize, usize),

    /// Error when source and destination shapes do not match.
    #[error("Source size ({0}) does not match destination size ({1})")]
    ShapeMismatch(String, String),
}
