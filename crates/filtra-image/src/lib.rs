#![deny(missing_docs)]
//! Image types for the filtra convolution filters

/// image representation for raster filtering purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
