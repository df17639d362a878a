#![deny(missing_docs)]
//! Image decoding and encoding for the filtra convolution filters

/// Error types for the io module.
pub mod error;

/// High-level read API for any supported image format.
pub mod functional;

/// PNG encoding.
pub mod png;

pub use crate::error::IoError;
pub use crate::functional::{read_image_any, GenericImage};
