//! Filter operations
//!
//! This module provides the fixed 3x3 kernel catalog and the convolution
//! engine that applies a kernel over disjoint row ranges.

/// Filter kernels
pub mod kernels;
pub use kernels::{FilterKind, Kernel3};

/// 3x3 convolution
mod convolution;
pub use convolution::*;
