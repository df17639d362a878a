/// A 3x3 convolution kernel, row-major, with the center weight at `[1][1]`.
pub type Kernel3 = [[f32; 3]; 3];

/// The fixed catalog of named 3x3 filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Laplacian edge detection.
    Edge,
    /// Sharpening.
    Sharpen,
    /// Uniform 3x3 box blur.
    Blur,
    /// 3x3 Gaussian blur.
    GaussianBlur,
    /// Emboss.
    Emboss,
    /// Identity (passthrough).
    Identity,
}

impl FilterKind {
    /// Resolve a filter name from the CLI surface.
    ///
    /// Names are case-sensitive. Unrecognized names resolve to
    /// [`FilterKind::Identity`]; this permissive default is part of the
    /// catalog contract, not an error path.
    pub fn from_name(name: &str) -> Self {
        match name {
            "edge" => Self::Edge,
            "sharpen" => Self::Sharpen,
            "blur" => Self::Blur,
            "gauss" => Self::GaussianBlur,
            "emboss" => Self::Emboss,
            _ => Self::Identity,
        }
    }

    /// Get the kernel matrix for this filter.
    pub const fn kernel(&self) -> Kernel3 {
        match self {
            Self::Edge => [[0.0, -1.0, 0.0], [-1.0, 4.0, -1.0], [0.0, -1.0, 0.0]],
            Self::Sharpen => [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]],
            Self::Blur => [[1.0 / 9.0; 3]; 3],
            Self::GaussianBlur => [
                [1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0],
                [1.0 / 8.0, 1.0 / 4.0, 1.0 / 8.0],
                [1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0],
            ],
            Self::Emboss => [[-2.0, -1.0, 0.0], [-1.0, 1.0, 1.0], [0.0, 1.0, 2.0]],
            Self::Identity => [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]],
        }
    }
}
