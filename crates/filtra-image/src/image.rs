use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use filtra_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents an image with pixel data.
///
/// The pixel data is stored as a flat row-major buffer with interleaved
/// channels, addressed by `(y * width + x) * C + c`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image<T, const C: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const C: usize> Image<T, C> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use filtra_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if data.len() != size.width * size.height * C {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * C,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and constant pixel value.
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height * C];
        Image::new(size, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        C
    }

    /// Get the pixel data as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a mutable flat slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return the underlying pixel buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get a pixel sample with bounds checking.
    ///
    /// # Examples
    ///
    /// ```
    /// use filtra_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 1>::new(
    ///     ImageSize {
    ///         width: 2,
    ///         height: 1,
    ///     },
    ///     vec![3, 7],
    /// ).unwrap();
    ///
    /// assert_eq!(image.get(1, 0, 0), Some(&7));
    /// assert_eq!(image.get(2, 0, 0), None);
    /// ```
    pub fn get(&self, x: usize, y: usize, ch: usize) -> Option<&T> {
        if x >= self.width() || y >= self.height() || ch >= C {
            return None;
        }
        self.data.get((y * self.width() + x) * C + ch)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ImageError;
    use crate::image::{Image, ImageSize};

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20 * 3],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_channels(), 3);

        Ok(())
    }

    #[test]
    fn image_data_mismatch() {
        let res = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0u8; 11],
        );
        assert_eq!(res.unwrap_err(), ImageError::InvalidChannelShape(11, 12));
    }

    #[test]
    fn image_from_size_val() -> Result<(), ImageError> {
        let image = Image::<u8, 4>::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            128,
        )?;
        assert_eq!(image.as_slice().len(), 3 * 2 * 4);
        assert!(image.as_slice().iter().all(|&v| v == 128));

        Ok(())
    }

    #[test]
    fn image_get() -> Result<(), ImageError> {
        let image = Image::<u8, 2>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0, 1, 2, 3, 4, 5, 6, 7],
        )?;
        assert_eq!(image.get(1, 0, 1), Some(&3));
        assert_eq!(image.get(0, 1, 0), Some(&4));
        assert_eq!(image.get(2, 0, 0), None);
        assert_eq!(image.get(0, 2, 0), None);
        assert_eq!(image.get(0, 0, 2), None);

        Ok(())
    }
}
