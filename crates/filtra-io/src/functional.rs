use std::path::Path;

use filtra_image::{Image, ImageSize};

use crate::error::IoError;

/// A decoded 8-bit image with any of the supported channel layouts.
pub enum GenericImage {
    /// 8-bit grayscale image
    L8(Image<u8, 1>),
    /// 8-bit grayscale image with alpha channel
    La8(Image<u8, 2>),
    /// 8-bit RGB image
    Rgb8(Image<u8, 3>),
    /// 8-bit RGB image with alpha channel
    Rgba8(Image<u8, 4>),
}

impl GenericImage {
    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        match self {
            Self::L8(img) => img.size(),
            Self::La8(img) => img.size(),
            Self::Rgb8(img) => img.size(),
            Self::Rgba8(img) => img.size(),
        }
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        match self {
            Self::L8(_) => 1,
            Self::La8(_) => 2,
            Self::Rgb8(_) => 3,
            Self::Rgba8(_) => 4,
        }
    }
}

/// Reads an image from the given file path.
///
/// The method tries to read from any image format supported by the image
/// crate and returns the pixel data with its native channel layout.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image containing the decoded pixel data.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<GenericImage, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    // open the file and map it to memory
    let file = std::fs::File::open(file_path)?;
    let mmap = unsafe { memmap2::Mmap::map(&file)? };

    // decode the data directly from memory
    let img = image::ImageReader::new(std::io::Cursor::new(&mmap))
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let image = match img.color() {
        image::ColorType::L8 => GenericImage::L8(Image::new(size, img.into_luma8().into_raw())?),
        image::ColorType::La8 => {
            GenericImage::La8(Image::new(size, img.into_luma_alpha8().into_raw())?)
        }
        image::ColorType::Rgb8 => GenericImage::Rgb8(Image::new(size, img.into_rgb8().into_raw())?),
        image::ColorType::Rgba8 => {
            GenericImage::Rgba8(Image::new(size, img.into_rgba8().into_raw())?)
        }
        _ => return Err(IoError::UnsupportedImageFormat),
    };

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::png::write_image_png_rgb8;

    #[test]
    fn read_any_missing_file() {
        let res = read_image_any("definitely/not/here.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn write_read_round_trip() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gradient.png");

        let size = ImageSize {
            width: 4,
            height: 3,
        };
        let data: Vec<u8> = (0..4 * 3 * 3).map(|i| (i * 7 % 256) as u8).collect();
        let image = Image::<u8, 3>::new(size, data.clone())?;

        write_image_png_rgb8(&file_path, &image)?;
        let image_back = read_image_any(&file_path)?;

        assert_eq!(image_back.size(), size);
        match image_back {
            GenericImage::Rgb8(img) => assert_eq!(img.as_slice(), data.as_slice()),
            _ => panic!("expected an rgb8 image"),
        }
        Ok(())
    }
}
