use filtra_image::{Image, ImageError};

use super::kernels::Kernel3;
use crate::parallel::{par_process_rows, ParallelError};

/// Errors that can occur while applying a filter.
#[derive(thiserror::Error, Debug)]
pub enum FilterError {
    /// The source or destination image is invalid.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The parallel dispatch failed.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}

/// Round to nearest and saturate an accumulated sample into `0..=255`.
fn clamp_u8(v: f32) -> u8 {
    if v < 0.0 {
        0
    } else if v > 255.0 {
        255
    } else {
        (v + 0.5) as u8
    }
}

/// Apply a 3x3 convolution kernel to an image.
///
/// Every destination sample is the kernel-weighted sum of the 3x3
/// neighborhood of the source centered at the same position, computed
/// independently per channel. Neighbor coordinates outside the image are
/// clamped to the nearest edge (edge replication), so borders see
/// replicated rather than zero-padded samples. Sums are rounded to the
/// nearest integer and saturated into `0..=255`.
///
/// The rows are partitioned into `num_threads` contiguous disjoint ranges
/// and processed concurrently; the partition never changes the output, and
/// the call blocks until every worker is done. `num_threads` is clamped to
/// `1..=height`.
///
/// PRECONDITION: `src` and `dst` must have the same shape, with at least
/// one row and one column.
///
/// # Examples
///
/// ```
/// use filtra_image::{Image, ImageSize};
/// use filtra_imgproc::filter::{filter_3x3, FilterKind};
///
/// let size = ImageSize { width: 4, height: 3 };
/// let src = Image::<u8, 1>::from_size_val(size, 128).unwrap();
/// let mut dst = Image::<u8, 1>::from_size_val(size, 0).unwrap();
///
/// filter_3x3(&src, &mut dst, &FilterKind::Blur.kernel(), 2).unwrap();
/// assert_eq!(dst.as_slice(), src.as_slice());
/// ```
pub fn filter_3x3<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    kernel: &Kernel3,
    num_threads: usize,
) -> Result<(), FilterError> {
    let width = src.width();
    let height = src.height();

    if width == 0 || height == 0 {
        return Err(ImageError::ZeroImageSize(width, height).into());
    }
    if src.size() != dst.size() {
        return Err(
            ImageError::ShapeMismatch(src.size().to_string(), dst.size().to_string()).into(),
        );
    }

    // never spawn more workers than there are rows
    let num_threads = num_threads.clamp(1, height);

    let src_data = src.as_slice();
    par_process_rows(dst.as_slice_mut(), width * C, num_threads, |rows, chunk| {
        for (i, dst_row) in chunk.chunks_exact_mut(width * C).enumerate() {
            let y = rows.start + i;
            let my = y.saturating_sub(1);
            let py = (y + 1).min(height - 1);
            for x in 0..width {
                let mx = x.saturating_sub(1);
                let px = (x + 1).min(width - 1);
                for ch in 0..C {
                    let sample = |xx: usize, yy: usize| src_data[(yy * width + xx) * C + ch] as f32;
                    let acc = kernel[0][0] * sample(mx, my)
                        + kernel[0][1] * sample(x, my)
                        + kernel[0][2] * sample(px, my)
                        + kernel[1][0] * sample(mx, y)
                        + kernel[1][1] * sample(x, y)
                        + kernel[1][2] * sample(px, y)
                        + kernel[2][0] * sample(mx, py)
                        + kernel[2][1] * sample(x, py)
                        + kernel[2][2] * sample(px, py);
                    dst_row[x * C + ch] = clamp_u8(acc);
                }
            }
        }
    })?;

    Ok(())
}
