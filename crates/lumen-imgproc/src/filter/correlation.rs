use lumen_image::{Image, ImageError};
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

use super::Kernel;
use crate::{core, parallel};

/// Correlate a plane with a kernel over a zero-padded border.
///
/// Each output sample is the weighted sum of the `K x K` neighborhood centered
/// at that sample. Neighbors that fall outside the plane count as zero, as if
/// the plane had been padded with `(K - 1) / 2` rows and columns of zeros on
/// every side. The result is neither normalized nor clamped.
///
/// The kernel is visited row by row, column by column for every sample so
/// the floating point accumulation order does not depend on the thread pool.
///
/// # Arguments
///
/// * `src` - The input plane with shape (H, W).
/// * `kernel` - The kernel to correlate with.
/// * `dst` - The raw response with shape (H, W).
///
/// # Example
///
/// ```
/// use lumen_image::{Image, ImageSize};
/// use lumen_imgproc::filter::{correlate, Kernel};
///
/// let size = ImageSize { width: 3, height: 3 };
/// let src = Image::<u8, 1>::from_size_val(size, 128).unwrap();
/// let mut dst = Image::<f32, 1>::from_size_val(size, 0.0).unwrap();
///
/// correlate(&src, &Kernel::laplacian(), &mut dst).unwrap();
/// assert_eq!(dst.get([1, 1, 0]), Some(&0.0));
/// assert_eq!(dst.get([0, 0, 0]), Some(&-640.0));
/// ```
pub fn correlate(
    src: &Image<u8, 1>,
    kernel: &Kernel,
    dst: &mut Image<f32, 1>,
) -> Result<(), ImageError> {
    core::ensure_same_size(src, dst)?;

    let rows = src.rows() as isize;
    let cols = src.cols();
    let size = kernel.size();
    let radius = kernel.radius() as isize;
    let weights = kernel.weights();
    let src_data = src.as_slice();

    log::trace!(
        "correlate {}x{} plane with {}x{} kernel",
        src.cols(),
        src.rows(),
        size,
        size
    );

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols)
        .enumerate()
        .for_each(|(row, dst_row)| {
            for (col, dst_pixel) in dst_row.iter_mut().enumerate() {
                let mut sum = 0.0f32;
                for (ky, kernel_row) in weights.chunks_exact(size).enumerate() {
                    let y = row as isize + ky as isize - radius;
                    if y < 0 || y >= rows {
                        continue;
                    }
                    let src_row = &src_data[y as usize * cols..(y as usize + 1) * cols];
                    for (kx, &weight) in kernel_row.iter().enumerate() {
                        let x = col as isize + kx as isize - radius;
                        if x < 0 || x >= cols as isize {
                            continue;
                        }
                        sum += weight * src_row[x as usize] as f32;
                    }
                }
                *dst_pixel = sum;
            }
        });

    Ok(())
}

/// Convolve a plane with a kernel and normalize by the kernel weight sum.
///
/// The kernel is flipped both horizontally and vertically, correlated with the
/// plane using [`correlate`], and each response is divided by the sum of the
/// kernel weights and truncated toward zero into `[0, 255]`.
///
/// # Arguments
///
/// * `src` - The input plane with shape (H, W).
/// * `kernel` - The kernel to convolve with.
/// * `dst` - The output plane with shape (H, W).
///
/// # Errors
///
/// Returns [`ImageError::ZeroKernelSum`] if the kernel weights sum to zero, and
/// [`ImageError::InvalidImageSize`] if `src` and `dst` differ in size.
pub fn convolve(
    src: &Image<u8, 1>,
    kernel: &Kernel,
    dst: &mut Image<u8, 1>,
) -> Result<(), ImageError> {
    core::ensure_same_size(src, dst)?;

    let norm = kernel.sum();
    if norm == 0.0 {
        return Err(ImageError::ZeroKernelSum);
    }

    let mut response = Image::<f32, 1>::from_size_val(src.size(), 0.0)?;
    correlate(src, &kernel.flipped(), &mut response)?;

    parallel::par_iter_rows_val(&response, dst, |&value, dst_pixel| {
        *dst_pixel = core::truncate_u8(value / norm);
    });

    Ok(())
}
