use lumen_image::{Image, ImageError};

use super::{convolve, correlate, Kernel};
use crate::{core, parallel};

/// Blur a plane using a box blur filter
///
/// The plane is convolved with a `window_size` x `window_size` grid of ones and
/// normalized by the number of samples in the window. Neighbors beyond the plane
/// border count as zero, so border samples darken as the window grows.
///
/// # Arguments
///
/// * `src` - The source plane with shape (H, W).
/// * `dst` - The destination plane with shape (H, W).
/// * `window_size` - The side of the blur window. Must be odd, 1 leaves the plane unchanged.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
///
/// # Example
///
/// ```
/// use lumen_image::{Image, ImageSize};
/// use lumen_imgproc::filter::blur;
///
/// let size = ImageSize { width: 3, height: 3 };
/// let src = Image::<u8, 1>::new(size, vec![0, 0, 0, 0, 90, 0, 0, 0, 0]).unwrap();
/// let mut dst = Image::<u8, 1>::from_size_val(size, 0).unwrap();
///
/// blur(&src, &mut dst, 3).unwrap();
/// assert_eq!(dst.as_slice(), &[10; 9]);
/// ```
pub fn blur(
    src: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
    window_size: usize,
) -> Result<(), ImageError> {
    let kernel = Kernel::box_blur(window_size)?;
    convolve(src, &kernel, dst)
}

/// Sharpen a plane by subtracting a scaled Laplacian response.
///
/// dst(x,y) = clamp(src(x,y) - strength * laplacian(x,y), 0, 255)
///
/// where the Laplacian response is the raw [`correlate`] output with
/// [`Kernel::laplacian`].
///
/// # Arguments
///
/// * `src` - The source plane with shape (H, W).
/// * `dst` - The destination plane with shape (H, W).
/// * `strength` - How much of the Laplacian to subtract, 0 leaves the plane unchanged.
///
/// # Errors
///
/// Returns [`ImageError::InvalidSharpenStrength`] if `strength` is negative or not finite.
pub fn sharpen(
    src: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
    strength: f64,
) -> Result<(), ImageError> {
    if !strength.is_finite() || strength < 0.0 {
        return Err(ImageError::InvalidSharpenStrength(strength));
    }

    core::ensure_same_size(src, dst)?;

    let mut laplacian = Image::<f32, 1>::from_size_val(src.size(), 0.0)?;
    correlate(src, &Kernel::laplacian(), &mut laplacian)?;

    parallel::par_iter_rows_val_two(src, &laplacian, dst, |&src_pixel, &lap, dst_pixel| {
        *dst_pixel = core::clamp_u8(src_pixel as f64 - strength * lap as f64);
    });

    Ok(())
}

/// Detect edges with the Laplacian kernel.
///
/// dst(x,y) = clamp(laplacian(x,y), 0, 255)
///
/// # Arguments
///
/// * `src` - The source plane with shape (H, W).
/// * `dst` - The destination plane with shape (H, W).
pub fn edge_detect(src: &Image<u8, 1>, dst: &mut Image<u8, 1>) -> Result<(), ImageError> {
    core::ensure_same_size(src, dst)?;

    let mut laplacian = Image::<f32, 1>::from_size_val(src.size(), 0.0)?;
    correlate(src, &Kernel::laplacian(), &mut laplacian)?;

    parallel::par_iter_rows_val(&laplacian, dst, |&lap, dst_pixel| {
        *dst_pixel = core::clamp_u8(lap as f64);
    });

    Ok(())
}
