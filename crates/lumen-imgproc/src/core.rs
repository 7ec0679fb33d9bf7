use lumen_image::{Image, ImageError};

use crate::parallel;

/// A 256-entry intensity remapping table indexed by the input sample.
pub type LookupTable = [u8; 256];

/// Truncate a value toward zero into the 8-bit range.
///
/// Values below 0 saturate to 0, values above 255 saturate to 255 and NaN maps to 0.
#[inline]
pub fn truncate_u8(value: f32) -> u8 {
    value as u8
}

/// Clamp a value into `[0, 255]` and truncate the fractional part.
///
/// Takes an `f64` so that combinations like `src - strength * laplacian`
/// keep full precision before truncation.
#[inline]
pub fn clamp_u8(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Check that two images share the same size.
pub(crate) fn ensure_same_size<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &Image<T2, C2>,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }
    Ok(())
}

/// Remap every sample of a plane through a lookup table.
///
/// # Arguments
///
/// * `src` - The input plane.
/// * `dst` - The output plane, same size as `src`.
/// * `lut` - The lookup table, `dst[i] = lut[src[i]]`.
///
/// # Example
///
/// ```
/// use lumen_image::{Image, ImageSize};
/// use lumen_imgproc::core::apply_lut;
///
/// let size = ImageSize { width: 3, height: 1 };
/// let src = Image::<u8, 1>::new(size, vec![0, 1, 255]).unwrap();
/// let mut dst = Image::<u8, 1>::from_size_val(size, 0).unwrap();
///
/// let mut lut = [0u8; 256];
/// lut.iter_mut().enumerate().for_each(|(i, v)| *v = 255 - i as u8);
///
/// apply_lut(&src, &mut dst, &lut).unwrap();
/// assert_eq!(dst.as_slice(), &[255, 254, 0]);
/// ```
pub fn apply_lut(
    src: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
    lut: &LookupTable,
) -> Result<(), ImageError> {
    ensure_same_size(src, dst)?;

    parallel::par_iter_rows_val(src, dst, |&src_pixel, dst_pixel| {
        *dst_pixel = lut[src_pixel as usize];
    });

    Ok(())
}
