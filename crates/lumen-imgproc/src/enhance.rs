use lumen_image::{Image, ImageError};

use crate::core::{self, LookupTable};

/// Build the lookup table of a gamma correction.
///
/// lut[v] = trunc(C * v^gamma), with C = 255 / 255^gamma
///
/// # Errors
///
/// Returns [`ImageError::InvalidGamma`] if `gamma` is not finite or not greater than zero.
pub fn gamma_lut(gamma: f64) -> Result<LookupTable, ImageError> {
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(ImageError::InvalidGamma(gamma));
    }

    let norm = 255.0 / 255f64.powf(gamma);

    let mut lut = [0u8; 256];
    for (v, out) in lut.iter_mut().enumerate() {
        // float to int casts truncate toward zero and saturate at the u8 bounds
        *out = (norm * (v as f64).powf(gamma)) as u8;
    }

    Ok(lut)
}

/// Build the lookup table of the log transform.
///
/// lut[v] = trunc(C * log2(v + 1)), with C = 255 / log2(256)
pub fn log_lut() -> LookupTable {
    let norm = 255.0 / 256f64.log2();

    let mut lut = [0u8; 256];
    for (v, out) in lut.iter_mut().enumerate() {
        *out = (norm * (v as f64 + 1.0).log2()) as u8;
    }

    lut
}

/// Apply a gamma correction to a plane.
///
/// dst(x,y) = 255 * (src(x,y) / 255)^gamma
///
/// A gamma below 1 brightens the mid tones, a gamma above 1 darkens them and
/// a gamma of exactly 1 leaves the plane unchanged.
///
/// # Arguments
///
/// * `src` - The input plane.
/// * `dst` - The output plane.
/// * `gamma` - The gamma exponent, strictly positive.
///
/// # Errors
///
/// Returns an error if `gamma` is not strictly positive or if the sizes of
/// `src` and `dst` do not match.
///
/// # Example
///
/// ```
/// use lumen_image::{Image, ImageSize};
/// use lumen_imgproc::enhance::gamma_correct;
///
/// let size = ImageSize { width: 3, height: 1 };
/// let src = Image::<u8, 1>::new(size, vec![0, 128, 255]).unwrap();
/// let mut dst = Image::<u8, 1>::from_size_val(size, 0).unwrap();
///
/// gamma_correct(&src, &mut dst, 2.0).unwrap();
/// assert_eq!(dst.as_slice()[1], 64);
/// ```
pub fn gamma_correct(
    src: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
    gamma: f64,
) -> Result<(), ImageError> {
    let lut = gamma_lut(gamma)?;
    log::debug!("gamma correction with gamma {gamma}");
    core::apply_lut(src, dst, &lut)
}

/// Apply a log transform to a plane.
///
/// dst(x,y) = 255 / log2(256) * log2(src(x,y) + 1)
///
/// The result is truncated into the unsigned range, so 255 maps to 255.
pub fn log_transform(src: &Image<u8, 1>, dst: &mut Image<u8, 1>) -> Result<(), ImageError> {
    core::apply_lut(src, dst, &log_lut())
}

/// Invert the intensities of a plane, `dst(x,y) = 255 - src(x,y)`.
pub fn invert(src: &Image<u8, 1>, dst: &mut Image<u8, 1>) -> Result<(), ImageError> {
    let mut lut = [0u8; 256];
    lut.iter_mut()
        .enumerate()
        .for_each(|(v, out)| *out = 255 - v as u8);
    core::apply_lut(src, dst, &lut)
}
