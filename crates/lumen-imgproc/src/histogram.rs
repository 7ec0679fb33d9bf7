use lumen_image::{Image, ImageError};
use rayon::prelude::*;

use crate::core::{self, LookupTable};

/// Count how many samples of a plane take each of the 256 intensity values.
///
/// # Example
///
/// ```
/// use lumen_image::{Image, ImageSize};
/// use lumen_imgproc::histogram::intensity_histogram;
///
/// let image = Image::<u8, 1>::new(
///   ImageSize {
///     width: 2,
///     height: 2,
///   },
///   vec![0, 7, 7, 255],
/// ).unwrap();
///
/// let hist = intensity_histogram(&image);
/// assert_eq!(hist[0], 1);
/// assert_eq!(hist[7], 2);
/// assert_eq!(hist[255], 1);
/// ```
pub fn intensity_histogram(src: &Image<u8, 1>) -> [usize; 256] {
    src.as_slice()
        .par_chunks(4096)
        .fold(
            || [0usize; 256],
            |mut local, chunk| {
                for &px in chunk {
                    local[px as usize] += 1;
                }
                local
            },
        )
        .reduce(
            || [0usize; 256],
            |mut a, b| {
                a.iter_mut().zip(b.iter()).for_each(|(a, b)| *a += b);
                a
            },
        )
}

/// Compute the pixel intensity histogram of an image.
///
/// NOTE: this is limited to 8-bit 1-channel images.
///
/// # Arguments
///
/// * `src` - The input image to compute the histogram.
/// * `hist` - The output histogram, counts are added to its current values.
/// * `num_bins` - The number of bins to use for the histogram.
///
/// # Errors
///
/// Returns an error if the number of bins is not in `[1, 256]` or does not
/// match the length of `hist`.
///
/// # Example
///
/// ```
/// use lumen_image::{Image, ImageSize};
/// use lumen_imgproc::histogram::compute_histogram;
///
/// let image = Image::<u8, 1>::new(
///   ImageSize {
///     width: 3,
///     height: 3,
///   },
///   vec![0, 2, 4, 128, 130, 132, 254, 255, 255],
/// ).unwrap();
///
/// let mut histogram = vec![0; 3];
///
/// compute_histogram(&image, &mut histogram, 3).unwrap();
/// assert_eq!(histogram, vec![3, 3, 3]);
/// ```
pub fn compute_histogram(
    src: &Image<u8, 1>,
    hist: &mut [usize],
    num_bins: usize,
) -> Result<(), ImageError> {
    if num_bins == 0 || num_bins > 256 || hist.len() != num_bins {
        return Err(ImageError::InvalidHistogramBins(num_bins));
    }

    intensity_histogram(src)
        .iter()
        .enumerate()
        .for_each(|(value, &count)| hist[(value * num_bins) >> 8] += count);

    Ok(())
}

/// Derive the histogram equalization lookup table of a plane.
///
/// The table maps each intensity to `floor(cdf(v) * 255)`, where `cdf` is the
/// cumulative distribution of the plane intensities. The cumulative counts are
/// kept as integers, so the table is non-decreasing and always ends at 255.
pub fn equalization_lut(src: &Image<u8, 1>) -> LookupTable {
    let hist = intensity_histogram(src);
    let total = src.as_slice().len() as u64;

    let mut lut = [0u8; 256];
    let mut cumulative = 0u64;
    for (out, &count) in lut.iter_mut().zip(hist.iter()) {
        cumulative += count as u64;
        *out = (cumulative * 255 / total) as u8;
    }

    lut
}

/// Equalize the histogram of a plane.
///
/// Each sample is remapped through [`equalization_lut`], spreading the most
/// frequent intensities over the full `[0, 255]` range. Equalizing an already
/// equalized plane is not guaranteed to leave it unchanged.
///
/// # Arguments
///
/// * `src` - The input plane.
/// * `dst` - The output plane with the same size as `src`.
pub fn equalize_histogram(src: &Image<u8, 1>, dst: &mut Image<u8, 1>) -> Result<(), ImageError> {
    let lut = equalization_lut(src);
    core::apply_lut(src, dst, &lut)
}
