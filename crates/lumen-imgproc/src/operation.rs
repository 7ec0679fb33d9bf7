use lumen_image::{Image, ImageError};

use crate::{enhance, filter, histogram};

/// A plane operation together with its parameters.
///
/// This is the single entry point an application uses to run any of the point
/// or neighborhood transforms on an intensity plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operation {
    /// Histogram equalization.
    EqualizeHistogram,
    /// Gamma correction with the given exponent.
    Gamma(f64),
    /// Log transform.
    Log,
    /// Intensity inversion.
    Invert,
    /// Box blur with the given odd window size.
    Blur(usize),
    /// Laplacian sharpening with the given non-negative strength.
    Sharpen(f64),
    /// Laplacian edge detection.
    EdgeDetect,
}

impl Operation {
    /// A short name for logs and user facing messages.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::EqualizeHistogram => "histogram equalization",
            Operation::Gamma(_) => "gamma correction",
            Operation::Log => "log transform",
            Operation::Invert => "invert",
            Operation::Blur(_) => "blur",
            Operation::Sharpen(_) => "sharpen",
            Operation::EdgeDetect => "edge detection",
        }
    }

    /// Check the operation parameters without touching any image.
    ///
    /// # Errors
    ///
    /// Returns the same error the operation would return for its parameters.
    pub fn validate(&self) -> Result<(), ImageError> {
        match *self {
            Operation::Gamma(gamma) => enhance::gamma_lut(gamma).map(|_| ()),
            Operation::Blur(window_size) => filter::Kernel::box_blur(window_size).map(|_| ()),
            Operation::Sharpen(strength) if !strength.is_finite() || strength < 0.0 => {
                Err(ImageError::InvalidSharpenStrength(strength))
            }
            _ => Ok(()),
        }
    }

    /// Run the operation into a caller provided destination.
    ///
    /// PRECONDITION: `src` and `dst` must have the same shape.
    pub fn apply_into(&self, src: &Image<u8, 1>, dst: &mut Image<u8, 1>) -> Result<(), ImageError> {
        match *self {
            Operation::EqualizeHistogram => histogram::equalize_histogram(src, dst),
            Operation::Gamma(gamma) => enhance::gamma_correct(src, dst, gamma),
            Operation::Log => enhance::log_transform(src, dst),
            Operation::Invert => enhance::invert(src, dst),
            Operation::Blur(window_size) => filter::blur(src, dst, window_size),
            Operation::Sharpen(strength) => filter::sharpen(src, dst, strength),
            Operation::EdgeDetect => filter::edge_detect(src, dst),
        }
    }

    /// Run the operation and return a newly allocated plane.
    ///
    /// The input plane is never modified.
    ///
    /// # Example
    ///
    /// ```
    /// use lumen_image::{Image, ImageSize};
    /// use lumen_imgproc::operation::Operation;
    ///
    /// let src = Image::<u8, 1>::new(ImageSize { width: 2, height: 1 }, vec![0, 255]).unwrap();
    /// let dst = Operation::Invert.apply(&src).unwrap();
    ///
    /// assert_eq!(dst.as_slice(), &[255, 0]);
    /// assert_eq!(src.as_slice(), &[0, 255]);
    /// ```
    pub fn apply(&self, src: &Image<u8, 1>) -> Result<Image<u8, 1>, ImageError> {
        self.validate()?;
        log::debug!("applying {} to {}", self.name(), src.size());

        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;
        self.apply_into(src, &mut dst)?;

        Ok(dst)
    }
}
