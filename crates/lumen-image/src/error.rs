/// An error type for the image and image processing crates.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when an image has zero rows or zero columns.
    #[error("Image must have at least one row and one column, got {0}x{1}")]
    ZeroSizedImage(usize, usize),

    /// Error when two images that must share a size do not.
    #[error("Image size ({0}x{1}) does not match the expected size ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index {0} is out of bounds for an image with {1} channels")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when a pixel value cannot be cast to the target type.
    #[error("Failed to cast image data to {0}")]
    CastError(String),

    /// Error when the kernel size is even, zero or inconsistent with its weights.
    #[error("Invalid kernel size {0}, the kernel side must be odd and at least 1")]
    InvalidKernelSize(usize),

    /// Error when a kernel is built from the wrong number of weights.
    #[error("Kernel of size {0} needs {1} weights, got {2}")]
    InvalidKernelWeights(usize, usize, usize),

    /// Error when a normalized convolution is requested with weights summing to zero.
    #[error("Kernel weights sum to zero and cannot be used for normalization")]
    ZeroKernelSum,

    /// Error when the gamma value is not strictly positive.
    #[error("Invalid gamma {0}, gamma must be a finite value greater than zero")]
    InvalidGamma(f64),

    /// Error when the sharpen strength is negative.
    #[error("Invalid sharpen strength {0}, strength must be finite and non-negative")]
    InvalidSharpenStrength(f64),

    /// Error when the number of histogram bins is invalid.
    #[error("Invalid number of histogram bins {0}, expected a value in [1, 256]")]
    InvalidHistogramBins(usize),
}
