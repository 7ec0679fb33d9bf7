use lumen_image::ImageError;

/// An error type for the editor module.
#[derive(thiserror::Error, Debug)]
pub enum EditorError {
    /// Error raised by an image or image processing operation.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error when the configuration values are inconsistent.
    #[error("Invalid editor configuration: {0}")]
    InvalidConfig(String),

    /// Error when the intensity channel does not exist in the image.
    #[error("Intensity channel {0} does not exist in an image with {1} channels")]
    ChannelOutOfRange(usize, usize),

    /// Error when the requested gamma is outside `(0, max_gamma]`.
    #[error("Gamma {0} is outside the accepted range (0, {1}]")]
    GammaOutOfRange(f64, f64),

    /// Error when a slider level is above the configured maximum.
    #[error("Slider level {0} is above the maximum level {1}")]
    SliderOutOfRange(u8, u8),

    /// Error when reading a configuration file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error when parsing a configuration.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
