//! Intensity-plane image processing and editing core.
//!
//! - [`image`]: the `Image` container and its errors.
//! - [`imgproc`]: correlation based filters, point transforms and histograms.
//! - [`editor`]: an editing session with an undo history.

#[doc(inline)]
pub use lumen_image as image;

#[doc(inline)]
pub use lumen_imgproc as imgproc;

#[doc(inline)]
pub use lumen_editor as editor;
