#![deny(missing_docs)]
//! Editing session over a multi-channel image.
//!
//! The session owns the image, runs the [`lumen_imgproc`] operations on its
//! intensity channel and keeps an explicit undo history of whole-image
//! snapshots. The processing crates stay stateless.

/// Session configuration.
pub mod config;

/// Error types for the editor.
pub mod error;

/// Undo history of image snapshots.
pub mod history;

/// The editing session.
pub mod session;

pub use crate::config::EditorConfig;
pub use crate::error::EditorError;
pub use crate::history::History;
pub use crate::session::{EditorSession, PreviewKind};
