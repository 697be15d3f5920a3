//! Sparrow Atlas Resizer
//!
//! Desktop utility for rescaling a Sparrow-format sprite atlas: drop a PNG
//! and its XML description onto the window, pick a scale factor, and export
//! the resampled image plus the rewritten metadata.

pub mod app;
pub mod atlas;
pub mod error;
pub mod export;
pub mod loader;
pub mod texture;
pub mod view_state;

pub use error::{Error, Result};
