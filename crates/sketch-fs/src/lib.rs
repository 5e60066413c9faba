//! Filesystem helpers for git-sketch
//!
//! Provides slash-normalized paths, the fixed names of the sketch directory
//! layout, and async I/O helpers that the sync pipeline builds on.

pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use constants::SketchPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
