//! Sketch container codec.
//!
//! A `.sketch` file is a zip archive of JSON documents, images and previews.
//! [`unpack`] expands it into a directory tree and [`pack`] rebuilds the
//! archive from such a tree.

pub mod codec;
pub mod error;

pub use codec::{pack, unpack};
pub use error::{Error, Result};
