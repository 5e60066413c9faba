//! SVG post-processing for exported artboards.
//!
//! Exported SVGs reference fonts by family name only, so they render with
//! whatever the viewer has installed. This crate inlines selected fonts as
//! base64 `@font-face` rules and fixes unquoted multi-word family names.
//!
//! Embedding happens in two passes: [`document`] inserts `<embeddedFont>`
//! marker elements through the structural writer, and [`splice`] replaces
//! each marker with a CDATA-wrapped CSS rule in the serialized text.

pub mod document;
pub mod error;
pub mod fonts;
pub mod process;
pub mod splice;

pub use document::{EmbeddedFont, VectorDocument};
pub use error::{Error, Result};
pub use fonts::{FontDecision, FontPolicy, FontRecord};
pub use process::{FontAssets, SvgReport, process_svg};
pub use splice::splice_font_faces;
