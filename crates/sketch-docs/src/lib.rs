//! README maintenance for git-sketch.
//!
//! A design directory's `README.md` shows every exported artboard. The
//! listing lives between two HTML-comment sentinels:
//!
//! ```text
//! <!--start-images-->
//!
//! ### button
//!
//! ![content](button/exports/button.svg)
//!
//! <!--end-images-->
//! ```
//!
//! Everything outside the sentinels is left alone. [`region`] finds and
//! replaces the managed span; [`fragments`] renders the listing.

pub mod error;
pub mod fragments;
pub mod region;

pub use error::{Error, Result};
pub use fragments::{render_fragment, render_fragments};
pub use region::{ManagedRegion, RegionAnomaly, RegionUpdate};
