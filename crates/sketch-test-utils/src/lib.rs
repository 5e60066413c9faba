//! Shared test utilities for the git-sketch workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`]: git repository fixtures
//! - [`repo`]: [`TestRepo`](repo::TestRepo) builder for sketch directories
//! - [`tool`]: a scriptable stand-in for `sketchtool`

pub mod git;
pub mod repo;
pub mod tool;
