//! User interfaces
//!
//! - `cli`: one-shot command-line lookups

#[cfg(feature = "cli")]
pub mod cli;
