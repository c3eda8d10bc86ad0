//! Renderers for filtered papers.
//!
//! - [`terminal`] — colored table with a summary line; respects `--quiet`.
//! - [`export`] — CSV (to a file or stdout) and pretty JSON.

pub mod export;
pub mod terminal;
