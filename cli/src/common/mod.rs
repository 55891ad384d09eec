//! # lemonutils Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!

//! ## Overview
//!
//! Shared helper groups used by the `lemon` commands and exposed to library
//! users. Currently the only group is `fs`, the filesystem helper.
//!

/// Filesystem helper operations (I/O, copying, listing, sizes, diagnostics).
pub mod fs;
