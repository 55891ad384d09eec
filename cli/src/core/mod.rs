//! # lemonutils Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by the helpers and the command handlers:
//! - `config`: configuration loading, merging, and validation
//! - `error`: the `FsError` type returned by every helper and the `Result` alias
//!
pub mod config;
pub mod error;
