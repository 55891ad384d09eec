//! # lemonutils
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! A small filesystem helper library. Every operation is a thin wrapper around
//! one host filesystem call that returns a typed [`core::error::FsError`] on
//! failure instead of panicking, and can optionally report that failure on a
//! `tracing`-based diagnostic channel.
//!
//! - `common::fs`: the helper operations and the [`common::fs::FileHelper`] facade.
//! - `core`: errors and configuration.
//!
//! The `lemon` binary in this crate exposes the same operations on the command line.
//!
pub mod common;
pub mod core;
