// wallet-core/src/api/mod.rs

//! Caller-facing entry points (UI shell, FFI, CLI).
//!
//! The caller owns the [`CurveContext`](crate::crypto::CurveContext) and threads it
//! through every call; cryptographic internals stay behind these functions.

#[allow(clippy::module_inception)]
mod api;

pub use api::*;
