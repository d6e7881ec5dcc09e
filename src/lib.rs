//! Stipple - Stippling Image Generator
//!
//! HTTP service and CLI that convert uploaded images to stippled
//! black-and-white art. This library exposes modules for integration
//! testing; the conversion pipeline itself lives in the `mono-dither`
//! crate.

pub mod api;
pub mod codec;
pub mod config;
pub mod error;
pub mod server;
