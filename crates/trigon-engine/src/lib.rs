//! Trigon engine crate.
//!
//! Owns the windowing + GL runtime pieces: context bootstrap, shader
//! pipeline construction, geometry upload, and the frame loop.

pub mod core;
pub mod error;
pub mod input;
pub mod render;
pub mod time;
pub mod window;

pub mod logging;

pub use error::RenderError;
