//! Shader pipeline + geometry upload.
//!
//! This module owns the GL objects produced after bootstrap:
//! - `ShaderProgram`: compile + link with diagnostic capture
//! - `GeometryBuffer`: static vertex upload + layout description
//!
//! All constructors require a current GL context.

mod geometry;
mod shader;

pub use geometry::{GeometryBuffer, Vertex};
pub use shader::{ShaderProgram, ShaderStage};
