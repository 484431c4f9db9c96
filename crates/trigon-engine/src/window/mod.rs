//! Window + GL context bootstrap.
//!
//! Owns the GLFW instance and window, and exposes the operations the frame
//! loop consumes: clock, input sampling, clear/present, event pumping.

mod config;
mod context;

pub use config::WindowConfig;
pub use context::RenderContext;
