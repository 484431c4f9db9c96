//! Frame loop.
//!
//! The per-iteration decision (draw vs. exit) lives in a pure `FramePlan`;
//! the driver in `frame_loop` wires it to the context, program, and
//! geometry produced by bootstrap.

mod frame_loop;
mod plan;

pub use frame_loop::run;
pub use plan::{plan_frame, FramePlan};
