//! Time subsystem.
//!
//! Frame timing is kept decoupled from the windowing layer: the clock is fed
//! timestamps (seconds) explicitly, so the loop passes the window clock in
//! and tests pass a synthetic one.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameStats};
