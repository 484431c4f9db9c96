//! Per-frame input sampling.
//!
//! Key state is polled once per iteration and reduced to the two intents the
//! loop understands. The reduction is pure so it can be tested without a
//! window.

use glfw::Action;

/// Input snapshot for one frame-loop iteration.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Escape is down: request loop termination.
    pub close_requested: bool,

    /// Space is down: emit a diagnostic line, no state effect.
    pub diagnostic_requested: bool,
}

impl FrameInput {
    /// Reduces raw key actions to frame intents.
    pub fn from_actions(escape: Action, space: Action) -> Self {
        Self {
            close_requested: escape == Action::Press,
            diagnostic_requested: space == Action::Press,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_press_requests_close() {
        let input = FrameInput::from_actions(Action::Press, Action::Release);
        assert!(input.close_requested);
        assert!(!input.diagnostic_requested);
    }

    #[test]
    fn space_press_requests_diagnostics_only() {
        let input = FrameInput::from_actions(Action::Release, Action::Press);
        assert!(!input.close_requested);
        assert!(input.diagnostic_requested);
    }

    #[test]
    fn released_keys_are_inert() {
        let input = FrameInput::from_actions(Action::Release, Action::Release);
        assert_eq!(input, FrameInput::default());
    }
}
