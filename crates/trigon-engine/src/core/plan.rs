use crate::input::FrameInput;

/// What one loop iteration will do after input is applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FramePlan {
    /// Leave the loop before submitting anything further.
    pub exit: bool,

    /// Submit the draw call and present. Always the negation of `exit`:
    /// a closing iteration must not draw.
    pub draw: bool,

    /// Emit the diagnostic side output.
    pub log_diagnostics: bool,
}

/// Reduces the close flag and the frame's input to a plan.
///
/// `close_requested` is the window-system flag (close button, or a request
/// raised by an earlier iteration); an escape press in `input` has the same
/// effect within the same iteration.
pub fn plan_frame(close_requested: bool, input: &FrameInput) -> FramePlan {
    let exit = close_requested || input.close_requested;
    FramePlan {
        exit,
        draw: !exit,
        log_diagnostics: input.diagnostic_requested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDLE: FrameInput = FrameInput {
        close_requested: false,
        diagnostic_requested: false,
    };

    const ESCAPE: FrameInput = FrameInput {
        close_requested: true,
        diagnostic_requested: false,
    };

    #[test]
    fn idle_frame_draws() {
        let plan = plan_frame(false, &IDLE);
        assert!(!plan.exit);
        assert!(plan.draw);
        assert!(!plan.log_diagnostics);
    }

    #[test]
    fn escape_exits_in_the_same_iteration_without_drawing() {
        let plan = plan_frame(false, &ESCAPE);
        assert!(plan.exit);
        assert!(!plan.draw);
    }

    #[test]
    fn window_close_button_exits_without_drawing() {
        let plan = plan_frame(true, &IDLE);
        assert!(plan.exit);
        assert!(!plan.draw);
    }

    #[test]
    fn diagnostics_have_no_state_effect() {
        let input = FrameInput {
            close_requested: false,
            diagnostic_requested: true,
        };
        let plan = plan_frame(false, &input);
        assert!(plan.log_diagnostics);
        assert!(plan.draw);
        assert!(!plan.exit);
    }

    // Drives the state machine the way the loop does: once escape is seen,
    // the close flag latches and no later iteration may draw.
    #[test]
    fn no_draw_is_resubmitted_after_escape() {
        let frames = [IDLE, IDLE, ESCAPE, IDLE, IDLE];

        let mut close_flag = false;
        let mut draws = Vec::new();

        for input in &frames {
            if input.close_requested {
                close_flag = true;
            }
            let plan = plan_frame(close_flag, input);
            draws.push(plan.draw);
            if plan.exit {
                break;
            }
        }

        assert_eq!(draws, vec![true, true, false]);
    }
}
