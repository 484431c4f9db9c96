/// Performance snapshot for one sampling window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameStats {
    /// Frames per second over the window.
    pub fps: f64,

    /// Average frame time in milliseconds.
    pub frame_time_ms: f64,
}

impl FrameStats {
    /// Renders the title-bar string for these stats.
    pub fn window_title(&self, base: &str) -> String {
        format!(
            "{base}    FPS: {:.3}    Frame Time: {:.3} (ms)",
            self.fps, self.frame_time_ms
        )
    }
}

/// Frame counter + sampling-window state for FPS estimation.
///
/// The clock owns its state explicitly; it is created by the frame loop and
/// ticked once per iteration. Timestamps are supplied by the caller (seconds
/// on a monotonic axis, e.g. the windowing layer's clock), which keeps the
/// clock deterministic under test.
///
/// The baseline initializes on the first `tick`, so the first sampling
/// window starts at the first frame rather than at clock construction.
#[derive(Debug, Clone)]
pub struct FrameClock {
    window_start: Option<f64>,
    frames: u32,
    interval: f64,
}

/// Stats are published at most four times per second.
const SAMPLE_INTERVAL: f64 = 0.25;

impl FrameClock {
    pub fn new() -> Self {
        Self::with_interval(SAMPLE_INTERVAL)
    }

    /// Creates a clock with a custom sampling interval (seconds).
    pub fn with_interval(interval: f64) -> Self {
        debug_assert!(interval > 0.0);
        Self {
            window_start: None,
            frames: 0,
            interval,
        }
    }

    /// Counts one frame at timestamp `now` (seconds).
    ///
    /// Returns `Some(FrameStats)` when the sampling window has elapsed, in
    /// which case the counter and window baseline are reset.
    pub fn tick(&mut self, now: f64) -> Option<FrameStats> {
        let start = *self.window_start.get_or_insert(now);
        self.frames += 1;

        let elapsed = now - start;
        if elapsed <= self.interval {
            return None;
        }

        let fps = f64::from(self.frames) / elapsed;
        // A zero fps cannot come out of the division above (the counter was
        // just incremented), but the title math must not divide by it either
        // way.
        let frame_time_ms = if fps > 0.0 { 1000.0 / fps } else { 0.0 };

        self.frames = 0;
        self.window_start = Some(now);

        Some(FrameStats { fps, frame_time_ms })
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn no_sample_before_interval_elapses() {
        let mut clock = FrameClock::new();
        // 4ms steps: 0.25s is not exceeded within 62 frames.
        for i in 0..62 {
            assert_eq!(clock.tick(i as f64 * 0.004), None);
        }
    }

    #[test]
    fn fps_is_frames_over_elapsed() {
        let mut clock = FrameClock::new();

        // 4ms frames; the first tick sets the baseline at t=0 and the
        // sample fires on the first frame past the 0.25s window.
        let mut stats = None;
        let mut frames = 0u32;
        let mut elapsed = 0.0;
        for i in 0..=100 {
            frames += 1;
            elapsed = i as f64 * 0.004;
            stats = clock.tick(elapsed);
            if stats.is_some() {
                break;
            }
        }

        let stats = stats.expect("a sample after 0.25s of frames");
        let expected_fps = f64::from(frames) / elapsed;
        assert!((stats.fps - expected_fps).abs() < EPS);
        assert!((stats.frame_time_ms - 1000.0 / expected_fps).abs() < EPS);
    }

    #[test]
    fn counter_resets_between_windows() {
        let mut clock = FrameClock::with_interval(1.0);

        let first = clock.tick(0.0);
        assert_eq!(first, None);
        let second = clock.tick(2.0).expect("window elapsed");
        // 2 frames over 2 seconds.
        assert!((second.fps - 1.0).abs() < EPS);

        // Next window starts fresh at t=2.0 with a zeroed counter.
        let third = clock.tick(4.0).expect("window elapsed");
        assert!((third.fps - 0.5).abs() < EPS);
    }

    #[test]
    fn frame_time_is_inverse_of_fps() {
        let mut clock = FrameClock::with_interval(0.25);
        clock.tick(0.0);
        let stats = clock.tick(0.5).expect("window elapsed");
        assert!((stats.frame_time_ms * stats.fps - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn title_contains_both_figures() {
        let stats = FrameStats {
            fps: 240.0,
            frame_time_ms: 1000.0 / 240.0,
        };
        let title = stats.window_title("Trigon");
        assert!(title.starts_with("Trigon"));
        assert!(title.contains("FPS: 240.000"));
        assert!(title.contains("Frame Time: 4.167"));
    }
}
