/// Bootstrap configuration.
///
/// Passed by value into `RenderContext::initialize` and immutable afterwards;
/// there is no process-wide settings state.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Window width in screen coordinates. Ignored when `fullscreen` is set.
    pub width: u32,

    /// Window height in screen coordinates. Ignored when `fullscreen` is set.
    pub height: u32,

    /// Title-bar text; also the base string for the FPS display.
    pub title: String,

    /// Create a fullscreen context sized to the primary monitor's video
    /// mode. Strict: no windowed fallback when the mode is unavailable.
    pub fullscreen: bool,

    /// RGBA clear color applied at bootstrap.
    pub clear_color: [f32; 4],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Trigon".to_string(),
            fullscreen: false,
            clear_color: [0.8, 0.3, 0.3, 0.2],
        }
    }
}
