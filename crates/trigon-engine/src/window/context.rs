use glfw::{
    Context as _, Glfw, GlfwReceiver, PWindow, WindowEvent, WindowHint, WindowMode,
    fail_on_errors,
};

use crate::error::RenderError;
use crate::input::FrameInput;
use crate::window::WindowConfig;

/// The GL-capable window and everything bound to it.
///
/// Created once at startup and owned by one thread for its entire lifetime.
/// Dropping it tears down the window and the GLFW instance; GL objects must
/// be released before that (drop order of the bootstrap locals takes care
/// of it when the context is created first).
pub struct RenderContext {
    glfw: Glfw,
    window: PWindow,
    events: GlfwReceiver<(f64, WindowEvent)>,
    title: String,
}

impl RenderContext {
    /// Initializes GLFW, creates the window, and resolves GL entry points.
    ///
    /// The 3.3 core-profile hints must be requested before window creation;
    /// every GL call requires the context made current here. On any error
    /// path the partially initialized GLFW instance is dropped, which
    /// releases window-system state.
    pub fn initialize(config: &WindowConfig) -> Result<Self, RenderError> {
        let mut glfw =
            glfw::init(glfw::fail_on_errors!()).map_err(|_| RenderError::ContextCreationFailed)?;

        glfw.window_hint(WindowHint::ContextVersion(3, 3));
        glfw.window_hint(WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        #[cfg(target_os = "macos")]
        glfw.window_hint(WindowHint::OpenGlForwardCompat(true));

        let (mut window, events) = if config.fullscreen {
            glfw.with_primary_monitor(|glfw, monitor| {
                let monitor = monitor.ok_or(RenderError::VideoModeUnavailable)?;
                let mode = monitor
                    .get_video_mode()
                    .ok_or(RenderError::VideoModeUnavailable)?;

                log::info!(
                    "fullscreen context at native mode {}x{}",
                    mode.width,
                    mode.height
                );

                glfw.create_window(
                    mode.width,
                    mode.height,
                    &config.title,
                    WindowMode::FullScreen(monitor),
                )
                .ok_or(RenderError::ContextCreationFailed)
            })?
        } else {
            glfw.create_window(
                config.width,
                config.height,
                &config.title,
                WindowMode::Windowed,
            )
            .ok_or(RenderError::ContextCreationFailed)?
        };

        window.make_current();

        // Event subscriptions replace raw callbacks: resize and key events
        // arrive on `events` and are drained by `pump_events`.
        window.set_framebuffer_size_polling(true);
        window.set_key_polling(true);

        gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);
        if !entry_points_loaded() {
            return Err(RenderError::FunctionLoadFailed);
        }

        let [r, g, b, a] = config.clear_color;
        unsafe { gl::ClearColor(r, g, b, a) };

        log::info!("GL context ready: \"{}\"", config.title);

        Ok(Self {
            glfw,
            window,
            events,
            title: config.title.clone(),
        })
    }

    /// Seconds since GLFW initialization.
    pub fn time(&self) -> f64 {
        self.glfw.get_time()
    }

    /// Whether the window system holds a pending close request.
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Raises the close request; the loop exits on its next check.
    pub fn request_close(&mut self) {
        self.window.set_should_close(true);
    }

    /// Samples the key states the frame loop reacts to.
    pub fn input(&self) -> FrameInput {
        FrameInput::from_actions(
            self.window.get_key(glfw::Key::Escape),
            self.window.get_key(glfw::Key::Space),
        )
    }

    /// Base title as configured, without the FPS suffix.
    pub fn base_title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    /// Clears the color buffer with the bootstrap clear color.
    pub fn clear(&self) {
        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT) };
    }

    /// Presents the frame (buffer swap).
    pub fn present(&mut self) {
        self.window.swap_buffers();
    }

    /// Processes pending window-system events.
    ///
    /// Framebuffer resizes are applied to the GL viewport here; key state is
    /// read by polling, so key events need no handling.
    pub fn pump_events(&mut self) {
        self.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&self.events) {
            if let WindowEvent::FramebufferSize(width, height) = event {
                log::debug!("viewport resized to {width}x{height}");
                unsafe { gl::Viewport(0, 0, width, height) };
            }
        }
    }
}

/// Spot-checks that `gl::load_with` actually resolved the surface we draw
/// with. The loader itself reports nothing.
fn entry_points_loaded() -> bool {
    gl::ClearColor::is_loaded()
        && gl::CreateShader::is_loaded()
        && gl::GenBuffers::is_loaded()
        && gl::DrawArrays::is_loaded()
}
