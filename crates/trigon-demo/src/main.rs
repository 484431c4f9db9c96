use anyhow::{Context, Result};

use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::render::{GeometryBuffer, ShaderProgram, Vertex};
use trigon_engine::window::{RenderContext, WindowConfig};

const VERTEX_SHADER: &str = include_str!("../shaders/triangle.vert");
const FRAGMENT_SHADER: &str = include_str!("../shaders/triangle.frag");

const TRIANGLE: [Vertex; 3] = [
    Vertex::new(0.0, 0.5, 0.0),
    Vertex::new(0.5, -0.5, 0.0),
    Vertex::new(-0.5, -0.5, 0.0),
];

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = WindowConfig {
        title: "Trigon: Hello Triangle".to_string(),
        fullscreen: std::env::args().any(|a| a == "--fullscreen"),
        ..Default::default()
    };

    log::info!(
        "starting {}x{} ({})",
        config.width,
        config.height,
        if config.fullscreen { "fullscreen" } else { "windowed" }
    );

    // Bootstrap order matters: the context must be current before any GL
    // object is created, and the locals below unwind in reverse on exit.
    let mut ctx = RenderContext::initialize(&config).context("context bootstrap failed")?;

    let program = ShaderProgram::build(VERTEX_SHADER, FRAGMENT_SHADER)
        .context("shader pipeline construction failed")?;

    let geometry = GeometryBuffer::upload(&TRIANGLE);

    trigon_engine::core::run(&mut ctx, &program, &geometry);

    Ok(())
}
