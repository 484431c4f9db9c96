use crate::core::plan_frame;
use crate::render::{GeometryBuffer, ShaderProgram};
use crate::time::FrameClock;
use crate::window::RenderContext;

/// Runs the frame loop until a close request is observed.
///
/// Per iteration: clock tick (title update), input, clear, draw, present,
/// event pump. A close request — escape or the window close button — exits
/// before the draw of that iteration is submitted.
///
/// The program and geometry handles must come from successful `build` and
/// `upload` calls; both types make that true by construction.
pub fn run(ctx: &mut RenderContext, program: &ShaderProgram, geometry: &GeometryBuffer) {
    let mut clock = FrameClock::new();

    loop {
        if let Some(stats) = clock.tick(ctx.time()) {
            let title = stats.window_title(ctx.base_title());
            ctx.set_title(&title);
        }

        let input = ctx.input();
        if input.close_requested {
            ctx.request_close();
        }

        let plan = plan_frame(ctx.should_close(), &input);

        if plan.log_diagnostics {
            log::debug!(
                "diagnostics: program {} bound over {} resident vertices",
                program.id(),
                geometry.vertex_count()
            );
        }

        if plan.exit {
            break;
        }

        ctx.clear();

        program.bind();
        geometry.draw();

        ctx.present();
        ctx.pump_events();
    }

    log::info!("frame loop exited on close request");
}
