use anyhow::{Context as _, Result};
use glfw::fail_on_errors;
use glfw::Context as _;

use crate::core::{App, AppControl, FrameCtx};
use crate::device;
use crate::input;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub size: (u32, u32),
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "tracery".to_string(),
            size: (640, 480),
        }
    }
}

/// Owns the GLFW handle, the window, and the loaded GL context.
///
/// Dropping the runtime releases the window and context; GL objects created
/// against the context are reclaimed with the process.
pub struct Runtime {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    gl: glow::Context,
}

impl Runtime {
    /// Initializes GLFW, opens the window, and loads GL.
    ///
    /// Init and window creation are the fatal paths; everything downstream
    /// logs and continues.
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors!()).context("failed to initialize GLFW")?;

        glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        glfw.window_hint(glfw::WindowHint::Resizable(false));
        if cfg!(target_os = "macos") {
            // Core profiles on macOS require forward compatibility.
            glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
        }

        let (width, height) = config.size;
        let (mut window, events) = glfw
            .create_window(width, height, &config.title, glfw::WindowMode::Windowed)
            .context("failed to create window")?;

        window.make_current();
        window.set_key_polling(true);
        glfw.set_swap_interval(glfw::SwapInterval::Sync(1));

        let gl = device::load_gl(&mut window);

        Ok(Self {
            glfw,
            window,
            events,
            gl,
        })
    }

    /// GL context, for resource construction before the loop starts.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// Drives the frame loop until close is requested.
    ///
    /// Each iteration: hand the frame to the app, drain GL errors, present,
    /// then process events. A close request (OS, escape, or the app itself)
    /// is consumed at the top of the next iteration.
    pub fn run<A: App>(mut self, mut app: A) -> Result<()> {
        log::debug!("entering frame loop");

        while !self.window.should_close() {
            let mut ctx = FrameCtx { gl: &self.gl };
            if app.on_frame(&mut ctx) == AppControl::Exit {
                self.window.set_should_close(true);
            }

            device::drain_errors(&self.gl, "frame");

            self.window.swap_buffers();

            self.glfw.poll_events();
            for (_, event) in glfw::flush_messages(&self.events) {
                log::trace!("window event: {event:?}");
                if input::requests_close(&event) {
                    self.window.set_should_close(true);
                }
            }
        }

        log::debug!("frame loop exited");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_the_demo_window() {
        let config = RuntimeConfig::default();
        assert_eq!(config.size, (640, 480));
        assert!(!config.title.is_empty());
    }
}
