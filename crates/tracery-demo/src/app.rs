//! The demo application: one shader program, two quad meshes, two indexed
//! wireframe draws per frame.

use anyhow::Result;
use glow::HasContext as _;

use tracery_engine::core::{App, AppControl, FrameCtx};
use tracery_engine::device::{Mesh, ShaderProgram, link_program};

use crate::scene;
use crate::shaders;

/// Background clear color.
const CLEAR_COLOR: [f32; 4] = [0.2, 0.3, 0.3, 1.0];

pub struct WireframeApp {
    program: ShaderProgram,
    left: Mesh,
    right: Mesh,
}

impl WireframeApp {
    /// Compiles the shader pair and uploads both quad meshes.
    ///
    /// Shader diagnostics are logged inside `link_program`; a broken program
    /// still constructs the app and renders nothing useful.
    pub fn new(gl: &glow::Context) -> Result<Self> {
        let program = link_program(gl, shaders::VERTEX, shaders::FRAGMENT)?;
        let left = Mesh::upload(gl, &scene::left_quad())?;
        let right = Mesh::upload(gl, &scene::right_quad())?;

        let triangles =
            scene::left_quad().triangle_count() + scene::right_quad().triangle_count();
        log::info!("scene ready: 2 meshes, {triangles} triangles");

        Ok(Self {
            program,
            left,
            right,
        })
    }
}

impl App for WireframeApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let gl = ctx.gl;

        unsafe {
            let [r, g, b, a] = CLEAR_COLOR;
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT);

            // Outlines only; applies to every draw this frame.
            gl.polygon_mode(glow::FRONT_AND_BACK, glow::LINE);
        }

        self.program.bind(gl);

        self.left.bind(gl);
        self.left.draw(gl);

        self.right.bind(gl);
        self.right.draw(gl);

        unsafe { gl.bind_vertex_array(None) };

        AppControl::Continue
    }
}
