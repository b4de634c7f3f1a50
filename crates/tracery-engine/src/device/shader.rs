use anyhow::{Result, anyhow};
use glow::HasContext as _;

/// Linked vertex+fragment program.
///
/// The handle may be in a failed-link state: link errors are logged at
/// creation, and binding such a program leaves rendering undefined rather
/// than aborting.
pub struct ShaderProgram {
    raw: glow::Program,
}

impl ShaderProgram {
    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.use_program(Some(self.raw)) };
    }

    pub fn raw(&self) -> glow::Program {
        self.raw
    }
}

fn stage_name(stage: u32) -> &'static str {
    match stage {
        glow::VERTEX_SHADER => "vertex",
        glow::FRAGMENT_SHADER => "fragment",
        _ => "unknown",
    }
}

/// Compiles a single shader stage.
///
/// On failure the driver's info log is reported, the stage object is
/// deleted, and `None` is returned; the caller links whatever stages
/// survived.
pub fn compile_stage(gl: &glow::Context, stage: u32, source: &str) -> Option<glow::Shader> {
    unsafe {
        let shader = match gl.create_shader(stage) {
            Ok(shader) => shader,
            Err(e) => {
                log::error!("failed to allocate {} shader object: {e}", stage_name(stage));
                return None;
            }
        };

        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let info = gl.get_shader_info_log(shader);
            log::error!(
                "failed to compile {} shader:\n{}",
                stage_name(stage),
                info.trim_end()
            );
            gl.delete_shader(shader);
            return None;
        }

        Some(shader)
    }
}

/// Compiles both stages and links them into a program.
///
/// Compile and link failures are logged and the (possibly broken) program is
/// still returned. The individual stage objects are deleted after linking
/// regardless of outcome. The only `Err` is a failed program-object
/// allocation.
pub fn link_program(
    gl: &glow::Context,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<ShaderProgram> {
    let vertex = compile_stage(gl, glow::VERTEX_SHADER, vertex_src);
    let fragment = compile_stage(gl, glow::FRAGMENT_SHADER, fragment_src);

    unsafe {
        let program = gl
            .create_program()
            .map_err(|e| anyhow!("failed to allocate program object: {e}"))?;

        for stage in [vertex, fragment].into_iter().flatten() {
            gl.attach_shader(program, stage);
        }

        gl.link_program(program);
        if !gl.get_program_link_status(program) {
            let info = gl.get_program_info_log(program);
            log::error!("shader program link failed: {}", info.trim_end());
        }
        gl.validate_program(program);

        for stage in [vertex, fragment].into_iter().flatten() {
            gl.delete_shader(stage);
        }

        Ok(ShaderProgram { raw: program })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_names_match_diagnostic_wording() {
        assert_eq!(stage_name(glow::VERTEX_SHADER), "vertex");
        assert_eq!(stage_name(glow::FRAGMENT_SHADER), "fragment");
        assert_eq!(stage_name(glow::GEOMETRY_SHADER), "unknown");
    }
}
