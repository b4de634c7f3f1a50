use glow::HasContext as _;

/// Maps a GL error code to its symbolic name.
pub fn error_name(code: u32) -> &'static str {
    match code {
        glow::INVALID_ENUM => "GL_INVALID_ENUM",
        glow::INVALID_VALUE => "GL_INVALID_VALUE",
        glow::INVALID_OPERATION => "GL_INVALID_OPERATION",
        glow::STACK_OVERFLOW => "GL_STACK_OVERFLOW",
        glow::STACK_UNDERFLOW => "GL_STACK_UNDERFLOW",
        glow::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        glow::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        _ => "unknown",
    }
}

/// Drains every pending GL error flag, logging each one under `scope`.
///
/// Returns the number of errors drained. GL keeps one flag per error kind,
/// so the loop is bounded.
pub fn drain_errors(gl: &glow::Context, scope: &str) -> usize {
    let mut drained = 0;

    loop {
        let code = unsafe { gl.get_error() };
        if code == glow::NO_ERROR {
            break;
        }

        log::error!("GL error in {scope}: {} (0x{code:04x})", error_name(code));
        drained += 1;
    }

    drained
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_cover_the_core_codes() {
        assert_eq!(error_name(glow::INVALID_ENUM), "GL_INVALID_ENUM");
        assert_eq!(error_name(glow::INVALID_VALUE), "GL_INVALID_VALUE");
        assert_eq!(error_name(glow::INVALID_OPERATION), "GL_INVALID_OPERATION");
        assert_eq!(error_name(glow::OUT_OF_MEMORY), "GL_OUT_OF_MEMORY");
        assert_eq!(
            error_name(glow::INVALID_FRAMEBUFFER_OPERATION),
            "GL_INVALID_FRAMEBUFFER_OPERATION"
        );
    }

    #[test]
    fn unrecognized_code_falls_back() {
        assert_eq!(error_name(0xdead), "unknown");
        assert_eq!(error_name(glow::NO_ERROR), "unknown");
    }
}
