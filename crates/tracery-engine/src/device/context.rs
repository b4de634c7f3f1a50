use glow::HasContext as _;

/// Loads the GL function table from the window's context.
///
/// The context must be current on the calling thread. A broken loader is not
/// detected here; it surfaces as GL errors on first use, which the per-frame
/// drain reports.
pub fn load_gl(window: &mut glfw::Window) -> glow::Context {
    let gl = unsafe {
        glow::Context::from_loader_function(|name| window.get_proc_address(name) as *const _)
    };

    let version = unsafe { gl.get_parameter_string(glow::VERSION) };
    log::info!("OpenGL version: {version}");

    gl
}
