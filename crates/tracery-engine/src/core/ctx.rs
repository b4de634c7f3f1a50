/// Per-frame context handed to the application.
pub struct FrameCtx<'a> {
    /// GL function table for the window's context, current on this thread.
    pub gl: &'a glow::Context,
}
