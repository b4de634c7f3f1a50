//! Engine-facing contracts.
//!
//! This module defines the stable seam between the runtime (platform loop)
//! and the application layer: a per-frame callback plus the context handed
//! to it.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
