//! Window + frame loop.
//!
//! Owns the GLFW handle and the single window, loads GL for its context, and
//! drives the per-frame contract from `core`.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
