//! Tracery engine crate.
//!
//! This crate owns the platform + GL runtime pieces used by the demo binary.

pub mod core;
pub mod device;
pub mod input;
pub mod window;

pub mod logging;
