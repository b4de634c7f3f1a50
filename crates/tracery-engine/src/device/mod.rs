//! GL device helpers.
//!
//! This module is responsible for:
//! - loading the GL function table for the window's current context
//! - compiling and linking the shader program
//! - uploading vertex/index data into a vertex-array binding
//! - draining accumulated GL error flags into the log

mod context;
mod error;
mod mesh;
mod shader;

pub use context::load_gl;
pub use error::{drain_errors, error_name};
pub use mesh::{Mesh, MeshData};
pub use shader::{ShaderProgram, compile_stage, link_program};
