//! Rotating-cube OpenGL teaching renderer.
//!
//! Two small cores: [`Mat4`], a column-major 4x4 transform type with exactly
//! the constructors the demo needs, and [`ShaderProgram`], the lifecycle of a
//! compiled GPU program. [`RenderContext`] ties them together with the cube
//! and overlay geometry; window and GL context creation are the caller's job
//! (hand in an `Rc<glow::Context>` once one exists).

mod error;
mod gl;
mod mat4;

pub mod scene;

pub use crate::{
    error::Error,
    gl::{BufferTarget, GlApi, ProgramState, RenderContext, ShaderProgram, ShaderStage},
    mat4::Mat4,
};
