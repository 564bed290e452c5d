mod api;
mod context;
mod mesh;
mod program;

#[cfg(test)]
pub(crate) mod fake;

pub use api::{BufferTarget, GlApi, ShaderStage};
pub use context::RenderContext;
pub use program::{ProgramState, ShaderProgram};
