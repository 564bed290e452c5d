use crate::gl::ShaderStage;

/// Error categories surfaced by the crate.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Shader source file missing, unreadable, or empty.
    #[error("Failed to read shader file: {0}")]
    FileRead(String),

    /// A shader stage failed to compile; carries the driver diagnostic.
    #[error("Failed compiling {stage} shader: {log}")]
    Compile { stage: ShaderStage, log: String },

    /// The shader program failed to link; carries the driver diagnostic.
    #[error("Failed linking shader program: {0}")]
    Link(String),

    /// The driver refused to create a program or shader object.
    #[error("Shader program creation error")]
    ProgramCreation,

    /// Unable to create a GL buffer object.
    #[error("Failed to create buffer: {0}")]
    BufferCreation(&'static str),

    /// Unable to create a vertex array object.
    #[error("Failed to create vertex array object")]
    VertexArrayCreation,
}
