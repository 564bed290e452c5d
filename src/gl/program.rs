use std::{fs, path::Path, rc::Rc};

use crate::{
    error::Error,
    gl::{GlApi, ShaderStage},
    mat4::Mat4,
};

/// Lifecycle states of a [`ShaderProgram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramState {
    Empty,
    Loaded,
    Failed,
    Destroyed,
}

/// Uniform locations resolved once at link time.
#[derive(Debug, Default, Clone, Copy)]
struct MatrixUniforms {
    model: Option<u32>,
    view: Option<u32>,
    projection: Option<u32>,
}

/// Owns one compiled-and-linked GPU program.
///
/// The program handle is 0 until a load succeeds; a failed load leaves it at 0
/// and releases every stage object it created along the way. Locations of the
/// `model`/`view`/`projection` matrix uniforms are looked up once after
/// linking rather than per frame. Dropping the program destroys it.
pub struct ShaderProgram<A: GlApi> {
    gl: Rc<A>,
    program: u32,
    state: ProgramState,
    uniforms: MatrixUniforms,
}

impl<A: GlApi> ShaderProgram<A> {
    pub fn new(gl: Rc<A>) -> Self {
        Self {
            gl,
            program: 0,
            state: ProgramState::Empty,
            uniforms: MatrixUniforms::default(),
        }
    }

    /// Driver-assigned program handle; 0 unless the state is `Loaded`.
    pub fn handle(&self) -> u32 {
        self.program
    }

    pub fn state(&self) -> ProgramState {
        self.state
    }

    /// Compiles both stages, links them, and caches the matrix uniform
    /// locations.
    ///
    /// Each stage is compiled independently so the error names the stage that
    /// broke. On any failure the partially created driver objects are deleted,
    /// the handle stays 0, and the state becomes `Failed`. On success the
    /// stage objects are deleted right away; only the linked program survives.
    pub fn load_from_source(
        &mut self,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<(), Error> {
        let gl = Rc::clone(&self.gl);
        self.release();

        let vertex_shader = match compile_stage(&*gl, ShaderStage::Vertex, vertex_source) {
            Ok(shader) => shader,
            Err(err) => {
                self.state = ProgramState::Failed;
                return Err(err);
            },
        };
        let fragment_shader = match compile_stage(&*gl, ShaderStage::Fragment, fragment_source) {
            Ok(shader) => shader,
            Err(err) => {
                gl.delete_shader(vertex_shader);
                self.state = ProgramState::Failed;
                return Err(err);
            },
        };

        let program = gl.create_program();
        if program == 0 {
            gl.delete_shader(vertex_shader);
            gl.delete_shader(fragment_shader);
            self.state = ProgramState::Failed;
            return Err(Error::ProgramCreation);
        }

        gl.attach_shader(program, vertex_shader);
        gl.attach_shader(program, fragment_shader);
        gl.link_program(program);

        if !gl.program_link_ok(program) {
            let log = gl.program_info_log(program);
            gl.delete_shader(vertex_shader);
            gl.delete_shader(fragment_shader);
            gl.delete_program(program);
            self.state = ProgramState::Failed;
            return Err(Error::Link(log));
        }

        // stage objects are not needed once the program is linked
        gl.delete_shader(vertex_shader);
        gl.delete_shader(fragment_shader);

        self.uniforms = MatrixUniforms {
            model: gl.uniform_location(program, "model"),
            view: gl.uniform_location(program, "view"),
            projection: gl.uniform_location(program, "projection"),
        };
        self.program = program;
        self.state = ProgramState::Loaded;
        Ok(())
    }

    /// Reads both files as text and delegates to [`Self::load_from_source`].
    ///
    /// A missing, unreadable, or empty file fails with
    /// [`Error::FileRead`] naming the path.
    pub fn load_from_files(
        &mut self,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<(), Error> {
        let vertex_source = read_source(vertex_path.as_ref())?;
        let fragment_source = read_source(fragment_path.as_ref())?;
        self.load_from_source(&vertex_source, &fragment_source)
    }

    /// Binds this program for subsequent draw calls.
    ///
    /// Callers are expected to only bind a `Loaded` program. In any other
    /// state the handle is 0, so this binds program 0 and thereby unbinds
    /// whatever was active; that is logged but not treated as an error.
    pub fn use_program(&self) {
        if self.state != ProgramState::Loaded {
            log::warn!(
                "use_program on a {:?} shader program unbinds the active program",
                self.state
            );
        }
        self.gl.use_program(self.program);
    }

    /// Releases the driver program if one is held. Idempotent; safe on an
    /// instance that never loaded.
    pub fn destroy(&mut self) {
        self.release();
        self.state = ProgramState::Destroyed;
    }

    pub fn set_model(&self, matrix: &Mat4) {
        self.upload(self.uniforms.model, matrix);
    }

    pub fn set_view(&self, matrix: &Mat4) {
        self.upload(self.uniforms.view, matrix);
    }

    pub fn set_projection(&self, matrix: &Mat4) {
        self.upload(self.uniforms.projection, matrix);
    }

    /// Uploads through a cached location; skipped when the shader does not
    /// declare the uniform.
    fn upload(&self, location: Option<u32>, matrix: &Mat4) {
        if let Some(location) = location {
            self.gl.set_uniform_mat4(location, matrix);
        }
    }

    fn release(&mut self) {
        if self.program != 0 {
            self.gl.delete_program(self.program);
            self.program = 0;
            self.uniforms = MatrixUniforms::default();
        }
    }
}

impl<A: GlApi> Drop for ShaderProgram<A> {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn compile_stage<A: GlApi>(gl: &A, stage: ShaderStage, source: &str) -> Result<u32, Error> {
    let shader = gl.create_shader(stage);
    if shader == 0 {
        return Err(Error::ProgramCreation);
    }

    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if !gl.shader_compile_ok(shader) {
        let log = gl.shader_info_log(shader);
        gl.delete_shader(shader);
        return Err(Error::Compile { stage, log });
    }

    Ok(shader)
}

fn read_source(path: &Path) -> Result<String, Error> {
    let source = fs::read_to_string(path)
        .map_err(|_| Error::FileRead(path.display().to_string()))?;
    // an empty file is as useless as a missing one
    if source.is_empty() {
        return Err(Error::FileRead(path.display().to_string()));
    }
    Ok(source)
}
