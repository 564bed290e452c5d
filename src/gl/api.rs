use std::num::NonZeroU32;

use glow::HasContext;

use crate::mat4::Mat4;

/// A single shader compilation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_const(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Buffer binding targets used by mesh upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferTarget {
    Array,
    ElementArray,
}

impl BufferTarget {
    fn gl_const(self) -> u32 {
        match self {
            BufferTarget::Array => glow::ARRAY_BUFFER,
            BufferTarget::ElementArray => glow::ELEMENT_ARRAY_BUFFER,
        }
    }
}

/// The graphics-driver calls the crate consumes.
///
/// Handles are opaque driver-assigned integers; 0 means "no object", matching
/// the GL convention. Creation returns 0 on failure, status queries return a
/// bool, and diagnostics come back as plain text. Implemented for
/// [`glow::Context`]; tests substitute a recording fake.
pub trait GlApi {
    // shader stages
    fn create_shader(&self, stage: ShaderStage) -> u32;
    fn shader_source(&self, shader: u32, source: &str);
    fn compile_shader(&self, shader: u32);
    fn shader_compile_ok(&self, shader: u32) -> bool;
    fn shader_info_log(&self, shader: u32) -> String;
    fn delete_shader(&self, shader: u32);

    // programs
    fn create_program(&self) -> u32;
    fn attach_shader(&self, program: u32, shader: u32);
    fn link_program(&self, program: u32);
    fn program_link_ok(&self, program: u32) -> bool;
    fn program_info_log(&self, program: u32) -> String;
    /// Binds `program` for subsequent draws; 0 unbinds the active program.
    fn use_program(&self, program: u32);
    fn delete_program(&self, program: u32);

    // uniforms
    fn uniform_location(&self, program: u32, name: &str) -> Option<u32>;
    fn set_uniform_mat4(&self, location: u32, value: &Mat4);

    // geometry
    fn create_vertex_array(&self) -> u32;
    fn bind_vertex_array(&self, vao: u32);
    fn delete_vertex_array(&self, vao: u32);
    fn create_buffer(&self) -> u32;
    fn bind_buffer(&self, target: BufferTarget, buffer: u32);
    fn buffer_data_f32(&self, target: BufferTarget, data: &[f32]);
    fn buffer_data_u32(&self, target: BufferTarget, data: &[u32]);
    fn delete_buffer(&self, buffer: u32);
    /// Defines and enables a float vertex attribute. `stride` and `offset`
    /// are in bytes.
    fn vertex_attrib(&self, index: u32, components: i32, stride: i32, offset: i32);

    // frame state
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn clear(&self, r: f32, g: f32, b: f32, a: f32);
    fn set_depth_test(&self, enabled: bool);
    /// Draws `index_count` indices from the bound element buffer as triangles.
    fn draw_triangles(&self, index_count: i32);
}

fn shader_handle(raw: u32) -> Option<glow::NativeShader> {
    NonZeroU32::new(raw).map(glow::NativeShader)
}

fn program_handle(raw: u32) -> Option<glow::NativeProgram> {
    NonZeroU32::new(raw).map(glow::NativeProgram)
}

fn buffer_handle(raw: u32) -> Option<glow::NativeBuffer> {
    NonZeroU32::new(raw).map(glow::NativeBuffer)
}

fn vertex_array_handle(raw: u32) -> Option<glow::NativeVertexArray> {
    NonZeroU32::new(raw).map(glow::NativeVertexArray)
}

impl GlApi for glow::Context {
    fn create_shader(&self, stage: ShaderStage) -> u32 {
        unsafe { HasContext::create_shader(self, stage.gl_const()) }
            .map(|shader| shader.0.get())
            .unwrap_or(0)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        if let Some(shader) = shader_handle(shader) {
            unsafe { HasContext::shader_source(self, shader, source) }
        }
    }

    fn compile_shader(&self, shader: u32) {
        if let Some(shader) = shader_handle(shader) {
            unsafe { HasContext::compile_shader(self, shader) }
        }
    }

    fn shader_compile_ok(&self, shader: u32) -> bool {
        shader_handle(shader)
            .map(|shader| unsafe { self.get_shader_compile_status(shader) })
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        shader_handle(shader)
            .map(|shader| unsafe { self.get_shader_info_log(shader) })
            .unwrap_or_default()
    }

    fn delete_shader(&self, shader: u32) {
        if let Some(shader) = shader_handle(shader) {
            unsafe { HasContext::delete_shader(self, shader) }
        }
    }

    fn create_program(&self) -> u32 {
        unsafe { HasContext::create_program(self) }
            .map(|program| program.0.get())
            .unwrap_or(0)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        if let (Some(program), Some(shader)) = (program_handle(program), shader_handle(shader)) {
            unsafe { HasContext::attach_shader(self, program, shader) }
        }
    }

    fn link_program(&self, program: u32) {
        if let Some(program) = program_handle(program) {
            unsafe { HasContext::link_program(self, program) }
        }
    }

    fn program_link_ok(&self, program: u32) -> bool {
        program_handle(program)
            .map(|program| unsafe { self.get_program_link_status(program) })
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: u32) -> String {
        program_handle(program)
            .map(|program| unsafe { self.get_program_info_log(program) })
            .unwrap_or_default()
    }

    fn use_program(&self, program: u32) {
        unsafe { HasContext::use_program(self, program_handle(program)) }
    }

    fn delete_program(&self, program: u32) {
        if let Some(program) = program_handle(program) {
            unsafe { HasContext::delete_program(self, program) }
        }
    }

    fn uniform_location(&self, program: u32, name: &str) -> Option<u32> {
        let program = program_handle(program)?;
        unsafe { self.get_uniform_location(program, name) }.map(|location| location.0)
    }

    fn set_uniform_mat4(&self, location: u32, value: &Mat4) {
        let location = glow::NativeUniformLocation(location);
        unsafe { self.uniform_matrix_4_f32_slice(Some(&location), false, value.as_slice()) }
    }

    fn create_vertex_array(&self) -> u32 {
        unsafe { HasContext::create_vertex_array(self) }
            .map(|vao| vao.0.get())
            .unwrap_or(0)
    }

    fn bind_vertex_array(&self, vao: u32) {
        unsafe { HasContext::bind_vertex_array(self, vertex_array_handle(vao)) }
    }

    fn delete_vertex_array(&self, vao: u32) {
        if let Some(vao) = vertex_array_handle(vao) {
            unsafe { HasContext::delete_vertex_array(self, vao) }
        }
    }

    fn create_buffer(&self) -> u32 {
        unsafe { HasContext::create_buffer(self) }
            .map(|buffer| buffer.0.get())
            .unwrap_or(0)
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: u32) {
        unsafe { HasContext::bind_buffer(self, target.gl_const(), buffer_handle(buffer)) }
    }

    fn buffer_data_f32(&self, target: BufferTarget, data: &[f32]) {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        unsafe { self.buffer_data_u8_slice(target.gl_const(), bytes, glow::STATIC_DRAW) }
    }

    fn buffer_data_u32(&self, target: BufferTarget, data: &[u32]) {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        unsafe { self.buffer_data_u8_slice(target.gl_const(), bytes, glow::STATIC_DRAW) }
    }

    fn delete_buffer(&self, buffer: u32) {
        if let Some(buffer) = buffer_handle(buffer) {
            unsafe { HasContext::delete_buffer(self, buffer) }
        }
    }

    fn vertex_attrib(&self, index: u32, components: i32, stride: i32, offset: i32) {
        unsafe {
            self.vertex_attrib_pointer_f32(index, components, glow::FLOAT, false, stride, offset);
            self.enable_vertex_attrib_array(index);
        }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { HasContext::viewport(self, x, y, width, height) }
    }

    fn clear(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe {
            self.clear_color(r, g, b, a);
            HasContext::clear(self, glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
    }

    fn set_depth_test(&self, enabled: bool) {
        unsafe {
            if enabled {
                self.enable(glow::DEPTH_TEST);
            } else {
                self.disable(glow::DEPTH_TEST);
            }
        }
    }

    fn draw_triangles(&self, index_count: i32) {
        unsafe { self.draw_elements(glow::TRIANGLES, index_count, glow::UNSIGNED_INT, 0) }
    }
}
