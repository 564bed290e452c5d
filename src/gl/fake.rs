//! Recording stand-in for the GL driver, used by unit tests.

use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, HashSet},
};

use crate::{
    gl::{BufferTarget, GlApi, ShaderStage},
    mat4::Mat4,
};

/// Driver calls worth asserting on in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Call {
    UseProgram(u32),
    SetUniformMat4(u32),
    Clear,
    SetDepthTest(bool),
    DrawTriangles(i32),
}

/// Hands out sequential handles and tracks which driver objects are live, so
/// tests can check for leaks and double deletes. Compile/link failures are
/// injected with [`FakeGl::fail_compile`] and [`FakeGl::fail_link`].
#[derive(Default)]
pub(crate) struct FakeGl {
    next_handle: Cell<u32>,
    failing_stages: RefCell<HashSet<ShaderStage>>,
    failing_link: Cell<bool>,
    shader_stages: RefCell<HashMap<u32, ShaderStage>>,
    pub(crate) live_shaders: RefCell<HashSet<u32>>,
    pub(crate) live_programs: RefCell<HashSet<u32>>,
    pub(crate) live_buffers: RefCell<HashSet<u32>>,
    pub(crate) live_vertex_arrays: RefCell<HashSet<u32>>,
    pub(crate) deleted_programs: RefCell<Vec<u32>>,
    pub(crate) bound_program: Cell<u32>,
    pub(crate) calls: RefCell<Vec<Call>>,
}

impl FakeGl {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// All subsequent compiles of `stage` report failure.
    pub(crate) fn fail_compile(&self, stage: ShaderStage) {
        self.failing_stages.borrow_mut().insert(stage);
    }

    /// All subsequent links report failure.
    pub(crate) fn fail_link(&self) {
        self.failing_link.set(true);
    }

    pub(crate) fn created_program_count(&self) -> usize {
        self.live_programs.borrow().len() + self.deleted_programs.borrow().len()
    }

    fn alloc(&self) -> u32 {
        let handle = self.next_handle.get() + 1;
        self.next_handle.set(handle);
        handle
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl GlApi for FakeGl {
    fn create_shader(&self, stage: ShaderStage) -> u32 {
        let handle = self.alloc();
        self.live_shaders.borrow_mut().insert(handle);
        self.shader_stages.borrow_mut().insert(handle, stage);
        handle
    }

    fn shader_source(&self, _shader: u32, _source: &str) {}

    fn compile_shader(&self, _shader: u32) {}

    fn shader_compile_ok(&self, shader: u32) -> bool {
        let stage = self.shader_stages.borrow()[&shader];
        !self.failing_stages.borrow().contains(&stage)
    }

    fn shader_info_log(&self, _shader: u32) -> String {
        "0:1(10): error: syntax error, unexpected identifier".to_owned()
    }

    fn delete_shader(&self, shader: u32) {
        self.live_shaders.borrow_mut().remove(&shader);
    }

    fn create_program(&self) -> u32 {
        let handle = self.alloc();
        self.live_programs.borrow_mut().insert(handle);
        handle
    }

    fn attach_shader(&self, _program: u32, _shader: u32) {}

    fn link_program(&self, _program: u32) {}

    fn program_link_ok(&self, _program: u32) -> bool {
        !self.failing_link.get()
    }

    fn program_info_log(&self, _program: u32) -> String {
        "error: vertex shader output not read by fragment shader".to_owned()
    }

    fn use_program(&self, program: u32) {
        self.bound_program.set(program);
        self.record(Call::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        if self.live_programs.borrow_mut().remove(&program) {
            self.deleted_programs.borrow_mut().push(program);
        }
    }

    fn uniform_location(&self, _program: u32, name: &str) -> Option<u32> {
        match name {
            "model" => Some(0),
            "view" => Some(1),
            "projection" => Some(2),
            _ => None,
        }
    }

    fn set_uniform_mat4(&self, location: u32, _value: &Mat4) {
        self.record(Call::SetUniformMat4(location));
    }

    fn create_vertex_array(&self) -> u32 {
        let handle = self.alloc();
        self.live_vertex_arrays.borrow_mut().insert(handle);
        handle
    }

    fn bind_vertex_array(&self, _vao: u32) {}

    fn delete_vertex_array(&self, vao: u32) {
        self.live_vertex_arrays.borrow_mut().remove(&vao);
    }

    fn create_buffer(&self) -> u32 {
        let handle = self.alloc();
        self.live_buffers.borrow_mut().insert(handle);
        handle
    }

    fn bind_buffer(&self, _target: BufferTarget, _buffer: u32) {}

    fn buffer_data_f32(&self, _target: BufferTarget, _data: &[f32]) {}

    fn buffer_data_u32(&self, _target: BufferTarget, _data: &[u32]) {}

    fn delete_buffer(&self, buffer: u32) {
        self.live_buffers.borrow_mut().remove(&buffer);
    }

    fn vertex_attrib(&self, _index: u32, _components: i32, _stride: i32, _offset: i32) {}

    fn viewport(&self, _x: i32, _y: i32, _width: i32, _height: i32) {}

    fn clear(&self, _r: f32, _g: f32, _b: f32, _a: f32) {
        self.record(Call::Clear);
    }

    fn set_depth_test(&self, enabled: bool) {
        self.record(Call::SetDepthTest(enabled));
    }

    fn draw_triangles(&self, index_count: i32) {
        self.record(Call::DrawTriangles(index_count));
    }
}
