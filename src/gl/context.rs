use std::rc::Rc;

use crate::{
    error::Error,
    gl::{
        mesh::{Mesh, CUBE_INDICES, CUBE_VERTICES, OVERLAY_INDICES, OVERLAY_VERTICES},
        GlApi, ShaderProgram,
    },
    mat4::Mat4,
    scene,
};

const CUBE_VERTEX_SHADER: &str = include_str!("../../shaders/cube.vert");
const CUBE_FRAGMENT_SHADER: &str = include_str!("../../shaders/cube.frag");
const OVERLAY_VERTEX_SHADER: &str = include_str!("../../shaders/overlay.vert");
const OVERLAY_FRAGMENT_SHADER: &str = include_str!("../../shaders/overlay.frag");

/// Owns every GPU resource the demo needs: the cube and overlay meshes and
/// their shader programs.
///
/// Window and context creation stay with the caller; this type only needs a
/// live driver handle. All resources are released on drop.
pub struct RenderContext<A: GlApi> {
    gl: Rc<A>,
    cube: Mesh,
    overlay: Mesh,
    cube_shader: ShaderProgram<A>,
    overlay_shader: ShaderProgram<A>,
}

impl<A: GlApi> RenderContext<A> {
    /// Uploads the geometry, compiles both shader programs, and enables depth
    /// testing for the 3D pass.
    pub fn new(gl: Rc<A>) -> Result<Self, Error> {
        let cube = Mesh::upload(&*gl, &CUBE_VERTICES, &CUBE_INDICES, &[3, 3])?;
        let overlay = match Mesh::upload(&*gl, &OVERLAY_VERTICES, &OVERLAY_INDICES, &[3]) {
            Ok(mesh) => mesh,
            Err(err) => {
                cube.delete(&*gl);
                return Err(err);
            },
        };

        let mut cube_shader = ShaderProgram::new(Rc::clone(&gl));
        let mut overlay_shader = ShaderProgram::new(Rc::clone(&gl));
        let loaded = cube_shader
            .load_from_source(CUBE_VERTEX_SHADER, CUBE_FRAGMENT_SHADER)
            .and_then(|()| {
                overlay_shader.load_from_source(OVERLAY_VERTEX_SHADER, OVERLAY_FRAGMENT_SHADER)
            });
        if let Err(err) = loaded {
            cube.delete(&*gl);
            overlay.delete(&*gl);
            return Err(err);
        }

        gl.set_depth_test(true);

        Ok(Self {
            gl,
            cube,
            overlay,
            cube_shader,
            overlay_shader,
        })
    }

    /// Renders one frame: the spinning cube, then the 2D overlay rectangle.
    ///
    /// `time_secs` drives the rotation; `width`/`height` size the viewport
    /// and both projections.
    pub fn render_frame(&self, time_secs: f32, width: i32, height: i32) {
        let gl = &*self.gl;
        gl.viewport(0, 0, width, height);
        gl.clear(0.0, 0.0, 0.0, 1.0);

        let (w, h) = (width as f32, height as f32);

        self.cube_shader.use_program();
        self.cube_shader.set_model(&scene::cube_model(time_secs));
        self.cube_shader.set_view(&scene::view());
        self.cube_shader
            .set_projection(&scene::perspective_projection(w, h));
        self.cube.draw(gl);

        // the overlay draws on top regardless of cube depth
        gl.set_depth_test(false);
        self.overlay_shader.use_program();
        self.overlay_shader.set_model(&Mat4::identity());
        self.overlay_shader
            .set_projection(&scene::overlay_projection(w, h));
        self.overlay.draw(gl);
        gl.set_depth_test(true);
    }
}

impl<A: GlApi> Drop for RenderContext<A> {
    fn drop(&mut self) {
        self.cube.delete(&*self.gl);
        self.overlay.delete(&*self.gl);
        // shader programs destroy themselves on drop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::{
        fake::{Call, FakeGl},
        ShaderStage,
    };

    #[test]
    fn new_uploads_two_meshes_and_two_programs() {
        let gl = Rc::new(FakeGl::new());
        let _context = RenderContext::new(Rc::clone(&gl)).unwrap();

        assert_eq!(gl.live_vertex_arrays.borrow().len(), 2);
        assert_eq!(gl.live_buffers.borrow().len(), 4);
        assert_eq!(gl.live_programs.borrow().len(), 2);
        assert!(gl.live_shaders.borrow().is_empty());
    }

    #[test]
    fn failed_shader_load_releases_the_meshes() {
        let gl = Rc::new(FakeGl::new());
        gl.fail_compile(ShaderStage::Vertex);

        assert!(RenderContext::new(Rc::clone(&gl)).is_err());
        assert!(gl.live_vertex_arrays.borrow().is_empty());
        assert!(gl.live_buffers.borrow().is_empty());
        assert!(gl.live_programs.borrow().is_empty());
    }

    #[test]
    fn render_frame_draws_cube_then_overlay() {
        let gl = Rc::new(FakeGl::new());
        let context = RenderContext::new(Rc::clone(&gl)).unwrap();

        gl.calls.borrow_mut().clear();
        context.render_frame(1.0, 800, 600);

        let calls = gl.calls.borrow();
        let draws: Vec<_> = calls
            .iter()
            .filter(|call| matches!(call, Call::DrawTriangles(_)))
            .collect();
        assert_eq!(*draws, [&Call::DrawTriangles(36), &Call::DrawTriangles(6)]);

        // overlay pass runs with depth testing off and restores it after
        let depth_toggles: Vec<_> = calls
            .iter()
            .filter(|call| matches!(call, Call::SetDepthTest(_)))
            .collect();
        assert_eq!(
            *depth_toggles,
            [&Call::SetDepthTest(false), &Call::SetDepthTest(true)]
        );

        assert_eq!(calls.first(), Some(&Call::Clear));
    }

    #[test]
    fn render_frame_uploads_three_cube_matrices() {
        let gl = Rc::new(FakeGl::new());
        let context = RenderContext::new(Rc::clone(&gl)).unwrap();

        gl.calls.borrow_mut().clear();
        context.render_frame(0.5, 640, 480);

        let uploads = gl
            .calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, Call::SetUniformMat4(_)))
            .count();
        // model/view/projection for the cube, model/projection for the overlay
        assert_eq!(uploads, 5);
    }

    #[test]
    fn drop_releases_all_gpu_resources() {
        let gl = Rc::new(FakeGl::new());
        {
            let _context = RenderContext::new(Rc::clone(&gl)).unwrap();
        }
        assert!(gl.live_vertex_arrays.borrow().is_empty());
        assert!(gl.live_buffers.borrow().is_empty());
        assert!(gl.live_programs.borrow().is_empty());
    }
}
