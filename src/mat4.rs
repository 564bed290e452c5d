/// Column-major 4x4 transform matrix (index = column * 4 + row).
///
/// New values come from the pure constructors below or from [`Mat4::multiply`];
/// there is no in-place mutation. The element layout matches what
/// `glUniformMatrix4fv` expects with `transpose = GL_FALSE`, so a matrix can be
/// uploaded straight from [`Mat4::as_slice`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Mat4 {
    /// The multiplicative identity.
    pub fn identity() -> Self {
        let mut data = [0.0; 16];
        data[0] = 1.0;
        data[5] = 1.0;
        data[10] = 1.0;
        data[15] = 1.0;
        Self { data }
    }

    /// Translation by `(x, y, z)`, stored in the last column.
    pub fn translate(x: f32, y: f32, z: f32) -> Self {
        let mut result = Self::identity();
        result.data[12] = x;
        result.data[13] = y;
        result.data[14] = z;
        result
    }

    /// Rotation about the X axis, `angle` in radians.
    pub fn rotate_x(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut result = Self::identity();
        result.data[5] = cos;
        result.data[6] = -sin;
        result.data[9] = sin;
        result.data[10] = cos;
        result
    }

    /// Rotation about the Y axis, `angle` in radians.
    pub fn rotate_y(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut result = Self::identity();
        result.data[0] = cos;
        result.data[2] = sin;
        result.data[8] = -sin;
        result.data[10] = cos;
        result
    }

    /// Rotation about the Z axis, `angle` in radians.
    pub fn rotate_z(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut result = Self::identity();
        result.data[0] = cos;
        result.data[1] = -sin;
        result.data[4] = sin;
        result.data[5] = cos;
        result
    }

    /// OpenGL-style perspective projection.
    ///
    /// `fov_radians` is the full vertical field of view. Expects
    /// `far > near > 0` and `aspect > 0`; no validation is performed, so
    /// degenerate inputs propagate NaN/Inf into the result.
    pub fn perspective(fov_radians: f32, aspect: f32, near: f32, far: f32) -> Self {
        let tan_half_fov = (fov_radians / 2.0).tan();
        let mut data = [0.0; 16];
        data[0] = 1.0 / (aspect * tan_half_fov);
        data[5] = 1.0 / tan_half_fov;
        data[10] = -(far + near) / (far - near);
        data[11] = -1.0;
        data[14] = -(2.0 * far * near) / (far - near);
        Self { data }
    }

    /// Orthographic projection mapping the given 2D rectangle to NDC, with a
    /// fixed [-1, 1] depth range.
    ///
    /// Divides by zero if `right == left` or `top == bottom`.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        let mut data = [0.0; 16];
        data[0] = 2.0 / (right - left);
        data[5] = 2.0 / (top - bottom);
        data[10] = -1.0;
        data[12] = -(right + left) / (right - left);
        data[13] = -(top + bottom) / (top - bottom);
        data[15] = 1.0;
        Self { data }
    }

    /// Standard 4x4 matrix product.
    ///
    /// Convention: interpreted as transforms acting on column vectors, the
    /// result applies `a` first, then `b`. Associative, not commutative. The
    /// same convention is used everywhere model/view/projection matrices are
    /// composed.
    pub fn multiply(a: Mat4, b: Mat4) -> Self {
        let mut data = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                data[col * 4 + row] = a.data[col * 4] * b.data[row]
                    + a.data[col * 4 + 1] * b.data[4 + row]
                    + a.data[col * 4 + 2] * b.data[8 + row]
                    + a.data[col * 4 + 3] * b.data[12 + row];
            }
        }
        Self { data }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}
