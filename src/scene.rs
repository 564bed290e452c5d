//! Per-frame matrix recipes for the demo scene.
//!
//! Kept as pure functions so the math can be tested without a GL context.

use crate::mat4::Mat4;

/// Model matrix for the spinning cube at `time` seconds: a slow roll about Z
/// on top of a half-speed pitch about X on top of a full-speed yaw about Y.
pub fn cube_model(time: f32) -> Mat4 {
    let pitch_and_yaw = Mat4::multiply(Mat4::rotate_x(time * 0.5), Mat4::rotate_y(time));
    Mat4::multiply(Mat4::rotate_z(time * 0.2), pitch_and_yaw)
}

/// View matrix: the camera backs 5 units away from the origin.
pub fn view() -> Mat4 {
    Mat4::translate(0.0, 0.0, -5.0)
}

/// Perspective projection for the 3D pass: 45 degree vertical FOV, near 0.1,
/// far 100.
pub fn perspective_projection(width: f32, height: f32) -> Mat4 {
    Mat4::perspective(45.0_f32.to_radians(), width / height, 0.1, 100.0)
}

/// Orthographic projection for the 2D overlay pass, pixel coordinates with
/// the origin at the top-left corner.
pub fn overlay_projection(width: f32, height: f32) -> Mat4 {
    Mat4::orthographic(0.0, width, height, 0.0)
}
