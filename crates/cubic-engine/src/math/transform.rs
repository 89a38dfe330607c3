use std::f32::consts::PI;

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Perspective projection parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
    /// Vertical field of view, radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y: 2.0 * PI / 5.0,
            near: 1.0,
            far: 100.0,
        }
    }
}

impl Projection {
    pub fn matrix(&self, aspect: f32) -> Mat4 {
        let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
        Mat4::perspective_rh(self.fov_y, aspect, self.near, self.far)
    }
}

/// Viewer placement: the cube sits `distance` units in front of the camera.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub distance: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self { distance: 4.0 }
    }
}

impl Camera {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -self.distance))
    }
}

/// Cube rotation over time.
///
/// The cube is tilted by a fixed `angle` around an axis that sweeps the XY
/// plane at `axis_rate` radians per second.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Spin {
    pub axis_rate: f32,
    pub angle: f32,
}

impl Default for Spin {
    fn default() -> Self {
        Self {
            axis_rate: 1.0,
            angle: 1.0,
        }
    }
}

impl Spin {
    /// Unit rotation axis at `elapsed` seconds.
    pub fn axis(&self, elapsed: f32) -> Vec3 {
        let phase = elapsed * self.axis_rate;
        Vec3::new(phase.sin(), phase.cos(), 0.0)
    }

    pub fn matrix(&self, elapsed: f32) -> Mat4 {
        Mat4::from_axis_angle(self.axis(elapsed), self.angle)
    }
}

/// Everything needed to place the cube on screen.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CubeTransform {
    pub projection: Projection,
    pub camera: Camera,
    pub spin: Spin,
}

/// `projection * view * model` for the cube at `elapsed` seconds.
pub fn model_view_projection(aspect: f32, elapsed: f32, transform: &CubeTransform) -> Mat4 {
    transform.projection.matrix(aspect) * transform.camera.matrix() * transform.spin.matrix(elapsed)
}

/// Uniform block consumed by the cube shader (`Transform` in WGSL).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TransformUniform {
    pub mvp: [[f32; 4]; 4],
}

impl TransformUniform {
    pub fn from_mat4(m: Mat4) -> Self {
        Self {
            mvp: m.to_cols_array_2d(),
        }
    }
}

impl Default for TransformUniform {
    fn default() -> Self {
        Self::from_mat4(Mat4::IDENTITY)
    }
}
