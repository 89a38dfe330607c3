//! Transform math for the spinning cube.
//!
//! Conventions follow wgpu: right-handed view space, clip-space depth in [0, 1],
//! column-major matrices uploaded as-is.

mod transform;

pub use transform::{model_view_projection, Camera, CubeTransform, Projection, Spin, TransformUniform};
