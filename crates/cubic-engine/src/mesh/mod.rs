//! Static geometry.

mod cube;

pub use cube::{CubeVertex, CUBE_VERTEX_COUNT, CUBE_VERTICES};
