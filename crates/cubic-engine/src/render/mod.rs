//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers, bind groups) and
//! create them lazily on first use from a `RenderCtx`.
//!
//! Convention:
//! - right-handed view space, depth in [0, 1], `Less` depth test
//! - counter-clockwise front faces, back faces culled

mod ctx;
pub mod cube;

pub use ctx::{RenderCtx, RenderTarget};
pub use cube::CubeRenderer;
