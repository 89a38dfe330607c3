//! Texture decoding and GPU upload.
//!
//! `TextureImage` is the CPU side (decoded RGBA8 pixels); `GpuTexture` is the
//! uploaded texture + view + sampler bound by the cube renderer.

mod gpu;
mod pixels;

pub use gpu::GpuTexture;
pub use pixels::TextureImage;
