//! Cubic engine crate.
//!
//! Owns the platform + GPU runtime pieces and the cube renderer used by the
//! `cubic` binary.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod math;
pub mod mesh;
pub mod render;
pub mod texture;
