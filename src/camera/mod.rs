//! Perspective camera and the orbit controller driving it.

mod controller;
mod core;

pub use controller::OrbitController;
pub use core::Camera;
