//! Ray picking: ray construction, primitive intersection tests, and the
//! scene raycaster producing nearest-first hit lists.

mod ray;
mod raycaster;

use glam::Vec2;
pub use ray::{Aabb, Ray};
pub use raycaster::SceneRaycaster;

use crate::camera::Camera;
use crate::scene::ObjectId;

/// One ray/object intersection.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    /// The intersected object.
    pub object: ObjectId,
    /// The intersected object's name tag.
    pub name: String,
    /// Ray parameter at the intersection (world-space distance along the
    /// ray, since ray directions are normalized).
    pub distance: f32,
}

/// Ordered ray-intersection query against the scene.
///
/// The production implementation is [`SceneRaycaster`]; tests inject
/// scripted hit lists through this seam.
pub trait RayQuery {
    /// Cast a ray for the given NDC pointer position through `camera` and
    /// return all intersections, nearest first.
    fn query(&self, ndc: Vec2, camera: &Camera) -> Vec<Hit>;
}
