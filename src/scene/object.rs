use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::picking::{Aabb, Ray};

/// Unique scene object identifier, assigned by [`Scene`](super::Scene) in
/// insertion order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ObjectId(pub u32);

/// Pick geometry for one scene object.
///
/// The host renderer owns the real meshes and textures; the interaction
/// layer only needs enough geometry to ray-test against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Collider {
    /// Axis-aligned box.
    Aabb(Aabb),
    /// Indexed triangle mesh.
    Mesh {
        /// Vertex positions.
        positions: Vec<Vec3>,
        /// Triangle indices, three per triangle.
        indices: Vec<u32>,
    },
}

impl Collider {
    /// Nearest intersection distance along `ray`, or `None` on a miss.
    ///
    /// Degenerate mesh data (index out of range, trailing partial triangle)
    /// is skipped rather than reported as an error.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Self::Aabb(aabb) => ray.intersect_aabb(aabb),
            Self::Mesh { positions, indices } => indices
                .chunks_exact(3)
                .filter_map(|tri| {
                    let a = positions.get(tri[0] as usize)?;
                    let b = positions.get(tri[1] as usize)?;
                    let c = positions.get(tri[2] as usize)?;
                    ray.intersect_triangle(*a, *b, *c)
                })
                .min_by(f32::total_cmp),
        }
    }
}

/// A pickable object in the gallery scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    id: ObjectId,
    /// Name tag, e.g. `Painting_3` or `Bookshelf`.
    pub name: String,
    /// Pick geometry.
    pub collider: Collider,
}

impl SceneObject {
    pub(super) fn new(id: ObjectId, name: String, collider: Collider) -> Self {
        Self { id, name, collider }
    }

    /// Scene-assigned identifier.
    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.id
    }
}
