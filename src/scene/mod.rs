//! Scene model: the flat object list the interaction layer ray-tests
//! against, plus manifest parsing and the background loader.

pub mod loader;
mod manifest;
mod object;

pub use manifest::{ManifestObject, SceneManifest};
pub use object::{Collider, ObjectId, SceneObject};
use rustc_hash::FxHashMap;

/// The gallery scene: a flat list of pickable objects.
///
/// Objects are immutable once loaded; membership of the selectable pool is
/// fixed at load time (computed by [`selectables`](Self::selectables)).
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    by_id: FxHashMap<ObjectId, usize>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object, assigning the next id.
    pub fn add_object(
        &mut self,
        name: impl Into<String>,
        collider: Collider,
    ) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        self.objects.push(SceneObject::new(id, name.into(), collider));
        let _ = self.by_id.insert(id, self.objects.len() - 1);
        id
    }

    /// All objects, in insertion order.
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Look up an object by id.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.by_id.get(&id).map(|&i| &self.objects[i])
    }

    /// Ids of all objects whose name starts with `prefix` — the selectable
    /// pool. Computed once after load; membership never changes afterwards.
    #[must_use]
    pub fn selectables(&self, prefix: &str) -> Vec<ObjectId> {
        self.objects
            .iter()
            .filter(|o| o.name.starts_with(prefix))
            .map(SceneObject::id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::picking::Aabb;

    fn unit_box(center: Vec3) -> Collider {
        Collider::Aabb(Aabb {
            min: center - Vec3::splat(0.5),
            max: center + Vec3::splat(0.5),
        })
    }

    #[test]
    fn selectable_pool_filters_by_prefix() {
        let mut scene = Scene::new();
        let p1 = scene.add_object("Painting_1", unit_box(Vec3::ZERO));
        let _shelf = scene.add_object("Bookshelf", unit_box(Vec3::X));
        let p2 = scene.add_object("Painting_2", unit_box(Vec3::Y));

        assert_eq!(scene.selectables("Painting"), vec![p1, p2]);
        assert!(scene.selectables("Sculpture").is_empty());
    }

    #[test]
    fn lookup_by_id() {
        let mut scene = Scene::new();
        let id = scene.add_object("Painting_1", unit_box(Vec3::ZERO));
        assert_eq!(scene.object(id).map(|o| o.name.as_str()), Some("Painting_1"));
        assert!(scene.object(ObjectId(99)).is_none());
    }
}
