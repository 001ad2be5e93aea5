use glam::Vec2;

use super::{Hit, RayQuery};
use crate::camera::Camera;
use crate::scene::Scene;

/// Ray-intersection query over a whole [`Scene`].
///
/// Borrowed per query; the engine constructs one around its current scene
/// whenever a pointer event needs a hit list.
pub struct SceneRaycaster<'a> {
    scene: &'a Scene,
}

impl<'a> SceneRaycaster<'a> {
    /// Wrap a scene for querying.
    #[must_use]
    pub fn new(scene: &'a Scene) -> Self {
        Self { scene }
    }
}

impl RayQuery for SceneRaycaster<'_> {
    fn query(&self, ndc: Vec2, camera: &Camera) -> Vec<Hit> {
        let ray = camera.pick_ray(ndc);

        let mut hits: Vec<Hit> = self
            .scene
            .objects()
            .iter()
            .filter_map(|obj| {
                obj.collider.intersect(&ray).map(|distance| Hit {
                    object: obj.id(),
                    name: obj.name.clone(),
                    distance,
                })
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::picking::Aabb;
    use crate::scene::Collider;

    fn camera_at(eye: Vec3) -> Camera {
        Camera {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    fn box_at(z: f32) -> Collider {
        Collider::Aabb(Aabb {
            min: Vec3::new(-1.0, -1.0, z - 0.1),
            max: Vec3::new(1.0, 1.0, z + 0.1),
        })
    }

    #[test]
    fn hits_are_ordered_nearest_first() {
        let mut scene = Scene::new();
        let far = scene.add_object("Painting_far", box_at(-5.0));
        let near = scene.add_object("Painting_near", box_at(-2.0));

        let camera = camera_at(Vec3::new(0.0, 0.0, 5.0));
        let hits = SceneRaycaster::new(&scene).query(Vec2::ZERO, &camera);

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].object, near);
        assert_eq!(hits[1].object, far);
        assert!(hits[0].distance < hits[1].distance);
    }

    #[test]
    fn off_axis_ray_misses_everything() {
        let mut scene = Scene::new();
        let _ = scene.add_object("Painting_1", box_at(-2.0));

        let camera = camera_at(Vec3::new(0.0, 0.0, 5.0));
        let hits =
            SceneRaycaster::new(&scene).query(Vec2::new(1.0, 1.0), &camera);
        assert!(hits.is_empty());
    }

    #[test]
    fn empty_scene_yields_empty_hit_list() {
        let scene = Scene::new();
        let camera = camera_at(Vec3::new(0.0, 0.0, 5.0));
        assert!(SceneRaycaster::new(&scene).query(Vec2::ZERO, &camera).is_empty());
    }
}
