use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A world-space ray with normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray start point.
    pub origin: Vec3,
    /// Normalized direction.
    pub dir: Vec3,
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Ray {
    /// Slab test against an AABB. Returns the entry distance along the ray,
    /// or `None` if the ray misses (intersections behind the origin are
    /// misses; an origin inside the box hits at distance zero).
    #[must_use]
    pub fn intersect_aabb(&self, aabb: &Aabb) -> Option<f32> {
        let inv = self.dir.recip();
        let t0 = (aabb.min - self.origin) * inv;
        let t1 = (aabb.max - self.origin) * inv;

        let t_min = t0.min(t1);
        let t_max = t0.max(t1);

        let enter = t_min.max_element();
        let exit = t_max.min_element();

        if enter > exit || exit < 0.0 {
            None
        } else {
            Some(enter.max(0.0))
        }
    }

    /// Möller–Trumbore ray/triangle intersection. Returns the distance
    /// along the ray, or `None` on a miss. Back faces count as hits, like
    /// the original double-sided scene meshes.
    #[must_use]
    pub fn intersect_triangle(&self, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
        const EPSILON: f32 = 1e-7;

        let ab = b - a;
        let ac = c - a;
        let p = self.dir.cross(ac);
        let det = ab.dot(p);

        if det.abs() < EPSILON {
            return None; // Ray parallel to the triangle plane
        }

        let inv_det = 1.0 / det;
        let s = self.origin - a;
        let u = s.dot(p) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(ab);
        let v = self.dir.dot(q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = ac.dot(q) * inv_det;
        (t > EPSILON).then_some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray(origin: Vec3, dir: Vec3) -> Ray {
        Ray {
            origin,
            dir: dir.normalize(),
        }
    }

    #[test]
    fn aabb_hit_from_outside() {
        let aabb = Aabb {
            min: Vec3::splat(-1.0),
            max: Vec3::splat(1.0),
        };
        let r = ray(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let t = r.intersect_aabb(&aabb).unwrap();
        assert!((t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn aabb_miss_behind_origin() {
        let aabb = Aabb {
            min: Vec3::splat(-1.0),
            max: Vec3::splat(1.0),
        };
        let r = ray(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(r.intersect_aabb(&aabb).is_none());
    }

    #[test]
    fn aabb_origin_inside_hits_at_zero() {
        let aabb = Aabb {
            min: Vec3::splat(-1.0),
            max: Vec3::splat(1.0),
        };
        let r = ray(Vec3::ZERO, Vec3::X);
        assert_eq!(r.intersect_aabb(&aabb), Some(0.0));
    }

    #[test]
    fn triangle_hit_and_miss() {
        let a = Vec3::new(-1.0, -1.0, 0.0);
        let b = Vec3::new(1.0, -1.0, 0.0);
        let c = Vec3::new(0.0, 1.0, 0.0);

        let hit = ray(Vec3::new(0.0, 0.0, 3.0), Vec3::NEG_Z);
        let t = hit.intersect_triangle(a, b, c).unwrap();
        assert!((t - 3.0).abs() < 1e-5);

        let miss = ray(Vec3::new(5.0, 0.0, 3.0), Vec3::NEG_Z);
        assert!(miss.intersect_triangle(a, b, c).is_none());
    }

    #[test]
    fn triangle_back_face_still_hits() {
        let a = Vec3::new(-1.0, -1.0, 0.0);
        let b = Vec3::new(1.0, -1.0, 0.0);
        let c = Vec3::new(0.0, 1.0, 0.0);

        let r = ray(Vec3::new(0.0, 0.0, -3.0), Vec3::Z);
        assert!(r.intersect_triangle(a, b, c).is_some());
    }
}
