use glam::{Mat4, Vec2, Vec3, Vec4, Vec4Swizzles};

use crate::picking::Ray;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }

    /// Unproject a normalized-device-coordinate point ([-1, 1] on each
    /// axis, y up) into a world-space ray for picking.
    ///
    /// The ray origin sits on the near plane and the direction points
    /// through the far-plane image of the same NDC point.
    #[must_use]
    pub fn pick_ray(&self, ndc: Vec2) -> Ray {
        let inv = self.build_matrix().inverse();

        let h_near = inv * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let h_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);

        let near = h_near.xyz() / h_near.w;
        let far = h_far.xyz() / h_far.w;

        Ray {
            origin: near,
            dir: (far - near).normalize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera() -> Camera {
        Camera {
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    #[test]
    fn center_ray_points_at_target() {
        let camera = test_camera();
        let ray = camera.pick_ray(Vec2::ZERO);

        // Looking down -Z from (0, 0, 5)
        assert!(ray.dir.z < -0.99);
        assert!(ray.origin.x.abs() < 1e-4);
        assert!(ray.origin.y.abs() < 1e-4);
    }

    #[test]
    fn corner_rays_diverge() {
        let camera = test_camera();
        let left = camera.pick_ray(Vec2::new(-1.0, 0.0));
        let right = camera.pick_ray(Vec2::new(1.0, 0.0));

        assert!(left.dir.x < 0.0);
        assert!(right.dir.x > 0.0);
        assert!((left.dir.length() - 1.0).abs() < 1e-5);
    }
}
