use glam::{Vec2, Vec3};

use crate::camera::Camera;
use crate::options::CameraOptions;

/// Spherical pose around a look-at target.
#[derive(Debug, Clone, Copy, PartialEq)]
struct OrbitPose {
    /// Azimuth angle in radians, measured from +Z toward +X.
    yaw: f32,
    /// Polar angle in radians, measured down from +Y.
    polar: f32,
    /// Distance from the target.
    distance: f32,
    /// Look-at target.
    target: Vec3,
}

impl OrbitPose {
    /// Derive a pose from an eye/target pair.
    fn from_eye_target(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(1e-4);
        let polar = (offset.y / distance).clamp(-1.0, 1.0).acos();
        let yaw = offset.x.atan2(offset.z);
        Self {
            yaw,
            polar,
            distance,
            target,
        }
    }

    /// World-space eye position for this pose.
    fn eye(&self) -> Vec3 {
        let dir = Vec3::new(
            self.polar.sin() * self.yaw.sin(),
            self.polar.cos(),
            self.polar.sin() * self.yaw.cos(),
        );
        self.target + dir * self.distance
    }
}

/// Orbit camera controller with constrained azimuth/polar/distance ranges
/// and damped motion toward the input-driven goal pose.
///
/// Input handlers mutate the *goal* pose; [`update`](Self::update) eases the
/// current pose toward it each frame and rewrites the owned [`Camera`].
pub struct OrbitController {
    /// The camera this controller drives.
    pub camera: Camera,

    current: OrbitPose,
    goal: OrbitPose,
    home: OrbitPose,

    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    damping: f32,

    polar_range: (f32, f32),
    yaw_range: (f32, f32),
    distance_range: (f32, f32),
}

impl OrbitController {
    /// Build a controller from camera options and an initial aspect ratio.
    #[must_use]
    pub fn new(opts: &CameraOptions, aspect: f32) -> Self {
        let eye = Vec3::from(opts.eye);
        let target = Vec3::from(opts.target);
        let home = OrbitPose::from_eye_target(eye, target);

        let camera = Camera {
            eye,
            target,
            up: Vec3::Y,
            aspect,
            fovy: opts.fovy,
            znear: opts.znear,
            zfar: opts.zfar,
        };

        Self {
            camera,
            current: home,
            goal: home,
            home,
            rotate_speed: opts.rotate_speed,
            pan_speed: opts.pan_speed,
            zoom_speed: opts.zoom_speed,
            damping: opts.damping,
            polar_range: (
                opts.min_polar_deg.to_radians(),
                opts.max_polar_deg.to_radians(),
            ),
            yaw_range: (
                opts.min_azimuth_deg.to_radians(),
                opts.max_azimuth_deg.to_radians(),
            ),
            distance_range: (opts.min_distance, opts.max_distance),
        }
    }

    /// Rotate the goal pose by `delta` pixels of mouse movement.
    pub fn rotate(&mut self, delta: Vec2) {
        self.goal.yaw -= delta.x * self.rotate_speed;
        self.goal.polar -= delta.y * self.rotate_speed;
        self.clamp_goal();
    }

    /// Pan the goal target by `delta` pixels of mouse movement, in the
    /// camera's screen plane.
    pub fn pan(&mut self, delta: Vec2) {
        let forward = (self.camera.target - self.camera.eye).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);

        let translation =
            right * (-delta.x * self.pan_speed) + up * (delta.y * self.pan_speed);
        self.goal.target += translation;
    }

    /// Zoom the goal pose (positive = zoom in, negative = zoom out).
    pub fn zoom(&mut self, delta: f32) {
        self.goal.distance *= 1.0 - delta * self.zoom_speed;
        self.clamp_goal();
    }

    /// Snap the goal pose back to the home pose from the options.
    pub fn recenter(&mut self) {
        self.goal = self.home;
    }

    /// Update the viewport aspect ratio after a resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// Ease the current pose toward the goal pose and rewrite the camera.
    ///
    /// `dt` is the frame delta in seconds. With damping `d`, the remaining
    /// offset shrinks by a factor of `e^(-d * dt)` per call, so motion is
    /// framerate-independent.
    pub fn update(&mut self, dt: f32) {
        let t = 1.0 - (-self.damping * dt).exp();

        self.current.yaw += (self.goal.yaw - self.current.yaw) * t;
        self.current.polar += (self.goal.polar - self.current.polar) * t;
        self.current.distance +=
            (self.goal.distance - self.current.distance) * t;
        self.current.target =
            self.current.target.lerp(self.goal.target, t);

        self.camera.eye = self.current.eye();
        self.camera.target = self.current.target;
    }

    fn clamp_goal(&mut self) {
        self.goal.polar =
            self.goal.polar.clamp(self.polar_range.0, self.polar_range.1);
        self.goal.yaw =
            self.goal.yaw.clamp(self.yaw_range.0, self.yaw_range.1);
        self.goal.distance = self
            .goal
            .distance
            .clamp(self.distance_range.0, self.distance_range.1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> OrbitController {
        OrbitController::new(&CameraOptions::default(), 1.6)
    }

    #[test]
    fn polar_never_drops_below_horizon() {
        let mut c = controller();
        // Drag far upward: polar would exceed the 90 degree cap
        c.rotate(Vec2::new(0.0, -10_000.0));
        c.update(100.0);
        assert!(c.camera.eye.y >= c.camera.target.y - 1e-3);
    }

    #[test]
    fn zoom_is_clamped_to_max_distance() {
        let mut c = controller();
        c.zoom(-10_000.0);
        c.update(100.0);
        let dist = (c.camera.eye - c.camera.target).length();
        assert!(dist <= CameraOptions::default().max_distance + 1e-3);
    }

    #[test]
    fn recenter_restores_home_pose() {
        let mut c = controller();
        let home_eye = c.camera.eye;
        c.rotate(Vec2::new(50.0, 20.0));
        c.zoom(2.0);
        c.update(100.0);
        c.recenter();
        c.update(100.0);
        assert!((c.camera.eye - home_eye).length() < 1e-2);
    }

    #[test]
    fn damping_converges_over_time() {
        let mut c = controller();
        c.zoom(5.0);
        let mut last = (c.camera.eye - c.camera.target).length();
        for _ in 0..60 {
            c.update(1.0 / 60.0);
            let dist = (c.camera.eye - c.camera.target).length();
            assert!(dist <= last + 1e-5);
            last = dist;
        }
    }
}
