//! Orbit camera with inertial damping.
//!
//! Spherical pose (azimuth/elevation/distance) around a target point, the
//! way the page's original orbit controls behaved: dragging adds angular
//! velocity which decays each frame, so the view coasts to a stop.

use glam::{Mat4, Vec3};

/// Perspective orbit camera.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Rotation around Y axis (radians).
    pub azimuth: f32,
    /// Rotation around X axis (radians), clamped to avoid gimbal lock.
    pub elevation: f32,
    /// Distance from target point.
    pub distance: f32,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    viewport_width: f32,
    viewport_height: f32,
    // Inertia: residual angular velocity applied and decayed per frame.
    azimuth_vel: f32,
    elevation_vel: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            elevation: 0.165, // matches a camera at y=0.5 looking at a model 3 units away
            distance: 3.0,
            target: Vec3::ZERO,
            fov_y: 75.0_f32.to_radians(),
            near: 0.1,
            far: 100.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
            azimuth_vel: 0.0,
            elevation_vel: 0.0,
        }
    }
}

impl OrbitCamera {
    const ORBIT_SENSITIVITY: f32 = 0.005;
    /// Fraction of velocity retained per 60Hz frame (0.05 damping factor).
    const DAMPING: f32 = 0.95;
    const ZOOM_SPEED: f32 = 0.1;
    const MIN_DISTANCE: f32 = 0.5;
    const MAX_DISTANCE: f32 = 20.0;
    const MAX_ELEVATION: f32 = 1.4; // ~80 degrees

    /// Create a camera for the given viewport size.
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            viewport_width,
            viewport_height,
            ..Default::default()
        }
    }

    /// Feed a pointer drag delta into the orbit velocity.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.azimuth_vel += dx * Self::ORBIT_SENSITIVITY;
        self.elevation_vel += dy * Self::ORBIT_SENSITIVITY;
    }

    /// Zoom toward/away from the target (positive = zoom in).
    pub fn zoom(&mut self, delta: f32) {
        self.distance *= 1.0 - delta * Self::ZOOM_SPEED;
        self.distance = self.distance.clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE);
    }

    /// Apply inertia and decay it. Call once per frame.
    pub fn tick(&mut self, dt: f32) {
        self.azimuth += self.azimuth_vel;
        self.elevation = (self.elevation + self.elevation_vel)
            .clamp(-Self::MAX_ELEVATION, Self::MAX_ELEVATION);

        // Frame-rate independent decay, normalized to a 60Hz reference.
        let decay = Self::DAMPING.powf(dt * 60.0);
        self.azimuth_vel *= decay;
        self.elevation_vel *= decay;
        if self.azimuth_vel.abs() < 1e-5 {
            self.azimuth_vel = 0.0;
        }
        if self.elevation_vel.abs() < 1e-5 {
            self.elevation_vel = 0.0;
        }
    }

    /// Reset pose to the default view, killing any inertia.
    pub fn reset(&mut self) {
        let viewport = (self.viewport_width, self.viewport_height);
        *self = Self::default();
        self.viewport_width = viewport.0;
        self.viewport_height = viewport.1;
    }

    /// Update viewport dimensions (canvas resize).
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport_width = width;
            self.viewport_height = height;
        }
    }

    pub fn viewport(&self) -> (f32, f32) {
        (self.viewport_width, self.viewport_height)
    }

    pub fn aspect(&self) -> f32 {
        self.viewport_width / self.viewport_height
    }

    /// Camera position in world space.
    pub fn position(&self) -> Vec3 {
        let dir = Vec3::new(
            self.elevation.cos() * self.azimuth.sin(),
            self.elevation.sin(),
            self.elevation.cos() * self.azimuth.cos(),
        );
        self.target + dir * self.distance
    }

    /// View matrix (world → camera space).
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Projection matrix.
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect(), self.near, self.far)
    }

    /// Combined view-projection matrix, written into the frame buffer.
    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_clamps_elevation() {
        let mut camera = OrbitCamera::default();
        camera.orbit(0.0, 10000.0);
        camera.tick(1.0 / 60.0);
        assert!(camera.elevation <= OrbitCamera::MAX_ELEVATION);
        assert!(camera.elevation >= -OrbitCamera::MAX_ELEVATION);
    }

    #[test]
    fn zoom_clamps_distance() {
        let mut camera = OrbitCamera::default();
        camera.zoom(100.0);
        assert!(camera.distance >= OrbitCamera::MIN_DISTANCE);
        camera.zoom(-100.0);
        assert!(camera.distance <= OrbitCamera::MAX_DISTANCE);
    }

    #[test]
    fn inertia_decays_to_rest() {
        let mut camera = OrbitCamera::default();
        camera.orbit(100.0, 0.0);
        for _ in 0..600 {
            camera.tick(1.0 / 60.0);
        }
        assert_eq!(camera.azimuth_vel, 0.0);
        let frozen = camera.azimuth;
        camera.tick(1.0 / 60.0);
        assert_eq!(camera.azimuth, frozen);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut camera = OrbitCamera::new(800.0, 600.0);
        camera.set_viewport(1600.0, 600.0);
        assert!((camera.aspect() - 8.0 / 3.0).abs() < 1e-6);
        // Zero-sized viewport is ignored
        camera.set_viewport(0.0, 600.0);
        assert_eq!(camera.viewport(), (1600.0, 600.0));
    }

    #[test]
    fn view_proj_is_finite() {
        let camera = OrbitCamera::new(800.0, 600.0);
        let m = camera.view_proj();
        assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn position_orbits_target() {
        let mut camera = OrbitCamera::default();
        camera.target = Vec3::new(0.0, -0.5, 0.0);
        let d = (camera.position() - camera.target).length();
        assert!((d - camera.distance).abs() < 1e-4);
    }
}
