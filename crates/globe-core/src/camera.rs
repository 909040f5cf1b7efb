//! Perspective camera and orbit controls around the globe.
//!
//! Nothing here touches platform APIs; the web frontend feeds pointer and
//! wheel deltas in and reads matrices and the camera orientation out.

use crate::constants::*;
use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::from_array(CAMERA_START),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space rotation of the camera: local -Z looks at the target.
    pub fn orientation(&self) -> Quat {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward);
        Quat::from_mat3(&Mat3::from_cols(right, up, -forward))
    }

    /// Project a world-space point to canvas pixels (origin top-left).
    ///
    /// Returns `None` for points behind the camera.
    pub fn world_to_screen(&self, p: Vec3, width: f32, height: f32) -> Option<Vec2> {
        let clip = self.view_proj() * Vec4::new(p.x, p.y, p.z, 1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * width,
            (1.0 - ndc.y) * 0.5 * height,
        ))
    }
}

/// Orbit controls: rotate and zoom around the origin, no panning.
///
/// The eye position is kept in spherical form. `theta` is the azimuth around
/// +Y measured from +Z, `phi` the polar angle from +Y.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    dragging: bool,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::from_eye(Vec3::from_array(CAMERA_START))
    }
}

impl OrbitControls {
    pub fn from_eye(eye: Vec3) -> Self {
        let radius = eye.length().max(f32::EPSILON);
        Self {
            radius: radius.clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE),
            theta: eye.x.atan2(eye.z),
            phi: (eye.y / radius).clamp(-1.0, 1.0).acos(),
            auto_rotate: true,
            auto_rotate_speed: AUTO_ROTATE_SPEED,
            dragging: false,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        Vec3::new(
            self.radius * sin_phi * sin_theta,
            self.radius * cos_phi,
            self.radius * sin_phi * cos_theta,
        )
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Rotate by a pointer delta in pixels; a drag across the full viewport
    /// height turns the camera once around.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.theta -= std::f32::consts::TAU * dx / h;
        self.phi -= std::f32::consts::TAU * dy / h;
        self.clamp_polar();
    }

    /// Positive `delta_y` (wheel towards the user) zooms out.
    pub fn zoom_by_wheel(&mut self, delta_y: f32) {
        if delta_y < 0.0 {
            self.radius *= ORBIT_ZOOM_SCALE;
        } else if delta_y > 0.0 {
            self.radius /= ORBIT_ZOOM_SCALE;
        }
        self.radius = self.radius.clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    /// Advance auto-rotation; a speed of 1 turns once per minute.
    pub fn update(&mut self, dt_sec: f32) {
        if self.auto_rotate && !self.dragging {
            self.theta -= std::f32::consts::TAU / 60.0 * self.auto_rotate_speed * dt_sec;
        }
        self.theta = self.theta.rem_euclid(std::f32::consts::TAU);
    }

    pub fn apply(&self, camera: &mut Camera) {
        camera.eye = self.eye();
        camera.target = Vec3::ZERO;
    }

    fn clamp_polar(&mut self) {
        self.phi = self
            .phi
            .clamp(ORBIT_POLAR_EPS, std::f32::consts::PI - ORBIT_POLAR_EPS);
    }
}
