use crate::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Idle motion of the globe mesh: a slow spin plus a faint bob and tilt.
#[derive(Clone, Debug, Default)]
pub struct GlobeMotion {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub position_y: f32,
}

impl GlobeMotion {
    /// One frame of motion. `elapsed_sec` is the clock since the globe view
    /// appeared; it keeps running while the spin is paused.
    pub fn step(&mut self, elapsed_sec: f32, rotation_speed: f32) {
        self.rotation_y += rotation_speed * SPIN_PER_FRAME_SCALE;
        self.position_y = (elapsed_sec * BOB_FREQUENCY).sin() * BOB_AMPLITUDE;
        self.rotation_x = (elapsed_sec * TILT_FREQUENCY).sin() * TILT_AMPLITUDE;
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation_x, self.rotation_y, 0.0)
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation(), Vec3::new(0.0, self.position_y, 0.0))
    }
}
