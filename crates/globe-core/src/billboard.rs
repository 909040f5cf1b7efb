use glam::{Mat4, Quat, Vec3};

/// A flat, square icon anchored in its parent's frame that is re-oriented every
/// frame to match the camera.
#[derive(Clone, Debug)]
pub struct Billboard {
    /// Position in the parent (globe) frame.
    pub anchor: Vec3,
    /// World-space rotation; a straight copy of the camera orientation.
    pub rotation: Quat,
    pub size: f32,
}

impl Billboard {
    pub fn new(anchor: Vec3, size: f32) -> Self {
        Self {
            anchor,
            rotation: Quat::IDENTITY,
            size,
        }
    }

    #[inline]
    pub fn face(&mut self, camera_orientation: Quat) {
        self.rotation = camera_orientation;
    }

    /// World position of the anchor under `parent`.
    #[inline]
    pub fn world_position(&self, parent: Mat4) -> Vec3 {
        parent.transform_point3(self.anchor)
    }

    /// Only the anchor follows the parent; the rotation stays in world space so
    /// the plane keeps facing the camera whatever the parent does.
    pub fn model_matrix(&self, parent: Mat4) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.size),
            self.rotation,
            self.world_position(parent),
        )
    }

    /// Where the name label hangs: one icon size below the anchor, parent frame.
    pub fn label_position(&self, parent: Mat4) -> Vec3 {
        parent.transform_point3(self.anchor - Vec3::new(0.0, self.size, 0.0))
    }
}
