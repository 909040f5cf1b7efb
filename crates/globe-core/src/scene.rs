//! Per-frame state of the globe view.
//!
//! The order inside [`GlobeScene::advance`] matters: the camera moves first so
//! the billboards copy the orientation that will actually be rendered.

use crate::billboard::Billboard;
use crate::camera::{Camera, OrbitControls};
use crate::constants::*;
use crate::controls::PlaybackControls;
use crate::globe::GlobeMotion;
use crate::marker::Marker;
use glam::{Mat4, Vec2, Vec3};

/// Tunables for the globe view.
#[derive(Clone, Debug)]
pub struct GlobeParams {
    pub globe_radius: f32,
    pub marker_size: f32,
    pub ambient: f32,
    pub directional: f32,
    pub light_position: Vec3,
}

impl Default for GlobeParams {
    fn default() -> Self {
        Self {
            globe_radius: GLOBE_RADIUS,
            marker_size: MARKER_SIZE,
            ambient: AMBIENT_INTENSITY,
            directional: DIRECTIONAL_INTENSITY,
            light_position: Vec3::from_array(DIRECTIONAL_POSITION),
        }
    }
}

/// Screen placement of one marker's name label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    pub px: Vec2,
    /// False when the marker sits on the far side of the globe.
    pub visible: bool,
}

pub struct GlobeScene {
    pub params: GlobeParams,
    pub camera: Camera,
    pub orbit: OrbitControls,
    pub playback: PlaybackControls,
    pub motion: GlobeMotion,
    pub markers: Vec<Marker>,
    pub billboards: Vec<Billboard>,
    elapsed_sec: f32,
}

impl GlobeScene {
    pub fn new(markers: &[Marker], params: GlobeParams) -> Self {
        let billboards = markers
            .iter()
            .map(|m| Billboard::new(m.anchor(), params.marker_size))
            .collect();
        let camera = Camera::default();
        let orbit = OrbitControls::from_eye(camera.eye);
        let mut scene = Self {
            params,
            camera,
            orbit,
            playback: PlaybackControls::default(),
            motion: GlobeMotion::default(),
            markers: markers.to_vec(),
            billboards,
            elapsed_sec: 0.0,
        };
        scene.orbit.apply(&mut scene.camera);
        scene.face_camera();
        scene
    }

    #[inline]
    pub fn elapsed_sec(&self) -> f32 {
        self.elapsed_sec
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    pub fn toggle_playback(&mut self) -> &'static str {
        self.playback.toggle();
        log::info!("[scene] auto-rotate {}", self.playback.auto_rotate);
        self.playback.button_label()
    }

    /// One rendered frame.
    pub fn advance(&mut self, dt_sec: f32) {
        let dt = dt_sec.max(0.0);
        self.elapsed_sec += dt;
        let speed = self.playback.rotation_speed();

        self.orbit.auto_rotate = self.playback.auto_rotate;
        self.orbit.auto_rotate_speed = speed;
        self.orbit.update(dt);
        self.orbit.apply(&mut self.camera);

        self.motion.step(self.elapsed_sec, speed);
        self.face_camera();
    }

    fn face_camera(&mut self) {
        let q = self.camera.orientation();
        for b in &mut self.billboards {
            b.face(q);
        }
    }

    pub fn globe_model(&self) -> Mat4 {
        self.motion.model_matrix() * Mat4::from_scale(Vec3::splat(self.params.globe_radius))
    }

    /// Markers hang off the globe's motion, not its scale.
    pub fn marker_models(&self) -> impl Iterator<Item = Mat4> + '_ {
        let parent = self.motion.model_matrix();
        self.billboards.iter().map(move |b| b.model_matrix(parent))
    }

    /// Direction the light travels, world space.
    pub fn light_direction(&self) -> Vec3 {
        (-self.params.light_position).normalize_or_zero()
    }

    pub fn labels(&self, width: f32, height: f32) -> Vec<LabelPlacement> {
        let parent = self.motion.model_matrix();
        let center = parent.transform_point3(Vec3::ZERO);
        self.billboards
            .iter()
            .map(|b| {
                let anchor = b.world_position(parent);
                let facing = (anchor - center).dot(self.camera.eye - anchor) > 0.0;
                match self
                    .camera
                    .world_to_screen(b.label_position(parent), width, height)
                {
                    Some(px) => LabelPlacement {
                        px,
                        visible: facing,
                    },
                    None => LabelPlacement {
                        px: Vec2::ZERO,
                        visible: false,
                    },
                }
            })
            .collect()
    }
}
