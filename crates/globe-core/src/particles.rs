use crate::constants::*;
use rand::Rng;

/// One decorative dot on the splash screen. Position is in viewport units so
/// the layout survives resizes without respawning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub left_vw: f32,
    pub top_vh: f32,
    pub size_px: f32,
    pub delay_sec: f32,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_vw: rng.gen::<f32>() * 100.0,
            top_vh: rng.gen::<f32>() * 100.0,
            size_px: rng.gen::<f32>() * PARTICLE_SIZE_SPAN_PX + PARTICLE_SIZE_MIN_PX,
            delay_sec: rng.gen::<f32>() * PARTICLE_DELAY_MAX_SEC,
        }
    }

    /// Inline style for the particle's element; the twinkle itself is CSS.
    pub fn css(&self) -> String {
        format!(
            "left: {:.3}vw; top: {:.3}vh; width: {:.3}px; height: {:.3}px; background: white; animation-delay: {:.3}s;",
            self.left_vw, self.top_vh, self.size_px, self.size_px, self.delay_sec
        )
    }
}

pub fn spawn_particles<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}
