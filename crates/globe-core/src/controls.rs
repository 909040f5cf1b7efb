use crate::constants::AUTO_ROTATE_SPEED;

/// Play/pause state behind the overlay button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackControls {
    pub auto_rotate: bool,
}

impl Default for PlaybackControls {
    fn default() -> Self {
        Self { auto_rotate: true }
    }
}

impl PlaybackControls {
    pub fn toggle(&mut self) {
        self.auto_rotate = !self.auto_rotate;
    }

    /// Drives both the globe spin and the orbit auto-rotate.
    #[inline]
    pub fn rotation_speed(&self) -> f32 {
        if self.auto_rotate {
            AUTO_ROTATE_SPEED
        } else {
            0.0
        }
    }

    /// Label shows the action the button will take.
    #[inline]
    pub fn button_label(&self) -> &'static str {
        if self.auto_rotate {
            "Pause"
        } else {
            "Play"
        }
    }
}
