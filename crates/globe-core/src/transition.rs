//! The one-shot splash → globe switch.
//!
//! The countdown only starts at first paint, so a slow first frame can never
//! cut the splash short. Once the globe is up there is no way back.

use crate::constants::{PARTICLE_COUNT, SPLASH_DURATION};
use instant::Instant;
use std::time::Duration;

/// Tunables for the splash screen.
#[derive(Clone, Debug)]
pub struct SplashParams {
    pub duration: Duration,
    pub particle_count: usize,
}

impl Default for SplashParams {
    fn default() -> Self {
        Self {
            duration: SPLASH_DURATION,
            particle_count: PARTICLE_COUNT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Globe,
}

#[derive(Clone, Debug)]
pub struct SplashTransition {
    delay: Duration,
    first_paint: Option<Instant>,
    screen: Screen,
}

impl SplashTransition {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            first_paint: None,
            screen: Screen::Splash,
        }
    }

    #[inline]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn first_paint(&self) -> Option<Instant> {
        self.first_paint
    }

    /// Later calls keep the first mark.
    pub fn mark_first_paint(&mut self, now: Instant) {
        if self.first_paint.is_none() {
            self.first_paint = Some(now);
        }
    }

    /// Returns `Some(Screen::Globe)` on the single poll that performs the
    /// switch and `None` on every other poll.
    pub fn poll(&mut self, now: Instant) -> Option<Screen> {
        if self.screen != Screen::Splash {
            return None;
        }
        let painted_at = self.first_paint?;
        if now < painted_at + self.delay {
            return None;
        }
        self.screen = Screen::Globe;
        log::info!("[transition] splash -> globe after {:?}", now - painted_at);
        Some(Screen::Globe)
    }
}
