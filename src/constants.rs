/// DOM ids, splash copy and frame tuning for the web frontend.
///
/// Scene geometry and motion tuning lives in `globe_core::constants`; this
/// file only holds what is specific to the page.

// Host element provided by index.html; everything else is created here
pub const APP_ROOT_ID: &str = "app-root";
pub const SPLASH_ID: &str = "splash";
pub const PARTICLES_ID: &str = "particles";
pub const GLOBE_VIEW_ID: &str = "globe-view";
pub const CANVAS_ID: &str = "app-canvas";
pub const LABELS_ID: &str = "marker-labels";
pub const TOGGLE_ID: &str = "autorotate-toggle";

// Splash copy
pub const BRAND_LEFT: &str = "BEEBA";
pub const BRAND_RIGHT: &str = "BOYS";
pub const BRAND_REVEAL: &str = "Beeba Boys";
pub const TAGLINE: &str = "PREMIUM BARBER EXPERIENCE";

// Longest frame step fed to the scene; a background tab can stall rAF for
// seconds and the auto-rotate should not jump when it resumes
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Colors
pub const CLEAR_COLOR: [f64; 4] = [0.02, 0.03, 0.06, 1.0];
pub const GLOBE_TINT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const MARKER_TINT: [f32; 4] = [1.0, 1.0, 1.0, 1.0]; // opaque, texture alpha only
