use std::time::Duration;

// Shared scene tuning constants used by the web frontend.

// Globe
pub const GLOBE_RADIUS: f32 = 1.0;
pub const GLOBE_SEGMENTS: u32 = 64;
pub const GLOBE_TEXTURE_PATH: &str = "/textures/earthmap4k.jpg";

// Globe motion: spin per frame is speed * SPIN_PER_FRAME_SCALE
pub const SPIN_PER_FRAME_SCALE: f32 = 0.001;
pub const BOB_FREQUENCY: f32 = 0.6; // rad/s of the vertical bob
pub const BOB_AMPLITUDE: f32 = 0.003;
pub const TILT_FREQUENCY: f32 = 0.15; // rad/s of the x-axis wobble
pub const TILT_AMPLITUDE: f32 = 0.002;

// Markers
pub const MARKER_RADIUS: f32 = 1.02; // just above the globe surface
pub const MARKER_SIZE: f32 = 0.06;

// Camera
pub const CAMERA_START: [f32; 3] = [0.0, 0.0, 2.6];
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Orbit controls
pub const ORBIT_MIN_DISTANCE: f32 = 1.2;
pub const ORBIT_MAX_DISTANCE: f32 = 8.0;
pub const ORBIT_ZOOM_SCALE: f32 = 0.95; // distance multiplier per wheel step
pub const ORBIT_POLAR_EPS: f32 = 1e-6;

// Auto-rotate speed while playing; 0 when paused
pub const AUTO_ROTATE_SPEED: f32 = 0.6;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.6;
pub const DIRECTIONAL_INTENSITY: f32 = 0.8;
pub const DIRECTIONAL_POSITION: [f32; 3] = [5.0, 3.0, 5.0];

// Splash
pub const SPLASH_DURATION: Duration = Duration::from_millis(4000);
pub const PARTICLE_COUNT: usize = 100;
pub const PARTICLE_SIZE_MIN_PX: f32 = 1.0;
pub const PARTICLE_SIZE_SPAN_PX: f32 = 3.0;
pub const PARTICLE_DELAY_MAX_SEC: f32 = 5.0;
