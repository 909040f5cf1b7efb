use glam::Vec2;
use web_sys as web;

/// Last pointer position in CSS pixels and whether a drag is in progress.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
}

impl MouseState {
    /// Record a new position and return the movement since the last one.
    pub fn move_to(&mut self, pos: Vec2) -> Vec2 {
        let delta = Vec2::new(pos.x - self.x, pos.y - self.y);
        self.x = pos.x;
        self.y = pos.y;
        delta
    }
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_css_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

/// Canvas size in CSS pixels (what labels and drag speed are measured in).
#[inline]
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(rect.width() as f32, rect.height() as f32)
}

/// Normalise wheel deltas to a direction; line and page modes report tiny
/// values and pixel mode huge ones, orbit zoom only cares about the sign.
#[inline]
pub fn wheel_direction(delta_y: f64) -> f32 {
    if delta_y > 0.0 {
        1.0
    } else if delta_y < 0.0 {
        -1.0
    } else {
        0.0
    }
}
