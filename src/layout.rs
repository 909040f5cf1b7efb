// Pure string and timing helpers shared by the DOM code; kept free of web-sys
// so host tests can include this file directly.

/// Inline style for a marker's name label. The label is centred on `(x, y)`
/// in CSS pixels relative to the canvas.
pub fn label_css(x: f32, y: f32, visible: bool) -> String {
    if visible {
        format!(
            "position: absolute; left: {:.1}px; top: {:.1}px; transform: translate(-50%, -50%);",
            x, y
        )
    } else {
        "display: none;".to_string()
    }
}

/// Seconds between two frame timestamps, clamped to `[0, max]`.
#[inline]
pub fn clamp_frame_dt(dt_sec: f32, max_sec: f32) -> f32 {
    if dt_sec.is_finite() {
        dt_sec.clamp(0.0, max_sec)
    } else {
        0.0
    }
}

/// Markup for the splash screen; particles are appended into the
/// `particles_id` element afterwards.
pub fn splash_markup(left: &str, right: &str, reveal: &str, tagline: &str, particles_id: &str) -> String {
    format!(
        concat!(
            "<div class=\"text-container\">",
            "<div class=\"text-half left-half\">{}</div>",
            "<div class=\"text-half right-half\">{}</div>",
            "</div>",
            "<div class=\"reveal-text\">{}</div>",
            "<div class=\"particles\" id=\"{}\"></div>",
            "<div class=\"loading-bar\"><div class=\"loading-progress\"></div></div>",
            "<div class=\"tagline\">{}</div>"
        ),
        left, right, reveal, particles_id, tagline
    )
}
