use crate::constants::*;
use crate::dom;
use crate::layout;
use globe_core::{LabelPlacement, Marker};
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM pieces of the globe view that are not drawn by WebGPU.
pub struct GlobeDom {
    pub canvas: web::HtmlCanvasElement,
    pub labels: Vec<web::Element>,
    pub toggle: web::Element,
}

/// Create the canvas, one name label per marker and the play/pause button.
pub fn mount(
    document: &web::Document,
    root: &web::Element,
    markers: &[Marker],
    button_label: &str,
) -> anyhow::Result<GlobeDom> {
    let view = dom::append_element(document, root, "div", Some(GLOBE_VIEW_ID), "globe-view")?;
    let canvas: web::HtmlCanvasElement = dom::append_element(document, &view, "canvas", Some(CANVAS_ID), "")?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let layer = dom::append_element(document, &view, "div", Some(LABELS_ID), "marker-labels")?;
    let mut labels = Vec::with_capacity(markers.len());
    for m in markers {
        let el = dom::append_element(document, &layer, "div", None, "marker-label")?;
        el.set_text_content(Some(m.name));
        _ = el.set_attribute("style", &layout::label_css(0.0, 0.0, false));
        labels.push(el);
    }

    let controls = dom::append_element(document, &view, "div", None, "controls")?;
    let toggle = dom::append_element(document, &controls, "button", Some(TOGGLE_ID), "toggle")?;
    toggle.set_text_content(Some(button_label));

    Ok(GlobeDom {
        canvas,
        labels,
        toggle,
    })
}

/// Move each label to its marker; labels for markers behind the globe hide.
pub fn place_labels(labels: &[web::Element], placements: &[LabelPlacement]) {
    for (el, p) in labels.iter().zip(placements) {
        _ = el.set_attribute("style", &layout::label_css(p.px.x, p.px.y, p.visible));
    }
}

#[inline]
pub fn set_button_label(toggle: &web::Element, label: &str) {
    toggle.set_text_content(Some(label));
}
