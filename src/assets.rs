use crate::render::GpuState;
use globe_core::{
    decode_rgba, AssetError, DecodedImage, IconPlan, GLOBE_FALLBACK_RGBA, GLOBE_TEXTURE_PATH,
    ICON_FALLBACK_RGBA,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, AssetError> {
    let fetch_err = |e: wasm_bindgen::JsValue| AssetError::Fetch {
        url: url.to_string(),
        reason: format!("{:?}", e),
    };
    let window = web::window().ok_or_else(|| AssetError::Fetch {
        url: url.to_string(),
        reason: "no window".to_string(),
    })?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(fetch_err)?
        .dyn_into()
        .map_err(fetch_err)?;
    if !resp.ok() {
        return Err(AssetError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(fetch_err)?)
        .await
        .map_err(fetch_err)?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch and decode one image, degrading to a solid colour on any failure.
pub async fn load_or_fallback(url: &str, fallback: [u8; 4]) -> DecodedImage {
    let result = match fetch_bytes(url).await {
        Ok(bytes) => decode_rgba(url, &bytes),
        Err(e) => Err(e),
    };
    match result {
        Ok(img) => {
            log::info!("[assets] {} {}x{}", url, img.width, img.height);
            img
        }
        Err(e) => {
            log::warn!("[assets] {}; using fallback", e);
            DecodedImage::solid(fallback)
        }
    }
}

/// Load the globe texture and every planned icon once, handing each to the
/// renderer as it arrives.
pub async fn load_scene_textures(gpu: Rc<RefCell<Option<GpuState<'static>>>>, plan: IconPlan) {
    let globe = load_or_fallback(GLOBE_TEXTURE_PATH, GLOBE_FALLBACK_RGBA).await;
    if let Some(g) = gpu.borrow_mut().as_mut() {
        g.set_globe_texture(&globe);
    }
    for (slot, path) in plan.paths.iter().enumerate() {
        let icon = load_or_fallback(path, ICON_FALLBACK_RGBA).await;
        if let Some(g) = gpu.borrow_mut().as_mut() {
            g.set_icon_texture(slot, &icon);
        }
    }
}
