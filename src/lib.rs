#![cfg(target_arch = "wasm32")]
use globe_core::{SplashParams, SplashTransition};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod layout;
mod overlay;
mod render;
mod splash;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("franchise-globe starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    // a second start() (hot reload, double script tag) must not mount twice
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = document
        .get_element_by_id(constants::APP_ROOT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::APP_ROOT_ID))?;

    let params = SplashParams::default();
    splash::mount(&document, &root, params.particle_count)?;

    // Splash timer and globe renderer share one requestAnimationFrame loop
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        document,
        root,
        SplashTransition::new(params.duration),
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
