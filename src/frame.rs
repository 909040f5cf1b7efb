use crate::assets;
use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom;
use crate::events;
use crate::input;
use crate::layout;
use crate::overlay;
use crate::render;
use crate::splash;
use globe_core::{GlobeParams, GlobeScene, IconPlan, Screen, SplashTransition, FRANCHISES};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// The live globe view, created once when the splash ends.
pub struct GlobeView {
    pub scene: Rc<RefCell<GlobeScene>>,
    pub dom: overlay::GlobeDom,
    pub gpu: Rc<RefCell<Option<render::GpuState<'static>>>>,
}

impl GlobeView {
    fn mount(document: &web::Document, root: &web::Element) -> anyhow::Result<Self> {
        let scene = Rc::new(RefCell::new(GlobeScene::new(
            FRANCHISES,
            GlobeParams::default(),
        )));
        let label = scene.borrow().playback.button_label();
        let dom = overlay::mount(document, root, FRANCHISES, label)?;
        dom::wire_canvas_resize(&dom.canvas);

        events::wire_input_handlers(events::InputWiring {
            canvas: dom.canvas.clone(),
            scene: scene.clone(),
            mouse_state: Rc::new(RefCell::new(input::MouseState::default())),
        });
        events::wire_playback_toggle(document, dom.toggle.clone(), scene.clone());

        // GPU and textures come up asynchronously; frames before that only
        // move the scene and the labels.
        let gpu: Rc<RefCell<Option<render::GpuState<'static>>>> = Rc::new(RefCell::new(None));
        let plan = IconPlan::for_markers(FRANCHISES);
        let gpu_init = gpu.clone();
        let canvas = dom.canvas.clone();
        spawn_local(async move {
            let Some(state) = init_gpu(&canvas, &plan).await else {
                return;
            };
            *gpu_init.borrow_mut() = Some(state);
            assets::load_scene_textures(gpu_init, plan).await;
        });

        Ok(Self { scene, dom, gpu })
    }

    fn frame(&mut self, dt_sec: f32) {
        let w = self.dom.canvas.width();
        let h = self.dom.canvas.height();
        let css = input::canvas_css_size(&self.dom.canvas);

        let mut scene = self.scene.borrow_mut();
        scene.set_aspect(w, h);
        scene.advance(dt_sec);
        overlay::place_labels(&self.dom.labels, &scene.labels(css.x, css.y));

        if let Some(g) = self.gpu.borrow_mut().as_mut() {
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&scene) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub struct FrameContext {
    pub document: web::Document,
    pub root: web::Element,
    pub transition: SplashTransition,
    pub globe: Option<GlobeView>,
    pub last_instant: Instant,
    pub ticks: u64,
}

impl FrameContext {
    pub fn new(document: web::Document, root: web::Element, transition: SplashTransition) -> Self {
        Self {
            document,
            root,
            transition,
            globe: None,
            last_instant: Instant::now(),
            ticks: 0,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = layout::clamp_frame_dt((now - self.last_instant).as_secs_f32(), MAX_FRAME_DT_SEC);
        self.last_instant = now;

        // rAF runs before paint; the second callback is the first one that
        // follows a painted frame
        if self.ticks >= 1 {
            self.transition.mark_first_paint(now);
        }
        self.ticks += 1;

        if let Some(Screen::Globe) = self.transition.poll(now) {
            self.enter_globe();
        }
        if let Some(view) = &mut self.globe {
            view.frame(dt_sec);
        }
    }

    fn enter_globe(&mut self) {
        splash::unmount(&self.document);
        match GlobeView::mount(&self.document, &self.root) {
            Ok(view) => self.globe = Some(view),
            Err(e) => log::error!("globe view error: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    plan: &IconPlan,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, &plan.slots, plan.paths.len()).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
