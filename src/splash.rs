use crate::constants::*;
use crate::dom;
use crate::layout;
use globe_core::spawn_particles;
use web_sys as web;

/// Build the splash screen under `root` and scatter `particle_count` particles
/// over it. Runs once at mount.
pub fn mount(
    document: &web::Document,
    root: &web::Element,
    particle_count: usize,
) -> anyhow::Result<()> {
    let container = dom::append_element(document, root, "div", Some(SPLASH_ID), "container")?;
    container.set_inner_html(&layout::splash_markup(
        BRAND_LEFT,
        BRAND_RIGHT,
        BRAND_REVEAL,
        TAGLINE,
        PARTICLES_ID,
    ));
    spawn_into(document, particle_count);
    Ok(())
}

fn spawn_into(document: &web::Document, particle_count: usize) {
    let Some(container) = document.get_element_by_id(PARTICLES_ID) else {
        log::warn!("[splash] #{} missing, no particles", PARTICLES_ID);
        return;
    };
    let mut rng = rand::thread_rng();
    let particles = spawn_particles(&mut rng, particle_count);
    let mut spawned = 0usize;
    for p in &particles {
        match dom::append_element(document, &container, "div", None, "particle") {
            Ok(el) => {
                _ = el.set_attribute("style", &p.css());
                spawned += 1;
            }
            Err(e) => log::warn!("[splash] particle: {:?}", e),
        }
    }
    log::info!("[splash] spawned {} particles", spawned);
}

pub fn unmount(document: &web::Document) {
    dom::remove_by_id(document, SPLASH_ID);
}
