// AI SEO course landing page, Leptos 0.8 edition
// Developed by the Miaozhan Web Team (c)2026

use course_landing::App;
use course_landing::config::LandingConfig;
use course_landing::{logging, smooth_scroll};

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let config = web_sys::window()
        .and_then(|window| window.document())
        .map(|document| LandingConfig::load_from_document(&document))
        .unwrap_or_default();

    // Delegated on the document, so anchors mounted later are covered too
    if let Err(e) = smooth_scroll::install(config) {
        tracing::error!(error = %e, "smooth scroll disabled");
    }

    leptos::mount::mount_to_body(App);
}
