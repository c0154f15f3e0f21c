//! Delegated smooth scrolling for same-page links.
//!
//! One `click` listener on the document handles every `a[href^="#"]`,
//! including anchors mounted later (the mobile panel). Targets are looked
//! up by id at click time, so nothing points at removed elements.

use std::cell::Cell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, MouseEvent, Node, ScrollBehavior, ScrollToOptions, Window};

use crate::config::{LandingConfig, ScrollMode};
use crate::error::{LandingError, Result};
use crate::scroll::{ScrollSurface, scroll_to_fragment};

/// Selector for links that should scroll instead of jumping.
pub const FRAGMENT_LINK_SELECTOR: &str = r##"a[href^="#"]"##;

thread_local! {
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// The live browser page.
pub struct BrowserSurface {
    window: Window,
    document: Document,
}

impl BrowserSurface {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or(LandingError::NoWindow)?;
        let document = window.document().ok_or(LandingError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl ScrollSurface for BrowserSurface {
    fn target_top(&self, id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(id)
            .map(|el| el.get_bounding_client_rect().top())
    }

    fn body_top(&self) -> f64 {
        self.document
            .body()
            .map(|body| body.get_bounding_client_rect().top())
            .unwrap_or(0.0)
    }

    fn scroll_to(&self, top: f64, mode: ScrollMode) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(match mode {
            ScrollMode::Smooth => ScrollBehavior::Smooth,
            ScrollMode::Instant => ScrollBehavior::Instant,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Attach the document-level click handler. Later calls are no-ops.
pub fn install(config: LandingConfig) -> Result<()> {
    if INSTALLED.with(Cell::get) {
        tracing::debug!("smooth scroll already installed");
        return Ok(());
    }

    let surface = BrowserSurface::new()?;
    let document = surface.document().clone();

    let closure = Closure::wrap(Box::new(move |event: Event| {
        handle_click(&surface, &event, &config);
    }) as Box<dyn FnMut(_)>);

    document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget(); // Lives as long as the page

    INSTALLED.with(|installed| installed.set(true));
    tracing::info!(
        header_offset = config.header_offset,
        mode = ?config.scroll_behavior,
        "smooth scroll installed"
    );
    Ok(())
}

/// Handle one document click. Returns the scroll destination if the
/// click resolved to an existing target.
pub fn handle_click(surface: &BrowserSurface, event: &Event, config: &LandingConfig) -> Option<f64> {
    if event.default_prevented() || is_modified_click(event) {
        return None;
    }

    let anchor = fragment_anchor(event)?;
    let href = anchor.get_attribute("href")?;

    // No instant jump, even when the target does not exist.
    event.prevent_default();
    scroll_to_fragment(surface, &href, config)
}

/// Ctrl/Cmd/Shift/Alt or non-primary clicks keep their browser meaning.
fn is_modified_click(event: &Event) -> bool {
    event.dyn_ref::<MouseEvent>().is_some_and(|mouse| {
        mouse.button() != 0
            || mouse.ctrl_key()
            || mouse.meta_key()
            || mouse.shift_key()
            || mouse.alt_key()
    })
}

/// Nearest fragment link enclosing the click target.
fn fragment_anchor(event: &Event) -> Option<Element> {
    let target = event.target()?;
    let element = match target.dyn_into::<Element>() {
        Ok(element) => element,
        Err(other) => other.dyn_into::<Node>().ok()?.parent_element()?,
    };
    element.closest(FRAGMENT_LINK_SELECTOR).ok().flatten()
}
