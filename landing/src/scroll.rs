//! Anchor scrolling with a fixed header offset.
//!
//! The arithmetic and the "missing target is a no-op" rule live here,
//! independent of the DOM. [`crate::smooth_scroll`] plugs the browser in
//! through [`ScrollSurface`].

use crate::config::{LandingConfig, ScrollMode};

/// The parts of a page that anchor scrolling needs.
pub trait ScrollSurface {
    /// Viewport-relative top of the element with this id, if it exists.
    fn target_top(&self, id: &str) -> Option<f64>;

    /// Viewport-relative top of the document body.
    fn body_top(&self) -> f64;

    fn scroll_to(&self, top: f64, mode: ScrollMode);
}

/// The id named by a same-page link, e.g. `"#intro"` -> `"intro"`.
///
/// A bare `#` names nothing.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts an element just below the fixed header.
///
/// `element_top - body_top` is the element's position in the document.
pub fn destination(element_top: f64, body_top: f64, offset: f64) -> f64 {
    (element_top - body_top) - offset
}

/// Scroll `surface` to the element named by `href`.
///
/// Returns the destination, or `None` when `href` is not a fragment link
/// or no element carries that id. In that case the surface is left alone.
pub fn scroll_to_fragment<S: ScrollSurface + ?Sized>(
    surface: &S,
    href: &str,
    config: &LandingConfig,
) -> Option<f64> {
    let id = fragment_id(href)?;
    let Some(element_top) = surface.target_top(id) else {
        tracing::debug!(target_id = id, "anchor target not found");
        return None;
    };
    let top = destination(element_top, surface.body_top(), config.header_offset);
    surface.scroll_to(top, config.scroll_behavior);
    Some(top)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// A page whose elements sit at fixed document positions.
    struct FakePage {
        positions: HashMap<&'static str, f64>,
        scroll_y: RefCell<f64>,
        calls: RefCell<Vec<(f64, ScrollMode)>>,
    }

    impl FakePage {
        fn new(positions: &[(&'static str, f64)], scroll_y: f64) -> Self {
            Self {
                positions: positions.iter().copied().collect(),
                scroll_y: RefCell::new(scroll_y),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ScrollSurface for FakePage {
        fn target_top(&self, id: &str) -> Option<f64> {
            let y = *self.scroll_y.borrow();
            self.positions.get(id).map(|pos| pos - y)
        }

        fn body_top(&self) -> f64 {
            -*self.scroll_y.borrow()
        }

        fn scroll_to(&self, top: f64, mode: ScrollMode) {
            self.calls.borrow_mut().push((top, mode));
            *self.scroll_y.borrow_mut() = top;
        }
    }

    #[test]
    fn fragment_ids() {
        assert_eq!(fragment_id("#intro"), Some("intro"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("intro"), None);
        assert_eq!(fragment_id("https://example.com/#intro"), None);
    }

    #[test]
    fn destination_subtracts_offset() {
        assert_eq!(destination(1200.0, 0.0, 80.0), 1120.0);
        // Already scrolled 500px: element is 700px below the viewport top.
        assert_eq!(destination(700.0, -500.0, 80.0), 1120.0);
    }

    #[test]
    fn scrolls_to_position_minus_header() {
        let page = FakePage::new(&[("syllabus", 1200.0)], 0.0);
        let top = scroll_to_fragment(&page, "#syllabus", &LandingConfig::default());

        assert_eq!(top, Some(1120.0));
        assert_eq!(*page.calls.borrow(), vec![(1120.0, ScrollMode::Smooth)]);
    }

    #[test]
    fn independent_of_current_scroll() {
        let page = FakePage::new(&[("modules", 2400.0)], 900.0);
        let config = LandingConfig {
            header_offset: 64.0,
            scroll_behavior: ScrollMode::Instant,
        };
        assert_eq!(scroll_to_fragment(&page, "#modules", &config), Some(2336.0));
        assert_eq!(*page.scroll_y.borrow(), 2336.0);
    }

    #[test]
    fn missing_target_is_a_no_op() {
        let page = FakePage::new(&[("intro", 600.0)], 340.0);
        assert_eq!(scroll_to_fragment(&page, "#pricing", &LandingConfig::default()), None);
        assert_eq!(*page.scroll_y.borrow(), 340.0);
        assert!(page.calls.borrow().is_empty());
    }

    #[test]
    fn bare_hash_is_a_no_op() {
        let page = FakePage::new(&[("intro", 600.0)], 0.0);
        assert_eq!(scroll_to_fragment(&page, "#", &LandingConfig::default()), None);
        assert!(page.calls.borrow().is_empty());
    }
}
