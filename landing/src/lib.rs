//! # course-landing
//!
//! Sales page for the "AI SEO 速攻學" course, written with
//! [Leptos](https://leptos.dev/) 0.8.
//!
//! The page is a fixed stack of presentational sections. Two things move:
//!
//! - the header's mobile panel, which is mounted only while open
//!   ([`menu::MenuState`]);
//! - same-page links, which scroll smoothly and stop short of the fixed
//!   header ([`scroll`] for the arithmetic, [`smooth_scroll`] for the
//!   single document-level click handler).
//!
//! In the browser `main.rs` mounts [`App`]. With the `ssr` feature,
//! `render_page` renders the same tree to static HTML:
//!
//! ```rust,ignore
//! let html = course_landing::render_page();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod menu;
pub mod scroll;
pub mod sections;
pub mod smooth_scroll;

use leptos::prelude::*;
#[cfg(any(feature = "ssr", test))]
use leptos::tachys::view::RenderHtml;

use content::{calls_to_action, curriculum_modules, outcomes, syllabus};
use sections::*;

/// The whole page, top to bottom.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-white selection:bg-gray-900 selection:text-white">
            <Nav />
            <Hero />
            <Intro />
            <Instructor />
            <Outcomes outcomes=outcomes() />
            <Modules modules=curriculum_modules() />
            <Syllabus sections=syllabus() />
            <CallToAction cards=calls_to_action() />
            <Footer />
        </div>
    }
}

/// Render [`App`] to an HTML string, for prerendering and inspection.
///
/// Needs the `ssr` feature.
#[cfg(any(feature = "ssr", test))]
pub fn render_page() -> String {
    let html = view! { <App /> }.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{SECTION_IDS, nav_links};
    use crate::sections::MOBILE_NAV_ID;

    fn count(html: &str, entry: &str) -> usize {
        html.matches(&format!(r#"data-entry="{entry}""#)).count()
    }

    #[test]
    fn renders_document() {
        let html = render_page();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(content::COURSE_TITLE));
        assert!(html.contains(content::COPYRIGHT));
    }

    #[test]
    fn every_list_renders_once_per_item() {
        let html = render_page();

        assert_eq!(count(&html, "nav-link"), nav_links().len());
        assert_eq!(count(&html, "outcome"), outcomes().len());
        assert_eq!(count(&html, "module"), curriculum_modules().len());
        assert_eq!(count(&html, "syllabus-section"), syllabus().len());
        assert_eq!(count(&html, "cta"), calls_to_action().len());
    }

    #[test]
    fn mobile_panel_is_absent_on_first_render() {
        let html = render_page();

        assert_eq!(count(&html, "mobile-nav-link"), 0);
        assert!(!html.contains(&format!(r#"id="{MOBILE_NAV_ID}""#)));
    }

    #[test]
    fn anchor_targets_exist_once_in_page_order() {
        let html = render_page();

        let mut last = 0;
        for id in SECTION_IDS {
            let needle = format!(r#"id="{id}""#);
            assert_eq!(html.matches(&needle).count(), 1, "section #{id}");
            let pos = html.find(&needle).unwrap();
            assert!(pos > last, "#{id} out of order");
            last = pos;
        }
    }
}
