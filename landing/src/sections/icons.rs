//! Inline SVG icons (Lucide, 24x24 stroke set).
//!
//! Each icon is a list of path `d` strings drawn with the same stroke.

use leptos::prelude::*;

/// Renders a stroked 24x24 icon from its path data.
#[component]
pub fn Icon(
    /// Path data, one entry per `<path>`
    paths: &'static [&'static str],
    /// Size and color classes
    #[prop(default = "w-6 h-6")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {paths.iter().map(|d| view! { <path d=*d></path> }).collect::<Vec<_>>()}
        </svg>
    }
}

pub const ICON_MENU: &[&str] = &["M4 12h16", "M4 6h16", "M4 18h16"];

pub const ICON_X: &[&str] = &["M18 6 6 18", "m6 6 12 12"];

pub const ICON_LOG_IN: &[&str] = &[
    "M15 3h4a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2h-4",
    "m10 17 5-5-5-5",
    "M15 12H3",
];

pub const ICON_CHECK_CIRCLE: &[&str] = &[
    "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
    "m9 12 2 2 4-4",
];

pub const ICON_ARROW_RIGHT: &[&str] = &["M5 12h14", "m12 5 7 7-7 7"];

pub const ICON_CHEVRON_RIGHT: &[&str] = &["m9 18 6-6-6-6"];

pub const ICON_IMAGE: &[&str] = &[
    "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
    "M9 7a2 2 0 1 0 0 4a2 2 0 1 0 0-4z",
    "m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21",
];
