//! Shared building blocks: section wrapper, image placeholder, brand.

use leptos::prelude::*;

use super::icons::{ICON_IMAGE, ICON_LOG_IN, Icon};
use crate::content::{BRAND_MARK, BRAND_NAME, LOGIN_LABEL};

/// Horizontal padding shared by every full-width block.
pub const GUTTER: &str = "px-6 md:px-12 lg:px-20";

/// Padded full-width `<section>`, optionally addressable by `id`.
#[component]
pub fn Section(
    #[prop(optional)] id: Option<&'static str>,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = format!("py-16 md:py-24 {GUTTER} {class}");
    view! {
        <section id=id class=class>
            <div class="w-full">{children()}</div>
        </section>
    }
}

/// Dashed box standing in for artwork that has not been produced yet.
#[component]
pub fn Placeholder(
    /// Height utility classes
    #[prop(default = "h-64")]
    height: &'static str,
    #[prop(default = "視覺/配圖")] label: &'static str,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let class = format!(
        "w-full {height} bg-gray-200/50 border-2 border-dashed border-gray-400 rounded \
         flex items-center justify-center text-gray-500 font-medium {class}"
    );
    view! {
        <div class=class data-placeholder=label>
            <div class="text-center px-4">
                <Icon paths=ICON_IMAGE class="w-8 h-8 mx-auto mb-2 opacity-30" />
                <span class="text-sm">{label}</span>
            </div>
        </div>
    }
}

/// Logo square plus brand name.
#[component]
pub fn Brand(#[prop(default = false)] compact: bool) -> impl IntoView {
    let (wrapper, mark) = if compact {
        (
            "flex items-center gap-2 font-black text-xl lg:text-2xl tracking-tighter",
            "w-6 h-6 bg-gray-900 rounded flex items-center justify-center text-white text-[10px]",
        )
    } else {
        (
            "flex items-center gap-2 font-black text-2xl tracking-tighter",
            "w-8 h-8 bg-gray-900 rounded flex items-center justify-center text-white text-xs",
        )
    };
    view! {
        <div class=wrapper>
            <div class=mark>{BRAND_MARK}</div>
            <span>{BRAND_NAME}</span>
        </div>
    }
}

/// Decorative login button. It has no handler.
#[component]
pub fn LoginButton(
    #[prop(default = LOGIN_LABEL)] label: &'static str,
    class: &'static str,
    #[prop(default = "w-4 h-4")] icon_class: &'static str,
) -> impl IntoView {
    view! {
        <button type="button" class=class>
            <Icon paths=ICON_LOG_IN class=icon_class />
            " "
            {label}
        </button>
    }
}
