use leptos::prelude::*;

use super::icons::{ICON_MENU, ICON_X, Icon};
use super::layout::{Brand, GUTTER, LoginButton};
use crate::content::nav_links;
use crate::menu::MenuState;

/// Id of the collapsible mobile panel (target of `aria-controls`).
pub const MOBILE_NAV_ID: &str = "mobile-nav";

/// Fixed header: brand, desktop links and the mobile panel toggle.
#[component]
pub fn Nav(
    /// Initial panel state; the live page starts collapsed.
    #[prop(default = false)]
    open: bool,
) -> impl IntoView {
    let menu = RwSignal::new(MenuState::new(open));
    let is_open = move || menu.get().is_open();

    view! {
        <header class="fixed top-0 left-0 right-0 bg-white/90 backdrop-blur-md z-50 border-b border-gray-100">
            <div class=format!("w-full {GUTTER} h-20 flex items-center justify-between")>
                <Brand />

                <nav class="hidden md:flex items-center gap-8 font-bold text-gray-600">
                    {nav_links()
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="hover:text-gray-900 transition-colors"
                                    data-entry="nav-link"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <LoginButton class="flex items-center gap-2 bg-gray-900 text-white px-6 py-2.5 rounded-lg font-bold hover:bg-black transition-all" />
                </nav>

                <button
                    type="button"
                    class="md:hidden"
                    data-role="menu-toggle"
                    aria-controls=MOBILE_NAV_ID
                    aria-expanded=move || if is_open() { "true" } else { "false" }
                    aria-label=move || if is_open() { "關閉選單" } else { "開啟選單" }
                    on:click=move |_| menu.update(MenuState::toggle)
                >
                    {move || {
                        if is_open() {
                            view! { <Icon paths=ICON_X /> }.into_any()
                        } else {
                            view! { <Icon paths=ICON_MENU /> }.into_any()
                        }
                    }}
                </button>
            </div>

            // Not rendered at all while collapsed
            <Show when=is_open>
                <MobileNav menu=menu />
            </Show>
        </header>
    }
}

/// Vertical link panel under the header bar. Picking a link collapses it;
/// the document-level handler does the scrolling.
#[component]
fn MobileNav(menu: RwSignal<MenuState>) -> impl IntoView {
    view! {
        <nav
            id=MOBILE_NAV_ID
            class="md:hidden bg-white border-b border-gray-100 p-6 flex flex-col gap-4 font-bold"
        >
            {nav_links()
                .iter()
                .map(|link| {
                    view! {
                        <a
                            href=link.href
                            class="text-gray-600"
                            data-entry="mobile-nav-link"
                            on:click=move |_| menu.update(MenuState::close)
                        >
                            {link.label}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
            <LoginButton class="flex items-center justify-center gap-2 bg-gray-900 text-white px-6 py-3 rounded-lg font-bold" />
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn count(html: &str, entry: &str) -> usize {
        html.matches(&format!(r#"data-entry="{entry}""#)).count()
    }

    #[test]
    fn collapsed_header_has_no_panel() {
        let html = view! { <Nav /> }.to_html();

        assert_eq!(count(&html, "nav-link"), nav_links().len());
        assert_eq!(count(&html, "mobile-nav-link"), 0);
        assert!(!html.contains(r#"id="mobile-nav""#));
        assert!(html.contains(r#"aria-expanded="false""#));
    }

    #[test]
    fn open_header_renders_panel_links() {
        let html = view! { <Nav open=true /> }.to_html();

        assert_eq!(count(&html, "mobile-nav-link"), nav_links().len());
        assert!(html.contains(r#"id="mobile-nav""#));
        assert!(html.contains(r#"aria-expanded="true""#));
    }

    #[test]
    fn links_keep_declared_order() {
        let html = view! { <Nav /> }.to_html();
        let positions: Vec<usize> = nav_links()
            .iter()
            .map(|link| html.find(&format!(r#"href="{}""#, link.href)).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }
}
