use leptos::prelude::*;

use super::layout::{Brand, GUTTER};
use crate::content::{COPYRIGHT, footer_links};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-16 bg-white text-center border-t border-gray-100">
            <div class=format!("w-full {GUTTER} flex flex-col md:flex-row justify-between items-center gap-8")>
                <Brand compact=true />
                <p class="text-gray-400 text-sm md:text-base font-bold">{COPYRIGHT}</p>
                <div class="flex gap-8 text-sm md:text-base font-bold text-gray-400">
                    {footer_links()
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href class="hover:text-gray-900 transition-colors">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </footer>
    }
}
