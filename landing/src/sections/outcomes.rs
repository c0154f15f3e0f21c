use leptos::prelude::*;

use super::icons::{ICON_CHECK_CIRCLE, Icon};
use super::layout::Section;

/// What a student walks away with: one card per outcome, then a banner.
#[component]
pub fn Outcomes(outcomes: &'static [&'static str]) -> impl IntoView {
    view! {
        <Section>
            <div class="w-full">
                <h2 class="text-3xl md:text-4xl lg:text-5xl font-black text-center mb-16">
                    "完成課程後，你一定會具備"
                </h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8 mb-16">
                    {outcomes
                        .iter()
                        .map(|item| {
                            view! {
                                <div
                                    class="flex items-start gap-4 p-6 bg-white border border-gray-200 rounded-2xl shadow-sm"
                                    data-entry="outcome"
                                >
                                    <Icon paths=ICON_CHECK_CIRCLE class="w-6 h-6 text-gray-900 mt-0.5 flex-shrink-0" />
                                    <span class="text-lg font-bold text-gray-800 leading-tight">{*item}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="text-center p-8 md:p-12 bg-gray-900 text-white rounded-[3rem]">
                    <p class="text-xl md:text-2xl lg:text-3xl font-black leading-tight">
                        "你的網站不再只是漂漂亮亮的靜態展示，"
                        <br class="hidden md:block" />
                        "還要能被你的讀者、客戶搜尋得到！"
                    </p>
                </div>
            </div>
        </Section>
    }
}
