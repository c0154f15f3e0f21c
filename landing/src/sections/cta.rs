use leptos::prelude::*;

use super::icons::{ICON_ARROW_RIGHT, Icon};
use super::layout::Section;
use crate::content::CallToAction as Cta;

const PRIMARY_BUTTON: &str = "w-full py-5 px-8 bg-gray-900 text-white rounded-2xl font-black hover:bg-black transition-all text-xl lg:text-2xl flex items-center justify-center gap-2";
const OUTLINE_BUTTON: &str = "w-full py-5 px-8 border-2 border-gray-900 text-gray-900 bg-white rounded-2xl font-black hover:bg-gray-50 transition-all text-xl lg:text-2xl flex items-center justify-center gap-2";

/// "Next step" cards for existing members and newcomers.
#[component]
pub fn CallToAction(cards: &'static [Cta]) -> impl IntoView {
    view! {
        <Section class="bg-gray-100">
            <h2 class="text-4xl lg:text-5xl font-black text-center mb-16">"適合你的下一步"</h2>
            <div class="grid md:grid-cols-2 gap-10">
                {cards
                    .iter()
                    .map(|card| {
                        let button_class = if card.primary { PRIMARY_BUTTON } else { OUTLINE_BUTTON };
                        view! {
                            <div
                                class="bg-white p-12 lg:p-16 rounded-[3rem] border-2 border-transparent hover:border-gray-900 transition-all shadow-xl text-center space-y-10 group"
                                data-entry="cta"
                            >
                                <div class="space-y-4">
                                    <h3 class="text-2xl md:text-3xl font-black">{card.heading}</h3>
                                    <div class="h-1 w-12 bg-gray-200 mx-auto group-hover:w-24 transition-all duration-500"></div>
                                    <p class="text-lg md:text-xl text-gray-500 font-bold flex items-center justify-center gap-2">
                                        <Icon paths=ICON_ARROW_RIGHT class="w-5 h-5" />
                                        " "
                                        {card.tagline}
                                    </p>
                                </div>
                                // Sign-in/sign-up flows live outside this page
                                <button type="button" class=button_class>{card.button}</button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </Section>
    }
}
