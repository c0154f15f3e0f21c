use leptos::prelude::*;

use super::layout::Section;
use crate::content::{CurriculumModule, module_badge};

/// Core course modules as numbered cards.
#[component]
pub fn Modules(modules: &'static [CurriculumModule]) -> impl IntoView {
    view! {
        <Section id="modules" class="bg-gray-100">
            <div class="text-center mb-16">
                <h2 class="text-3xl md:text-4xl lg:text-5xl font-black mb-4">"課程核心架構"</h2>
                <p class="text-gray-500 text-lg lg:text-xl">"本課程涵蓋三個核心模組，帶領你完成基礎建設："</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-8 w-full">
                {modules
                    .iter()
                    .enumerate()
                    .map(|(idx, module)| {
                        view! {
                            <div
                                class="p-10 md:p-12 border border-gray-200 rounded-[2rem] bg-white shadow-sm hover:shadow-md transition-all group"
                                data-entry="module"
                            >
                                <div class="w-12 h-12 bg-gray-900 text-white rounded-xl flex items-center justify-center font-black mb-6 group-hover:scale-110 transition-transform">
                                    {module_badge(idx)}
                                </div>
                                <h3 class="text-xl font-black mb-4 leading-snug text-gray-900">{module.title}</h3>
                                <p class="text-gray-600 text-lg leading-relaxed">{module.description}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::curriculum_modules;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn one_card_per_module_in_order() {
        let html = view! { <Modules modules=curriculum_modules() /> }.to_html();

        assert_eq!(html.matches(r#"data-entry="module""#).count(), 3);
        let positions: Vec<usize> = curriculum_modules()
            .iter()
            .map(|m| html.find(m.title).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
        assert!(html.contains(r#"id="modules""#));
    }

    #[test]
    fn renders_custom_fixture() {
        const FIXTURE: &[CurriculumModule] = &[CurriculumModule {
            title: "Only module",
            description: "Just one",
        }];
        let html = view! { <Modules modules=FIXTURE /> }.to_html();

        assert_eq!(html.matches(r#"data-entry="module""#).count(), 1);
        assert!(html.contains("Only module"));
    }
}
