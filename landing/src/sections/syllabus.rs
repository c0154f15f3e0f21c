use leptos::prelude::*;

use super::icons::{ICON_CHEVRON_RIGHT, Icon};
use super::layout::{Placeholder, Section};
use crate::content::{DEADLINE, SyllabusSection};

/// Column order classes `(text, image)` for the syllabus block at `idx`.
///
/// Even blocks put the text on the left, odd blocks on the right.
pub fn syllabus_column_order(idx: usize) -> (&'static str, &'static str) {
    if idx % 2 == 0 {
        ("md:order-1", "md:order-2")
    } else {
        ("md:order-2", "md:order-1")
    }
}

/// Full syllabus: one block per chapter, alternating sides.
#[component]
pub fn Syllabus(sections: &'static [SyllabusSection]) -> impl IntoView {
    view! {
        <Section id="syllabus" class="bg-white">
            <div class="text-center mb-20">
                <h2 class="text-4xl lg:text-5xl font-black mb-6">"完整課綱"</h2>
                <p class="text-gray-600 text-lg lg:text-xl w-full leading-relaxed">
                    "本課程依照實際網站經營流程設計，從「可被搜尋」的基本條件開始，逐步建立必要的 SEO 結構與觀念。"
                </p>
            </div>

            <div class="space-y-24">
                {sections
                    .iter()
                    .enumerate()
                    .map(|(idx, section)| view! { <SyllabusBlock idx=idx section=*section /> })
                    .collect::<Vec<_>>()}
            </div>

            <div class="mt-32 p-12 md:p-20 bg-gray-50 border-2 border-gray-900 rounded-[3rem] text-center">
                <p class="text-2xl md:text-3xl lg:text-4xl font-black text-gray-900 leading-relaxed">
                    "課程內容將分段上線，最晚於 "
                    <span class="underline decoration-[6px] decoration-yellow-300 underline-offset-4">{DEADLINE}</span>
                    " 完成。"
                </p>
            </div>
        </Section>
    }
}

#[component]
fn SyllabusBlock(idx: usize, section: SyllabusSection) -> impl IntoView {
    let (text_order, image_order) = syllabus_column_order(idx);

    view! {
        <div class="grid md:grid-cols-2 gap-16 lg:gap-24 items-start" data-entry="syllabus-section">
            <div class=text_order>
                <h3 class="text-2xl md:text-3xl font-black mb-4 border-b-8 border-gray-900/5 pb-2 inline-block">
                    {section.title}
                </h3>
                <p class="text-gray-500 font-bold mb-8 text-lg lg:text-xl">{section.intro}</p>
                <ul class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                    {section
                        .items
                        .iter()
                        .map(|item| {
                            view! {
                                <li
                                    class="flex items-center gap-3 text-gray-800 bg-gray-50 p-3 rounded-lg border border-transparent hover:border-gray-200 transition-colors"
                                    data-entry="syllabus-item"
                                >
                                    <Icon paths=ICON_CHEVRON_RIGHT class="w-4 h-4 text-gray-400 flex-shrink-0" />
                                    <span class="font-bold">{*item}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
            <div class=image_order>
                <Placeholder height="h-80 md:h-[400px]" label="對應章節視覺" class="rounded-3xl bg-gray-100" />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::syllabus;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn columns_alternate_by_parity() {
        assert_eq!(syllabus_column_order(0), ("md:order-1", "md:order-2"));
        assert_eq!(syllabus_column_order(1), ("md:order-2", "md:order-1"));
        assert_eq!(syllabus_column_order(4), syllabus_column_order(0));
    }

    #[test]
    fn one_block_per_section_and_one_row_per_item() {
        let html = view! { <Syllabus sections=syllabus() /> }.to_html();

        let items: usize = syllabus().iter().map(|s| s.items.len()).sum();
        assert_eq!(html.matches(r#"data-entry="syllabus-section""#).count(), 5);
        assert_eq!(html.matches(r#"data-entry="syllabus-item""#).count(), items);
        assert!(html.contains(DEADLINE));
    }

    #[test]
    fn sections_render_in_declared_order() {
        let html = view! { <Syllabus sections=syllabus() /> }.to_html();
        let positions: Vec<usize> = syllabus()
            .iter()
            .map(|s| html.find(s.title).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn small_fixture() {
        const FIXTURE: &[SyllabusSection] = &[
            SyllabusSection { title: "A", intro: "a", items: &["a1", "a2"] },
            SyllabusSection { title: "B", intro: "b", items: &[] },
        ];
        let html = view! { <Syllabus sections=FIXTURE /> }.to_html();

        assert_eq!(html.matches(r#"data-entry="syllabus-section""#).count(), 2);
        assert_eq!(html.matches(r#"data-entry="syllabus-item""#).count(), 2);
    }
}
