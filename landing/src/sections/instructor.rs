use leptos::prelude::*;

use super::layout::{Placeholder, Section};

const PITCH: &[&str] = &[
    "由台灣 SEO 線上課程熱門講師暨秒站執行長 Frank 親自規劃",
    "不同於過去在各大課程平台的通用 SEO 課程",
    "這堂專為秒站所設計的 AI SEO 速攻學",
    "讓你能直接對照後台，一步步建立網站 SEO 基礎",
    "就算是網站經營新手，也不怕走偏！",
];

#[component]
pub fn Instructor() -> impl IntoView {
    view! {
        <Section id="instructor" class="bg-gray-50">
            <div class="space-y-12">
                <div class="space-y-4 text-center">
                    <h2 class="text-4xl lg:text-5xl font-black leading-tight">
                        "開站後的下一個拼圖——"
                        <br />
                        "專為秒站設計的 AI SEO 速攻學"
                    </h2>
                    <p class="text-xl text-gray-600 font-medium">
                        "AI 時代下的SEO經營策略 + 秒站後台實際演示，讓你能開完站後馬上接手做"
                    </p>
                </div>

                <div class="p-10 md:p-16 lg:p-24 bg-white border-2 border-gray-200 rounded-[3rem] shadow-sm">
                    <div class="grid md:grid-cols-5 gap-12 items-center">
                        <div class="md:col-span-2">
                            <Placeholder height="h-96 md:h-[500px]" label="講師形象照片" class="rounded-2xl" />
                        </div>
                        <div class="md:col-span-3 space-y-8">
                            <div class="space-y-4 text-lg md:text-xl lg:text-2xl text-gray-700 leading-relaxed font-medium">
                                {PITCH.iter().map(|line| view! { <p>{*line}</p> }).collect::<Vec<_>>()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </Section>
    }
}
