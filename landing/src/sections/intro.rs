use leptos::prelude::*;

use super::layout::Section;

#[component]
pub fn Intro() -> impl IntoView {
    view! {
        <Section id="intro" class="bg-white border-b border-gray-100">
            <div class="space-y-10 text-lg md:text-xl text-gray-800 leading-relaxed text-center w-full">
                <p>"秒站協助你快速完成網站建置，但「架好站」只是開始。"</p>
                <div class="space-y-6">
                    <p>"這堂課幫助你掌握網站成長的關鍵："</p>
                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-black text-gray-900 bg-yellow-100 inline-block px-6 py-3 rounded-lg rotate-[-1deg]">
                        "透過 SEO 經營，讓你的網站能被別人看到！"
                    </h2>
                </div>
                <div class="pt-6 space-y-4">
                    <p>"SEO 的教學很多，你當然可以選擇自行探索，但這樣太慢了！"</p>
                    <p class="font-bold text-2xl md:text-3xl text-gray-900">
                        "既然都秒速架站了，更要讓專家直接帶你飛，讓網站真正成為你的事業助力"
                    </p>
                </div>
            </div>
        </Section>
    }
}
