use leptos::prelude::*;

use super::layout::{GUTTER, LoginButton, Placeholder};
use crate::content::{COURSE_TAGLINE, COURSE_TITLE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-[80vh] flex items-center pt-20 overflow-hidden">
            // Flat backdrop until the cover image exists
            <div class="absolute inset-0 z-0">
                <div class="w-full h-full bg-slate-200 flex items-center justify-center">
                    <div class="absolute inset-0 wireframe-pattern opacity-50"></div>
                </div>
                <div class="absolute inset-0 bg-gradient-to-r from-white/95 via-white/80 to-transparent z-10"></div>
            </div>

            <div class=format!("relative z-20 w-full {GUTTER} grid md:grid-cols-2 gap-12 items-center")>
                <div class="text-left space-y-8 py-12">
                    <div class="space-y-4">
                        <h1 class="text-5xl md:text-7xl lg:text-8xl font-black text-gray-900 leading-[1.1] tracking-tight whitespace-nowrap">
                            {COURSE_TITLE}
                        </h1>
                        <p class="text-2xl lg:text-3xl text-gray-600 font-medium">{COURSE_TAGLINE}</p>
                    </div>

                    <div class="p-8 border-2 border-gray-900 rounded-3xl bg-white/90 backdrop-blur shadow-xl max-w-md">
                        <h3 class="text-lg font-bold mb-4">"您是秒站會員嗎？登入免費上課"</h3>
                        <LoginButton
                            label="會員登入"
                            icon_class="w-5 h-5"
                            class="flex items-center justify-center gap-2 bg-gray-900 text-white px-8 py-4 rounded-xl font-bold hover:bg-black transition-all text-lg w-full"
                        />
                    </div>
                </div>

                <div class="hidden md:block">
                    <Placeholder
                        height="h-[600px] lg:h-[700px]"
                        label="講師人像圖 / 課程情境圖"
                        class="shadow-2xl border-none bg-white/20 backdrop-blur-sm"
                    />
                </div>
            </div>
        </section>
    }
}
