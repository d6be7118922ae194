use leptos::{html, prelude::*};
use leptos_use::use_window_size;

use crate::{
    motion::{parallax_offset, HERO_STAGGER_MS, HERO_TEXT},
    view_state::{Section, ViewEvent},
};

use super::{
    controller::{dispatch, observe_section, use_view_state},
    doodles::DoodleCircle,
    reveal::RevealOnScroll,
    SITE_OWNER,
};

const PARALLAX_PX: f64 = 12.0;

#[component]
pub fn Hero() -> impl IntoView {
    let state = use_view_state();
    let section_ref = NodeRef::<html::Section>::new();
    observe_section(Section::Home, section_ref);

    let pointer = Memo::new(move |_| state.with(|s| s.pointer()));
    let window_size = use_window_size();
    let polaroid_style = move || {
        let (dx, dy) = parallax_offset(
            pointer.get(),
            window_size.width.get(),
            window_size.height.get(),
            PARALLAX_PX,
        );
        format!("transform: translate({dx:.1}px, {dy:.1}px);")
    };

    view! {
        <section
            id=Section::Home.id()
            node_ref=section_ref
            class="min-h-screen flex flex-col lg:flex-row items-center justify-center gap-12 px-6 sm:px-12 pt-28 pb-16"
        >
            <div class="w-64 sm:w-72 flex-shrink-0 transition-transform duration-300 ease-out" style=polaroid_style>
                <div class="float-idle hover:scale-110 hover:-translate-y-6 transition-transform duration-300">
                    <div class="bg-white p-4 shadow-2xl rotate-3">
                        <div class="w-full aspect-square bg-gradient-to-br from-gray-200 to-gray-300 flex items-center justify-center overflow-hidden relative group">
                            <span class="text-gray-500 text-sm text-center group-hover:scale-110 transition-transform duration-500">
                                "Your Photo"
                            </span>
                            <div class="absolute inset-0 bg-amber-500/10 mix-blend-overlay"></div>
                        </div>
                        <div class="text-center mt-3 pb-2">
                            <p class="text-sm text-gray-600 font-semibold font-serif">{SITE_OWNER}</p>
                        </div>
                    </div>
                </div>
            </div>
            <div class="max-w-2xl text-center lg:text-left">
                <RevealOnScroll reveal=HERO_TEXT.staggered(0, HERO_STAGGER_MS)>
                    <h1 class="text-5xl sm:text-6xl font-bold text-gray-900 mb-6 font-serif leading-tight">
                        "Hello, I'm "
                        <span class="text-amber-600 relative inline-block">
                            {SITE_OWNER}
                            <DoodleCircle class="w-[120%] h-[120%] -top-[10%] -left-[10%] text-amber-400 opacity-60" />
                        </span>
                    </h1>
                </RevealOnScroll>
                <RevealOnScroll reveal=HERO_TEXT.staggered(1, HERO_STAGGER_MS)>
                    <p class="text-xl sm:text-2xl text-gray-700 mb-4 font-serif">
                        "A passionate "
                        <span class="font-semibold text-amber-700">"Full-Stack Developer"</span>
                        " crafting beautiful and functional web experiences"
                    </p>
                </RevealOnScroll>
                <RevealOnScroll reveal=HERO_TEXT.staggered(2, HERO_STAGGER_MS)>
                    <p class="text-lg text-gray-600 mb-8 font-serif">
                        "I specialize in building modern web applications with clean code and intuitive designs. Let's create something amazing together."
                    </p>
                </RevealOnScroll>
                <RevealOnScroll
                    reveal=HERO_TEXT.staggered(3, HERO_STAGGER_MS)
                    class="flex flex-wrap gap-4 justify-center lg:justify-start"
                >
                    <button
                        class="px-8 py-3 bg-amber-600 text-white font-semibold rounded-lg shadow-md hover:bg-amber-700 hover:-translate-y-0.5 active:scale-[0.98] transition-all"
                        on:click=move |_| dispatch(state, ViewEvent::NavigateTo(Section::Projects))
                    >
                        "View Project"
                    </button>
                    <button
                        class="px-8 py-3 border-2 border-amber-600 text-amber-700 font-semibold rounded-lg hover:bg-amber-50 hover:-translate-y-0.5 active:scale-[0.98] transition-all"
                        on:click=move |_| dispatch(state, ViewEvent::NavigateTo(Section::Contact))
                    >
                        "Contact Me"
                    </button>
                </RevealOnScroll>
            </div>
        </section>
    }
}
