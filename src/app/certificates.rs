use leptos::{html, prelude::*};

use crate::{
    content::Certificate,
    motion::{Reveal, CARD_STAGGER_MS},
    view_state::{certificate_cards, Section, ViewEvent},
};

use super::{
    controller::{dispatch, observe_section, use_view_state},
    doodles::DoodleUnderline,
    reveal::RevealOnScroll,
};

#[component]
pub fn Certificates(certificates: &'static [Certificate]) -> impl IntoView {
    let state = use_view_state();
    let section_ref = NodeRef::<html::Section>::new();
    observe_section(Section::Certificates, section_ref);

    let selected = Memo::new(move |_| state.with(|s| s.selected_certificate()));

    view! {
        <section
            id=Section::Certificates.id()
            node_ref=section_ref
            class="py-20 px-6 sm:px-12 bg-amber-50/40"
        >
            <RevealOnScroll>
                <h2 class="text-4xl sm:text-5xl font-bold text-gray-900 mb-4 relative inline-block font-serif">
                    "Certificates"
                    <DoodleUnderline class="w-full h-4 -bottom-2 left-0 text-amber-400 opacity-70" />
                </h2>
                <p class="text-lg text-gray-600 mb-12 font-serif">
                    "My professional achievements and continuous learning journey"
                </p>
            </RevealOnScroll>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 items-start">
                {certificate_cards(certificates, selected.get_untracked())
                    .into_iter()
                    .map(|card| {
                        let index = card.index;
                        let expanded = Signal::derive(move || selected.get() == Some(index));
                        view! { <CertificateCard index certificate=card.certificate expanded /> }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CertificateCard(
    index: usize,
    certificate: &'static Certificate,
    expanded: Signal<bool>,
) -> impl IntoView {
    let state = use_view_state();
    let reveal = Reveal::fade_up(20).staggered(index, CARD_STAGGER_MS);

    view! {
        <RevealOnScroll reveal class="relative">
            <div class="absolute -top-3 left-1/2 -translate-x-1/2 w-24 h-8 bg-yellow-100/80 rotate-1 shadow-sm z-30 tape"></div>
            <div
                role="button"
                tabindex="0"
                class="w-full text-left bg-[#fdfbf7] p-6 rounded-sm border border-gray-200 shadow-[2px_4px_12px_rgba(0,0,0,0.08)] hover:-translate-y-1 hover:rotate-1 transition-transform cursor-pointer"
                aria-expanded=move || expanded.get().to_string()
                on:click=move |_| dispatch(state, ViewEvent::ToggleCertificate(index))
            >
                <div class="flex justify-between items-start gap-4">
                    <div>
                        <h3 class="font-bold text-xl text-gray-800 leading-tight mb-2 font-serif">
                            {certificate.title.clone()}
                        </h3>
                        <p class="text-sm text-gray-600 font-medium">
                            {certificate.byline()}
                        </p>
                    </div>
                    <div class=move || {
                        if expanded.get() {
                            "text-amber-600 transition-transform duration-300 rotate-180"
                        } else {
                            "text-amber-600 transition-transform duration-300"
                        }
                    }>
                        <svg class="w-5 h-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M19 9l-7 7-7-7"
                            />
                        </svg>
                    </div>
                </div>
                <Show when=move || expanded.get()>
                    {certificate
                        .image
                        .clone()
                        .map(|src| {
                            view! {
                                <div class="mt-4 bg-white p-2 shadow-inner border border-gray-100 rotate-1 fade-in">
                                    <img
                                        src=src
                                        alt=certificate.title.clone()
                                        loading="lazy"
                                        class="w-full h-auto"
                                    />
                                </div>
                            }
                        })}
                </Show>
            </div>
        </RevealOnScroll>
    }
}
