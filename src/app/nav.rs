use leptos::prelude::*;
use leptos_use::{use_window_scroll, use_window_size};

use crate::{
    motion::scroll_progress,
    view_state::{Section, ViewEvent},
};

use super::{
    controller::{dispatch, use_view_state},
    dom,
};

/// Thin bar along the top edge tracking how far down the page the reader is.
#[component]
pub fn ScrollProgress() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let window_size = use_window_size();
    let progress = Memo::new(move |_| {
        scroll_progress(
            scroll_y.get(),
            dom::document_height(),
            window_size.height.get(),
        )
    });

    view! {
        <div
            class="fixed top-0 left-0 right-0 h-1 bg-amber-600 origin-left z-50 transition-transform duration-150 ease-out"
            style=move || format!("transform: scaleX({:.4});", progress.get())
        />
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let state = use_view_state();
    let active = Memo::new(move |_| state.with(|s| s.active_section()));
    let menu_open = Memo::new(move |_| state.with(|s| s.mobile_menu_open()));

    view! {
        <nav class="fixed top-0 left-0 right-0 z-40 bg-white/80 backdrop-blur-md shadow-sm nav-enter">
            <div class="max-w-7xl mx-auto px-6 sm:px-8 lg:px-12 py-4">
                <div class="flex items-center justify-between">
                    <a
                        href=Section::Home.href()
                        class="text-2xl font-bold font-serif text-gray-900"
                        on:click=move |ev| {
                            ev.prevent_default();
                            dispatch(state, ViewEvent::NavigateTo(Section::Home));
                        }
                    >
                        <span class="text-amber-600">"Arga"</span>
                        " Adinata"
                    </a>
                    <ul class="hidden md:flex items-center gap-2">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <li>
                                        <NavLink section active />
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <button
                        class="md:hidden relative w-10 h-10 flex flex-col items-center justify-center gap-1.5"
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| dispatch(state, ViewEvent::ToggleMobileMenu)
                    >
                        <span class=move || burger_bar(menu_open.get(), "rotate-45 translate-y-2")></span>
                        <span class=move || burger_bar(menu_open.get(), "opacity-0")></span>
                        <span class=move || burger_bar(menu_open.get(), "-rotate-45 -translate-y-2")></span>
                    </button>
                </div>
            </div>
        </nav>
        <MobileMenu />
    }
}

fn burger_bar(open: bool, open_class: &str) -> String {
    let base = "block w-6 h-0.5 bg-gray-800 transition-all duration-300";
    if open {
        format!("{base} {open_class}")
    } else {
        base.to_string()
    }
}

#[component]
fn NavLink(section: Section, #[prop(into)] active: Signal<Section>) -> impl IntoView {
    let state = use_view_state();
    let is_active = move || active.get() == section;

    view! {
        <a
            href=section.href()
            class="relative px-4 py-2 capitalize font-medium text-gray-700 hover:text-amber-700 transition-colors"
            aria-current=move || is_active().then_some("true")
            on:click=move |ev| {
                ev.prevent_default();
                dispatch(state, ViewEvent::NavigateTo(section));
            }
        >
            <Show when=is_active>
                <span class="absolute inset-0 -z-10 rounded-full bg-yellow-200 shadow-[0_2px_8px_rgba(253,224,71,0.4)] transition-all"></span>
            </Show>
            {section.id()}
        </a>
    }
}

#[component]
fn MobileMenu() -> impl IntoView {
    let state = use_view_state();
    let menu_open = Memo::new(move |_| state.with(|s| s.mobile_menu_open()));

    view! {
        <Show when=move || menu_open.get()>
            <div
                class="fixed inset-0 z-30 bg-black/20 backdrop-blur-sm md:hidden fade-in"
                on:click=move |_| dispatch(state, ViewEvent::CloseMobileMenu)
            />
            <div class="fixed top-20 left-4 right-4 z-40 rounded-2xl bg-white p-8 shadow-2xl md:hidden slide-down">
                <ul class="flex flex-col items-center gap-6">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <li>
                                    <a
                                        href=section.href()
                                        class="text-xl capitalize font-medium text-gray-800 hover:text-amber-700"
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            dispatch(state, ViewEvent::NavigateTo(section));
                                        }
                                    >
                                        {section.id()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </Show>
    }
}
