use leptos::prelude::*;

// The `doodle` class draws the stroke in via stroke-dashoffset (see input.css).

#[component]
pub fn DoodleCircle(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <svg
            viewBox="0 0 200 100"
            class=format!("absolute pointer-events-none {class}")
            aria-hidden="true"
        >
            <path
                class="doodle doodle-slow"
                d="M10,50 Q50,5 100,50 T190,50"
                fill="transparent"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
            />
        </svg>
    }
}

#[component]
pub fn DoodleUnderline(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <svg
            viewBox="0 0 200 20"
            class=format!("absolute pointer-events-none {class}")
            aria-hidden="true"
        >
            <path
                class="doodle"
                d="M5,15 Q50,5 100,15 T195,10"
                fill="transparent"
                stroke="currentColor"
                stroke-width="3"
                stroke-linecap="round"
            />
        </svg>
    }
}
