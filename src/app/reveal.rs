use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::motion::{Reveal, SECTION_HEADING};

/// Fades its children in the first time they scroll into view.
#[component]
pub fn RevealOnScroll(
    #[prop(default = SECTION_HEADING)] reveal: Reveal,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(node_ref);
    let (seen, set_seen) = signal(false);
    Effect::new(move |_| {
        if visible.get() {
            set_seen.set(true);
        }
    });

    view! {
        <div node_ref=node_ref class=class style=move || reveal.style(seen.get())>
            {children()}
        </div>
    }
}
