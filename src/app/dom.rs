//! Browser side effects. Everything here is a no-op during server rendering.

#[cfg(feature = "hydrate")]
use leptos::prelude::document;

use crate::view_state::{Section, ViewEffect};

pub fn run_effect(effect: ViewEffect) {
    match effect {
        ViewEffect::ScrollTo(section) => scroll_to(section),
        ViewEffect::ReleaseScrollLock => set_scroll_locked(false),
    }
}

/// Idempotent: writing the same overflow value twice is harmless, so every
/// exit path can call this without tracking who locked first.
pub fn set_scroll_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = document().body() else {
            return;
        };
        let value = if locked { "hidden" } else { "" };
        if let Err(e) = body.style().set_property("overflow", value) {
            log::warn!("couldn't set body overflow: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = locked;
}

pub fn scroll_to(section: Section) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = document().get_element_by_id(section.id()) else {
            log::debug!("no element for section {section}");
            return;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        opts.set_block(web_sys::ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = section;
}

/// Full document height, for the reading progress bar.
pub fn document_height() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        document()
            .document_element()
            .map(|el| f64::from(el.scroll_height()))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    0.0
}
