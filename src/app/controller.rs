use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_intersection_observer_with_options, use_window,
    UseIntersectionObserverOptions,
};

use crate::view_state::{
    Section, SectionCrossing, ViewEffect, ViewEvent, ViewState, OBSERVER_ROOT_MARGIN,
    OBSERVER_THRESHOLDS,
};

use super::dom;

/// Creates the page's view state and the page-level subscriptions that feed
/// it. Everything registered here is dropped with the calling owner.
pub fn provide_view_state(project_count: usize, certificate_count: usize) -> RwSignal<ViewState> {
    let state = RwSignal::new(ViewState::new(project_count, certificate_count));
    provide_context(state);

    let scroll_locked = Memo::new(move |_| state.with(ViewState::scroll_locked));
    Effect::new(move |_| dom::set_scroll_locked(scroll_locked.get()));

    let _ = use_event_listener(use_window(), ev::mousemove, move |ev| {
        dispatch(
            state,
            ViewEvent::PointerMoved {
                x: f64::from(ev.client_x()),
                y: f64::from(ev.client_y()),
            },
        );
    });

    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            dispatch(state, ViewEvent::CloseProject);
            dispatch(state, ViewEvent::CloseMobileMenu);
        }
    });

    on_cleanup(move || {
        // the signal may be gone already; the lock must be released either way
        let effect = state
            .try_update(|s| s.apply(ViewEvent::Teardown))
            .flatten()
            .unwrap_or(ViewEffect::ReleaseScrollLock);
        dom::run_effect(effect);
    });

    state
}

pub fn use_view_state() -> RwSignal<ViewState> {
    expect_context::<RwSignal<ViewState>>()
}

pub fn dispatch(state: RwSignal<ViewState>, event: ViewEvent) {
    if let Some(effect) = state.try_update(|s| s.apply(event)).flatten() {
        dom::run_effect(effect);
    }
}

/// Feeds visibility changes of one section element into the view state.
/// Nothing is observed while the element isn't mounted.
pub fn observe_section(section: Section, target: NodeRef<html::Section>) {
    let state = use_view_state();
    let _ = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let batch = entries
                .into_iter()
                .map(|entry| SectionCrossing {
                    section,
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                })
                .collect();
            dispatch(state, ViewEvent::SectionsCrossed(batch));
        },
        UseIntersectionObserverOptions::default()
            .thresholds(OBSERVER_THRESHOLDS.to_vec())
            .root_margin(OBSERVER_ROOT_MARGIN.to_string()),
    );
}
