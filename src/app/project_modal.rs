use leptos::prelude::*;

use crate::{
    content::Project,
    view_state::{project_detail, ViewEvent},
};

use super::{
    controller::{dispatch, use_view_state},
    projects::{ProjectImage, TechTags},
};

/// Detail overlay for the selected project. Clicking the backdrop, the close
/// button, or pressing Escape all clear the selection.
#[component]
pub fn ProjectModal(projects: &'static [Project]) -> impl IntoView {
    let state = use_view_state();
    let selected = Memo::new(move |_| state.with(|s| s.selected_project()));

    move || {
        project_detail(projects, selected.get()).map(|detail| {
            let role_count = detail.roles.len();
            view! {
                <div
                    class="fixed inset-0 z-50 bg-black/60 backdrop-blur-sm flex items-center justify-center p-4 cursor-pointer fade-in"
                    on:click=move |_| dispatch(state, ViewEvent::CloseProject)
                >
                    <div
                        role="dialog"
                        aria-modal="true"
                        aria-label=detail.title
                        class="relative max-w-3xl w-full max-h-[90vh] overflow-y-auto bg-[#fdfbf7] rounded-lg shadow-2xl pl-8 sm:pl-12 cursor-default pop-in"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <button
                            class="absolute top-4 right-4 p-2 rounded-full bg-red-100 hover:bg-red-200 hover:rotate-90 transition-all"
                            aria-label="Close"
                            on:click=move |_| dispatch(state, ViewEvent::CloseProject)
                        >
                            <svg class="w-6 h-6 text-red-900" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M6 18L18 6M6 6l12 12"
                                />
                            </svg>
                        </button>
                        <div class="pr-8 py-8">
                            <div class="rounded-lg overflow-hidden mb-6">
                                <ProjectImage image=detail.image title=detail.title />
                            </div>
                            <h2 class="text-4xl font-bold text-gray-900 mb-2 font-serif">{detail.title}</h2>
                            <div class="flex flex-wrap gap-2 mb-4 text-amber-700 font-medium">
                                {detail
                                    .roles
                                    .iter()
                                    .enumerate()
                                    .map(|(i, role)| {
                                        let sep = if i + 1 < role_count { " • " } else { "" };
                                        view! { <span>{format!("{role}{sep}")}</span> }
                                    })
                                    .collect_view()}
                            </div>
                            <div class="mb-6">
                                <TechTags technologies=detail.technologies />
                            </div>
                            <div class="space-y-4 text-gray-700 font-serif">
                                <h3 class="text-2xl font-semibold text-gray-900">"About This Project"</h3>
                                <p class="text-lg leading-relaxed">{detail.description}</p>
                                <h3 class="text-2xl font-semibold text-gray-900 pt-4">"Key Features"</h3>
                                <ul class="list-disc list-inside space-y-2 text-lg">
                                    {detail
                                        .features
                                        .iter()
                                        .map(|feature| view! { <li>{*feature}</li> })
                                        .collect_view()}
                                </ul>
                                <h3 class="text-2xl font-semibold text-gray-900 pt-4">
                                    "Challenges & Solutions"
                                </h3>
                                <p class="text-lg leading-relaxed">{detail.challenges}</p>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
