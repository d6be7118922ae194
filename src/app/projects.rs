use leptos::{html, prelude::*};

use crate::{
    content::Project,
    motion::{polaroid_tilt, PROJECT_ENTRY},
    view_state::{Section, ViewEvent},
};

use super::{
    controller::{dispatch, observe_section, use_view_state},
    doodles::DoodleUnderline,
    reveal::RevealOnScroll,
};

#[component]
pub fn Projects(projects: &'static [Project]) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    observe_section(Section::Projects, section_ref);

    view! {
        <section id=Section::Projects.id() node_ref=section_ref class="py-20 px-6 sm:px-12">
            <RevealOnScroll>
                <h2 class="text-4xl sm:text-5xl font-bold text-gray-900 mb-4 relative inline-block font-serif">
                    "Featured Projects"
                    <DoodleUnderline class="w-full h-4 -bottom-2 left-0 text-amber-400 opacity-70" />
                </h2>
                <p class="text-lg text-gray-600 mb-12 font-serif">
                    "A collection of my recent work and personal projects"
                </p>
            </RevealOnScroll>
            <div class="space-y-12">
                {projects
                    .iter()
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectEntry index project /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectEntry(index: usize, project: &'static Project) -> impl IntoView {
    let state = use_view_state();
    let tilt = polaroid_tilt(index);

    view! {
        <RevealOnScroll reveal=PROJECT_ENTRY>
            <div class="flex flex-col lg:flex-row gap-6 items-start">
                <div
                    class="w-full lg:w-2/5 flex-shrink-0 group hover:rotate-0 hover:scale-[1.02] transition-all duration-300"
                    style=format!("transform: rotate({tilt}deg);")
                >
                    <div class="bg-white p-4 shadow-lg group-hover:shadow-2xl transition-shadow">
                        <ProjectImage image=project.image.as_deref() title=&project.title />
                    </div>
                </div>
                <div class="flex-1 space-y-4">
                    <h3 class="text-3xl font-bold text-gray-900 font-serif">{project.title.clone()}</h3>
                    <p class="text-gray-700 text-lg leading-relaxed font-serif">
                        {project.description.clone()}
                    </p>
                    <TechTags technologies=&project.technologies />
                    <button
                        class="text-amber-700 font-semibold hover:text-amber-900 hover:translate-x-1 transition-all"
                        on:click=move |_| dispatch(state, ViewEvent::OpenProject(index))
                    >
                        "View Project →"
                    </button>
                </div>
            </div>
        </RevealOnScroll>
    }
}

/// Screenshot, or the placeholder block when the entry has no image.
#[component]
pub fn ProjectImage(image: Option<&'static str>, title: &'static str) -> impl IntoView {
    match image {
        Some(src) => view! {
            <img src=src alt=title loading="lazy" class="w-full aspect-video object-cover" />
        }
        .into_any(),
        None => view! {
            <div class="w-full aspect-video bg-gradient-to-br from-amber-100 to-orange-100 flex items-center justify-center">
                <span class="text-gray-400 text-sm">"Project Screenshot"</span>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn TechTags(technologies: &'static [String]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {technologies
                .iter()
                .map(|tech| {
                    view! {
                        <span class="px-3 py-1 bg-amber-100 text-amber-800 text-sm font-medium rounded-full border border-amber-200">
                            {tech.clone()}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
