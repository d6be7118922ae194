use leptos::{html, prelude::*};

use crate::{motion::Reveal, view_state::Section};

use super::{controller::observe_section, doodles::DoodleUnderline, reveal::RevealOnScroll};

const HIGHLIGHTS: [(&str, &str, &str); 3] = [
    (
        "🎯",
        "What I Do",
        "Full-stack development, UI/UX design, and turning ideas into reality",
    ),
    (
        "💼",
        "Experience",
        "Building modern web applications with passion",
    ),
    (
        "🚀",
        "Mission",
        "Creating impactful digital solutions that make a difference",
    ),
];

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    observe_section(Section::About, section_ref);

    view! {
        <section id=Section::About.id() node_ref=section_ref class="py-20 px-6 sm:px-12">
            <div class="max-w-4xl mx-auto">
                <RevealOnScroll>
                    <h2 class="text-4xl sm:text-5xl font-bold text-gray-900 mb-12 relative inline-block font-serif">
                        "About Me"
                        <DoodleUnderline class="w-full h-4 -bottom-2 left-0 text-amber-400 opacity-70" />
                    </h2>
                </RevealOnScroll>
                <div class="grid md:grid-cols-2 gap-8">
                    <RevealOnScroll reveal=Reveal::slide_x(-30) class="space-y-4">
                        <p class="text-lg text-gray-700 leading-relaxed font-serif">
                            "I'm a passionate developer with a love for creating beautiful, functional web experiences. Currently focusing on modern web technologies, I've worked on diverse projects ranging from educational platforms to interactive web applications."
                        </p>
                        <p class="text-lg text-gray-700 leading-relaxed font-serif">
                            "My approach combines technical expertise with creative problem-solving, always keeping the user experience at the forefront of every decision."
                        </p>
                    </RevealOnScroll>
                    <RevealOnScroll reveal=Reveal::slide_x(30) class="space-y-4">
                        {HIGHLIGHTS
                            .into_iter()
                            .map(|(icon, title, text)| {
                                view! {
                                    <div class="bg-white p-6 rounded-lg shadow-md hover:shadow-xl transition-shadow">
                                        <h3 class="text-xl font-semibold text-amber-700 mb-2">
                                            {icon} " " {title}
                                        </h3>
                                        <p class="text-gray-600">{text}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </RevealOnScroll>
                </div>
            </div>
        </section>
    }
}
