use leptos::{html, prelude::*};

use crate::{
    build_info::{build_month, BUILD_TIME},
    motion::{Reveal, CARD_STAGGER_MS},
    view_state::Section,
};

use super::{controller::observe_section, reveal::RevealOnScroll, SITE_OWNER};

struct SocialLink {
    name: &'static str,
    href: &'static str,
    handle: &'static str,
    icon: &'static str,
}

impl SocialLink {
    fn is_external(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        name: "Email",
        href: "mailto:argaadinataathallahp@mail.ugm.ac.id",
        handle: "argaadinataathallahp@mail.ugm.ac.id",
        icon: "M21.75 6.75v10.5a2.25 2.25 0 01-2.25 2.25h-15a2.25 2.25 0 01-2.25-2.25V6.75m19.5 0A2.25 2.25 0 0019.5 4.5h-15a2.25 2.25 0 00-2.25 2.25m19.5 0v.243a2.25 2.25 0 01-1.07 1.916l-7.5 4.615a2.25 2.25 0 01-2.36 0L3.32 8.91a2.25 2.25 0 01-1.07-1.916V6.75",
    },
    SocialLink {
        name: "LinkedIn",
        href: "https://linkedin.com/in/argaadinata",
        handle: "Arga Adinata",
        icon: "M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z",
    },
    SocialLink {
        name: "GitHub",
        href: "https://github.com/ArgaAdinata",
        handle: "@ArgaAdinata",
        icon: "M12 .297c-6.63 0-12 5.373-12 12 0 5.303 3.438 9.8 8.205 11.385.6.113.82-.258.82-.577 0-.285-.01-1.04-.015-2.04-3.338.724-4.042-1.61-4.042-1.61C4.422 18.07 3.633 17.7 3.633 17.7c-1.087-.744.084-.729.084-.729 1.205.084 1.838 1.236 1.838 1.236 1.07 1.835 2.809 1.305 3.495.998.108-.776.417-1.305.76-1.605-2.665-.3-5.466-1.332-5.466-5.93 0-1.31.465-2.38 1.235-3.22-.135-.303-.54-1.523.105-3.176 0 0 1.005-.322 3.3 1.23.96-.267 1.98-.399 3-.405 1.02.006 2.04.138 3 .405 2.28-1.552 3.285-1.23 3.285-1.23.645 1.653.24 2.873.12 3.176.765.84 1.23 1.91 1.23 3.22 0 4.61-2.805 5.625-5.475 5.92.42.36.81 1.096.81 2.22 0 1.606-.015 2.896-.015 3.286 0 .315.21.69.825.57C20.565 22.092 24 17.592 24 12.297c0-6.627-5.373-12-12-12",
    },
    SocialLink {
        name: "Instagram",
        href: "https://www.instagram.com/adinata_arga/",
        handle: "@adinata_arga",
        icon: "M12 2.163c3.204 0 3.584.012 4.85.07 3.252.148 4.771 1.691 4.919 4.919.058 1.265.069 1.645.069 4.849 0 3.205-.012 3.584-.069 4.849-.149 3.225-1.664 4.771-4.919 4.919-1.266.058-1.644.07-4.85.07-3.204 0-3.584-.012-4.849-.07-3.26-.149-4.771-1.699-4.919-4.92-.058-1.265-.07-1.644-.07-4.849 0-3.204.013-3.583.07-4.849.149-3.227 1.664-4.771 4.919-4.919 1.266-.057 1.645-.069 4.849-.069zm0-2.163c-3.259 0-3.667.014-4.947.072-4.358.2-6.78 2.618-6.98 6.98-.059 1.281-.073 1.689-.073 4.948 0 3.259.014 3.668.072 4.948.2 4.358 2.618 6.78 6.98 6.98 1.281.058 1.689.072 4.948.072 3.259 0 3.668-.014 4.948-.072 4.354-.2 6.782-2.618 6.979-6.98.059-1.28.073-1.689.073-4.948 0-3.259-.014-3.667-.072-4.947-.196-4.354-2.617-6.78-6.979-6.98-1.281-.059-1.69-.073-4.949-.073zm0 5.838c-3.403 0-6.162 2.759-6.162 6.162s2.759 6.163 6.162 6.163 6.162-2.759 6.162-6.163c0-3.403-2.759-6.162-6.162-6.162zm0 10.162c-2.209 0-4-1.79-4-4 0-2.209 1.791-4 4-4s4 1.791 4 4c0 2.21-1.791 4-4 4zm6.406-11.845c-.796 0-1.441.645-1.441 1.44s.645 1.44 1.441 1.44c.795 0 1.439-.645 1.439-1.44s-.644-1.44-1.439-1.44z",
    },
];

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    observe_section(Section::Contact, section_ref);

    view! {
        <section id=Section::Contact.id() node_ref=section_ref class="py-20 px-6 sm:px-12">
            <div class="max-w-4xl mx-auto text-center">
                <RevealOnScroll>
                    <h2 class="text-4xl sm:text-5xl font-bold text-gray-900 mb-4 font-serif">
                        "Let's Connect"
                    </h2>
                    <p class="text-lg text-gray-600 mb-12 font-serif">
                        "Feel free to reach out through any of these platforms"
                    </p>
                </RevealOnScroll>
            </div>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6 max-w-6xl mx-auto">
                {SOCIAL_LINKS
                    .iter()
                    .enumerate()
                    .map(|(i, link)| {
                        let reveal = Reveal::fade_up(20).staggered(i, CARD_STAGGER_MS);
                        let external = link.is_external();
                        // the mail icon is outlined, the brand icons are filled
                        let (fill, stroke) = if external {
                            ("currentColor", "none")
                        } else {
                            ("none", "currentColor")
                        };
                        view! {
                            <RevealOnScroll reveal>
                                <a
                                    href=link.href
                                    target=external.then_some("_blank")
                                    rel=external.then_some("noopener noreferrer")
                                    class="group flex flex-col items-center p-8 bg-white rounded-xl shadow-md hover:shadow-xl hover:-translate-y-2 transition-all duration-300"
                                >
                                    <div class="mb-4 group-hover:scale-110 transition-transform duration-300 ease-out text-amber-700">
                                        <svg
                                            viewBox="0 0 24 24"
                                            fill=fill
                                            stroke=stroke
                                            stroke-width="1.5"
                                            class="w-12 h-12"
                                            aria-hidden="true"
                                        >
                                            <path stroke-linecap="round" stroke-linejoin="round" d=link.icon />
                                        </svg>
                                    </div>
                                    <h3 class="text-xl font-semibold text-gray-900 mb-2">{link.name}</h3>
                                    <p class="text-gray-600 text-sm break-all">{link.handle}</p>
                                </a>
                            </RevealOnScroll>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let updated = build_month(BUILD_TIME);
    view! {
        <footer class="py-8 text-center text-sm text-gray-500">
            <p>{format!("© {SITE_OWNER}")}</p>
            {updated.map(|month| view! { <p class="mt-1">"Last updated " {month}</p> })}
        </footer>
    }
}
