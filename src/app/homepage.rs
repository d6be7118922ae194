use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::PORTFOLIO;

use super::{
    about::About,
    certificates::Certificates,
    contact::{Contact, Footer},
    controller::provide_view_state,
    hero::Hero,
    nav::{NavBar, ScrollProgress},
    project_modal::ProjectModal,
    projects::Projects,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let portfolio = &*PORTFOLIO;
    provide_view_state(portfolio.projects.len(), portfolio.certificates.len());

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-gradient-to-br from-amber-50 via-orange-50 to-yellow-50 relative">
            <div class="bg-noise" />
            <ScrollProgress />
            <NavBar />
            <main class="relative max-w-6xl mx-auto my-24 bg-gradient-to-b from-[#fafafa] to-white shadow-xl rounded-sm">
                <Hero />
                <About />
                <Certificates certificates=&portfolio.certificates />
                <Projects projects=&portfolio.projects />
                <Contact />
                <div class="h-4 bg-gradient-to-b from-transparent to-gray-100"></div>
            </main>
            <Footer />
            <ProjectModal projects=&portfolio.projects />
        </div>
    }
}
