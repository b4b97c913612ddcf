//! The single marketing page

use leptos::prelude::*;

use crate::sections::{AboutSection, AppsSection, FeaturesSection, Footer, Hero, NavHeader};

/// Sections in page order; `year` feeds the footer copyright
#[component]
pub fn HomePage(year: i32) -> impl IntoView {
    view! {
        <NavHeader />
        <main>
            <Hero />
            <AppsSection />
            <FeaturesSection />
            <AboutSection />
        </main>
        <Footer year=year />
    }
}
