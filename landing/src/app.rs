use leptos::prelude::*;

use crate::nav::{self, Navigation, SectionId, SectionRef};
use crate::sections::*;

/// Page root: owns the section registry and the navigation state.
#[component]
pub fn App() -> impl IntoView {
    let hero = SectionRef::new();
    let features = SectionRef::new();
    let testimonials = SectionRef::new();
    let pricing = SectionRef::new();
    let about = SectionRef::new();
    let contact = SectionRef::new();

    let registry = nav::register(|id| match id {
        SectionId::Hero => hero,
        SectionId::Features => features,
        SectionId::Testimonials => testimonials,
        SectionId::Pricing => pricing,
        SectionId::About => about,
        SectionId::Contact => contact,
    });
    let navigation = Navigation::new(registry);
    provide_context(navigation);
    nav::track_sections(navigation);

    view! {
        <div class="page">
            <Navbar />
            <main class="page-main">
                <Hero region=hero />
                <Features region=features />
                <Testimonials region=testimonials />
                <Pricing region=pricing />
                <About region=about />
                <Contact region=contact />
            </main>
            <Footer />
        </div>
    }
}
