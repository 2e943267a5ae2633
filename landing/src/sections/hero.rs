use leptos::prelude::*;

use crate::nav::{SectionId, SectionRef, use_navigation};

#[component]
pub fn Hero(region: SectionRef) -> impl IntoView {
    let navigation = use_navigation();

    view! {
        <section id={SectionId::Hero.as_str()} node_ref=region class="hero">
            <div class="hero-backdrop">
                <div class="hero-blob hero-blob-blue"></div>
                <div class="hero-blob hero-blob-purple"></div>
                <div class="hero-blob hero-blob-indigo"></div>
            </div>

            <div class="container hero-content">
                <h1 class="hero-title">
                    "Build the "
                    <span class="text-gradient">"Future"</span>
                    <br />
                    "of Digital Excellence"
                </h1>
                <p class="hero-description">
                    "Transform your ideas into stunning digital experiences with our cutting-edge platform. "
                    "Join thousands of creators who trust us to bring their visions to life."
                </p>

                <div class="hero-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| {
                            navigation.navigate(SectionId::Features);
                        }
                    >
                        "Get Started Today"
                        <span class="btn-icon">"→"</span>
                    </button>
                    <button class="btn btn-secondary">
                        <span class="btn-icon">"▶"</span>
                        "Watch Demo"
                    </button>
                </div>

                <div class="hero-trust">
                    <p class="hero-trust-label">"Trusted by industry leaders"</p>
                    <div class="hero-trust-logos">
                        {(0..4)
                            .map(|_| view! { <div class="hero-trust-logo">"LOGO"</div> })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="hero-scroll-hint">"⌄"</div>
        </section>
    }
}
