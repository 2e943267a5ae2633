use leptos::prelude::*;

use crate::nav::{SectionId, SectionRef};

#[component]
pub fn Features(region: SectionRef) -> impl IntoView {
    view! {
        <section id={SectionId::Features.as_str()} node_ref=region class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">
                        "Powerful Features for "
                        <span class="text-gradient">"Modern Teams"</span>
                    </h2>
                    <p class="section-description">
                        "Everything you need to build, deploy, and scale your projects with confidence. "
                        "Our comprehensive suite of tools empowers teams to achieve more."
                    </p>
                </div>
                <div class="features-grid">
                    <FeatureCard
                        icon="⚡"
                        title="Lightning Fast Performance"
                        description="Experience blazing-fast load times and seamless interactions with our optimized infrastructure built for speed and reliability."
                    />
                    <FeatureCard
                        icon="🛡"
                        title="Enterprise Security"
                        description="Your data is protected with bank-level encryption, advanced threat detection, and compliance with industry standards."
                    />
                    <FeatureCard
                        icon="👥"
                        title="Collaborative Workspace"
                        description="Work together seamlessly with real-time collaboration tools, shared workspaces, and integrated communication features."
                    />
                    <FeatureCard
                        icon="🎯"
                        title="Precision Analytics"
                        description="Make data-driven decisions with comprehensive analytics, detailed reporting, and actionable insights at your fingertips."
                    />
                </div>
                <div class="section-footer">
                    <button class="btn btn-dark">"Explore All Features"</button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}
