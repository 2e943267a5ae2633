use leptos::prelude::*;

use crate::nav::{SectionId, SectionRef};

#[component]
pub fn About(region: SectionRef) -> impl IntoView {
    view! {
        <section id={SectionId::About.as_str()} node_ref=region class="about">
            <div class="container about-grid">
                <div class="about-content">
                    <h2 class="section-title">
                        "Our Story & "
                        <span class="text-gradient">"Mission"</span>
                    </h2>
                    <p class="about-text">
                        "Founded in 2020 by a team of passionate developers and designers, we set out to solve "
                        "the complex challenges facing modern digital teams. Our mission is simple: empower "
                        "creators and innovators with the tools they need to build extraordinary experiences."
                    </p>
                    <p class="about-text">
                        "Today, we're proud to serve over 50,000 teams worldwide, from startups to Fortune 500 "
                        "companies. Our platform has powered the creation of millions of digital experiences, "
                        "and we're just getting started."
                    </p>

                    <div class="about-stats">
                        <Stat value="50K+" label="Active Teams" />
                        <Stat value="1M+" label="Projects Created" />
                    </div>

                    <div class="about-values">
                        <h3 class="about-values-title">"Our Values"</h3>
                        <div class="about-values-list">
                            <span class="about-value">"♥ User-Centric"</span>
                            <span class="about-value">"⚡ Innovation"</span>
                            <span class="about-value">"🛡 Reliability"</span>
                        </div>
                    </div>
                </div>

                <div class="about-visual">
                    <div class="about-visual-card">
                        <div class="about-visual-icon">"👥"</div>
                        <h3>"Built by Creators"</h3>
                        <p>"For Creators"</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Stat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="about-stat">
            <div class="about-stat-value">{value}</div>
            <div class="about-stat-label">{label}</div>
        </div>
    }
}
