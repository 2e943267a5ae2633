use leptos::prelude::*;

use crate::config::{BRAND, COPYRIGHT_HOLDER};

const QUICK_LINKS: &[&str] = &["Features", "Pricing", "About", "Contact"];
const SUPPORT_LINKS: &[&str] = &["Help Center", "Documentation", "API Reference", "Status"];

fn copyright_line(year: u32) -> String {
    format!("© {year} Copyright by {COPYRIGHT_HOLDER}. All rights reserved.")
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h3 class="footer-title">{BRAND}</h3>
                        <p class="footer-blurb">
                            "Empowering creators and innovators with cutting-edge tools to build extraordinary "
                            "digital experiences. Join thousands who trust us to bring their visions to life."
                        </p>
                    </div>
                    <FooterLinks title="Quick Links" links=QUICK_LINKS />
                    <FooterLinks title="Support" links=SUPPORT_LINKS />
                </div>
                <div class="footer-bottom">
                    <p class="footer-copyright">{copyright_line(year)}</p>
                    <div class="footer-legal">
                        <a href="#" class="footer-link">"Privacy Policy"</a>
                        <a href="#" class="footer-link">"Terms of Service"</a>
                        <a href="#" class="footer-link">"Cookie Policy"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterLinks(title: &'static str, links: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h4 class="footer-heading">{title}</h4>
            <ul class="footer-list">
                {links
                    .iter()
                    .map(|link| view! {
                        <li><a href="#" class="footer-link">{*link}</a></li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
