use leptos::prelude::*;

use crate::config::BRAND;
use crate::nav::{SectionId, use_navigation};

/// CSS class of a nav control; `stacked` is the narrow-viewport menu layout.
pub fn nav_button_class(active: bool, stacked: bool) -> &'static str {
    match (stacked, active) {
        (false, true) => "nav-link active",
        (false, false) => "nav-link",
        (true, true) => "nav-link nav-link-stacked active",
        (true, false) => "nav-link nav-link-stacked",
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let navigation = use_navigation();
    let links = navigation.links();
    let stacked_links = links.clone();

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <span class="navbar-brand">{BRAND}</span>

                <div class="navbar-links">
                    {links
                        .into_iter()
                        .map(|(id, label)| view! { <NavButton section=id label=label stacked=false /> })
                        .collect_view()}
                </div>

                <button
                    class="navbar-toggle"
                    aria-label="Toggle navigation menu"
                    on:click=move |_| navigation.menu.toggle()
                >
                    {move || if navigation.menu.is_open() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || navigation.menu.is_open()>
                <div class="navbar-menu">
                    {stacked_links
                        .clone()
                        .into_iter()
                        .map(|(id, label)| view! { <NavButton section=id label=label stacked=true /> })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn NavButton(section: SectionId, label: &'static str, stacked: bool) -> impl IntoView {
    let navigation = use_navigation();

    view! {
        <button
            class=move || nav_button_class(navigation.active.is(section), stacked)
            on:click=move |_| {
                navigation.navigate(section);
            }
        >
            {label}
        </button>
    }
}
