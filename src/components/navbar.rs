//! Navbar Component
//!
//! Brand link plus one link per catalog project.

use leptos::prelude::*;
use leptos_routes::Link;

use crate::context::use_catalog;

#[component]
pub fn Navbar() -> impl IntoView {
    let catalog = use_catalog();

    view! {
        <header class="navbar">
            <Link href="/" class="navbar-brand">
                <span class="brand-mark">"◆"</span>
                "Cypher Studio"
            </Link>
            <nav class="navbar-links">
                {catalog
                    .all()
                    .iter()
                    .map(|p| {
                        let name = p.name.clone();
                        view! { <Link href=p.detail_href() class="navbar-link">{name}</Link> }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
