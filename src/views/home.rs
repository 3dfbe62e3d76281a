//! Home View
//!
//! Hero plus every catalog project, in catalog order.

use leptos::prelude::*;

use crate::components::ProjectCard;
use crate::context::use_catalog;

#[component]
pub fn HomeView() -> impl IntoView {
    let catalog = use_catalog();
    let projects = catalog.all().to_vec();
    let count = projects.len();

    view! {
        <section class="hero animate-fade-in">
            <p class="eyebrow">"Cypher Studio"</p>
            <h1 class="hero-title">"Apps that feel alive."</h1>
            <p class="hero-sub">{format!("{} apps crafted for mobile and the web.", count)}</p>
        </section>
        <section class="project-grid">
            {projects
                .into_iter()
                .map(|project| view! { <ProjectCard project=project /> })
                .collect_view()}
        </section>
    }
}
