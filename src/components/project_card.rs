//! Project Card Component
//!
//! Home page tile linking to a project's detail page.

use leptos::prelude::*;
use leptos_routes::Link;

use crate::components::ProjectIcon;
use crate::models::Project;

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let style = format!("--project-color: {}", project.color);
    let href = project.detail_href();
    let Project { name, tagline, description, icon, logo_url, features, .. } = project;
    let icon_name = name.clone();

    view! {
        <article class="project-card animate-slide-up" style=style>
            <Link href=href class="project-card-link">
                <div class="project-card-header">
                    <ProjectIcon icon=icon logo_url=logo_url name=icon_name />
                    <div>
                        <h2 class="project-name">{name}</h2>
                        <p class="project-tagline">{tagline}</p>
                    </div>
                </div>
                <p class="project-description">{description}</p>
                <ul class="feature-chips">
                    {features
                        .into_iter()
                        .map(|f| view! { <li class="feature-chip">{f}</li> })
                        .collect_view()}
                </ul>
                <span class="project-card-cta">"Explore →"</span>
            </Link>
        </article>
    }
}
