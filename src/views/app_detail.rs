//! App Detail View
//!
//! Full page for one project. The id comes straight from the URL, so an
//! unknown id renders an empty state instead of failing.

use leptos::prelude::*;
use leptos_routes::Link;

use crate::components::{MediaView, ProjectIcon, ScreenshotGallery, StatList, StoreLinks, TextSection};
use crate::context::use_catalog;
use crate::models::Project;

#[component]
pub fn AppDetailView(#[prop(into)] id: String) -> impl IntoView {
    let catalog = use_catalog();

    match catalog.find_by_id(&id).cloned() {
        Some(project) => view! { <ProjectDetail project=project /> }.into_any(),
        None => {
            web_sys::console::warn_1(&format!("[AppDetail] No project with id {}", id).into());
            let message = format!("There is no app called \"{}\".", id);
            view! {
                <section class="empty-state">
                    <h1>"App not found"</h1>
                    <p>{message}</p>
                    <Link href="/" class="btn btn-ghost">"Back to all apps"</Link>
                </section>
            }
            .into_any()
        }
    }
}

#[component]
fn ProjectDetail(project: Project) -> impl IntoView {
    let style = format!("--project-color: {}", project.color);
    let screenshots = project.screenshots().to_vec();
    let links_project = project.clone();
    let Project {
        name,
        tagline,
        description,
        long_description,
        about,
        purpose,
        icon,
        logo_url,
        featured_url,
        features,
        media_url,
        stats,
        ..
    } = project;

    let hero_alt = format!("{} preview", name);
    let featured_alt = format!("{} highlights", name);
    let gallery_name = name.clone();
    let icon_name = name.clone();

    view! {
        <article class="project-detail animate-fade-in" style=style>
            <header class="detail-header">
                <Link href="/" class="back-link">"← All apps"</Link>
                <div class="detail-title">
                    <ProjectIcon icon=icon logo_url=logo_url name=icon_name />
                    <div>
                        <h1 class="project-name">{name}</h1>
                        <p class="project-tagline">{tagline}</p>
                    </div>
                </div>
                <p class="project-description">{description}</p>
                <StoreLinks project=links_project />
            </header>

            <MediaView url=media_url alt=hero_alt class="detail-hero" />

            {(!stats.is_empty()).then(|| view! { <StatList stats=stats /> })}

            {long_description.map(|text| view! { <TextSection title="Overview" text=text /> })}

            {(!features.is_empty()).then(|| view! {
                <section class="section">
                    <h2 class="section-title">"Features"</h2>
                    <ul class="feature-list">
                        {features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
                    </ul>
                </section>
            })}

            {featured_url.map(|url| view! {
                <section class="section featured">
                    <MediaView url=url alt=featured_alt class="featured-image" />
                </section>
            })}

            {about.map(|text| view! { <TextSection title="About" text=text /> })}
            {purpose.map(|text| view! { <TextSection title="Purpose" text=text /> })}

            {(!screenshots.is_empty()).then(|| view! {
                <ScreenshotGallery screenshots=screenshots name=gallery_name />
            })}
        </article>
    }
}
