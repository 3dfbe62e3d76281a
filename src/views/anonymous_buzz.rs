//! Anonymous Buzz View
//!
//! NotiBee landing page for a shared username (`/notibee/:username`, or the
//! `/:username` short link). Mounted through a guarded lazy load: if the
//! user navigates away first, the load result is dropped.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_routes::{lazy_view, Link};

use crate::components::{ProjectIcon, StoreLinks};
use crate::context::{use_catalog, use_site_router};
use crate::models::Project;
use crate::routes::SHORT_LINK_APP;

#[component]
pub fn AnonymousBuzzView(#[prop(into)] username: String) -> impl IntoView {
    let catalog = use_catalog();
    let ticket = use_site_router().ticket();

    let load = async move {
        // deferred mount, resolved on a later turn of the event loop
        TimeoutFuture::new(0).await;
        catalog.find_by_id(SHORT_LINK_APP).cloned()
    };

    lazy_view(ticket, load, move |project: Option<Project>| match project {
        Some(project) => view! { <BuzzCard username=username.clone() project=project /> }.into_any(),
        None => {
            web_sys::console::error_1(&format!("[AnonymousBuzz] {} missing from catalog", SHORT_LINK_APP).into());
            view! {
                <section class="empty-state">
                    <h1>"Unavailable"</h1>
                    <Link href="/" class="btn btn-ghost">"Back to all apps"</Link>
                </section>
            }
            .into_any()
        }
    })
}

#[component]
fn BuzzCard(username: String, project: Project) -> impl IntoView {
    let style = format!("--project-color: {}", project.color);
    let detail_href = project.detail_href();
    let headline = format!("Send @{} an anonymous Buzz", username);
    let short_link = format!("/{}", username);
    let links_project = project.clone();
    let Project { name, tagline, icon, logo_url, .. } = project;
    let learn_more = format!("Learn more about {}", name);

    view! {
        <section class="buzz-card animate-slide-up" style=style>
            <ProjectIcon icon=icon logo_url=logo_url name=name />
            <p class="eyebrow">{tagline}</p>
            <h1 class="buzz-headline">{headline}</h1>
            <p class="buzz-copy">
                "Get the app to buzz "
                <strong>{username}</strong>
                " without revealing who you are."
            </p>
            <StoreLinks project=links_project />
            <p class="buzz-share">"Share link: " <code>{short_link}</code></p>
            <Link href=detail_href class="back-link">{learn_more}</Link>
        </section>
    }
}
