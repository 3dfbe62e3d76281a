use leptos::prelude::*;

use crate::media::{asset_url, icon_glyph};

/// Project logo when present, otherwise the symbolic icon
#[component]
pub fn ProjectIcon(
    #[prop(into)] icon: String,
    logo_url: Option<String>,
    #[prop(into)] name: String,
) -> impl IntoView {
    match logo_url {
        Some(url) => view! {
            <img class="project-logo" src=asset_url(&url) alt=format!("{} logo", name) />
        }
        .into_any(),
        None => view! {
            <span class="project-icon" data-icon=icon.clone()>{icon_glyph(&icon)}</span>
        }
        .into_any(),
    }
}
