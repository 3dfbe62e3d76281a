//! Media View Component
//!
//! Renders a catalog asset as `<video>` or `<img>` based on its extension.

use leptos::prelude::*;

use crate::media::{asset_url, MediaKind};

#[component]
pub fn MediaView(
    #[prop(into)] url: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let src = asset_url(&url);

    match MediaKind::from_url(&url) {
        MediaKind::Video => view! {
            <video class=class src=src autoplay=true muted=true controls=true></video>
        }
        .into_any(),
        MediaKind::Image => view! {
            <img class=class src=src alt=alt loading="lazy" />
        }
        .into_any(),
    }
}
