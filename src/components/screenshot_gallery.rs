//! Screenshot Gallery Component
//!
//! Horizontal strip of screenshots; clicking one opens it enlarged.

use leptos::prelude::*;

use crate::media::asset_url;

#[component]
pub fn ScreenshotGallery(screenshots: Vec<String>, #[prop(into)] name: String) -> impl IntoView {
    let (expanded, set_expanded) = signal::<Option<String>>(None);
    let count = screenshots.len();

    view! {
        <section class="section screenshots">
            <h2 class="section-title">"Screenshots"</h2>
            <div class="screenshot-strip">
                {screenshots
                    .into_iter()
                    .enumerate()
                    .map(|(idx, path)| {
                        let src = asset_url(&path);
                        let open = src.clone();
                        view! {
                            <button class="screenshot" on:click=move |_| set_expanded.set(Some(open.clone()))>
                                <img src=src alt=format!("{} screenshot {} of {}", name, idx + 1, count) loading="lazy" />
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Show when=move || expanded.get().is_some()>
                <div class="lightbox" on:click=move |_| set_expanded.set(None)>
                    <img src=move || expanded.get().unwrap_or_default() alt="Screenshot" />
                </div>
            </Show>
        </section>
    }
}
