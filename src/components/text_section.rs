use leptos::prelude::*;

use crate::markdown::render_long_form;

/// Titled long-form section rendered from catalog text
#[component]
pub fn TextSection(#[prop(into)] title: String, #[prop(into)] text: String) -> impl IntoView {
    let html = render_long_form(&text);

    view! {
        <section class="section">
            <h2 class="section-title">{title}</h2>
            <div class="long-form" inner_html=html></div>
        </section>
    }
}
