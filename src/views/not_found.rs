use leptos::prelude::*;
use leptos_routes::Link;

#[component]
pub fn NotFoundView(#[prop(into)] path: String) -> impl IntoView {
    web_sys::console::warn_1(&format!("[NotFound] {}", path).into());

    view! {
        <section class="empty-state">
            <h1>"Page not found"</h1>
            <p><code>{path}</code>" does not exist."</p>
            <Link href="/" class="btn btn-ghost">"Back to all apps"</Link>
        </section>
    }
}
