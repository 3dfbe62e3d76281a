use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span>"Cypher Studio"</span>
            <span class="footer-sep">"·"</span>
            <span>"Apps for mobile and the web"</span>
        </footer>
    }
}
