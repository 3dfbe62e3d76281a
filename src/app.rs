//! Portfolio App
//!
//! Shell layout plus the route outlet: the current resolved route picks
//! which page view is mounted.

use leptos::prelude::*;
use leptos_routes::{Resolved, Router};

use crate::catalog::Catalog;
use crate::components::{Footer, Navbar};
use crate::context::provide_site_context;
use crate::routes::Page;
use crate::views::{AnonymousBuzzView, AppDetailView, HomeView, NotFoundView};

#[component]
pub fn App(catalog: Catalog, router: Router<Page>) -> impl IntoView {
    provide_site_context(catalog, router.clone());
    router.start();

    let current = router.current();

    view! {
        <div class="app-shell">
            <Navbar />
            <main class="page">
                {move || current.get().map(render_page)}
            </main>
            <Footer />
        </div>
    }
}

fn render_page(resolved: Resolved<Page>) -> AnyView {
    match resolved.view {
        Page::Home => view! { <HomeView /> }.into_any(),
        Page::AppDetail => {
            let id = resolved.param("id").unwrap_or_default().to_string();
            view! { <AppDetailView id=id /> }.into_any()
        }
        Page::AnonymousBuzz => {
            let username = resolved.param("username").unwrap_or_default().to_string();
            view! { <AnonymousBuzzView username=username /> }.into_any()
        }
        Page::NotFound => {
            let path = resolved.location.path.clone();
            view! { <NotFoundView path=path /> }.into_any()
        }
    }
}
