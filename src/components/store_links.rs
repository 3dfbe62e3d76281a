use leptos::prelude::*;

use crate::models::{LinkKind, Project};

/// Call-to-action buttons for whichever store/demo URLs the project has
#[component]
pub fn StoreLinks(project: Project) -> impl IntoView {
    let links: Vec<(LinkKind, String)> = project
        .links()
        .into_iter()
        .map(|(kind, url)| (kind, url.to_string()))
        .collect();

    if links.is_empty() {
        return ().into_any();
    }

    view! {
        <div class="store-links">
            {links
                .into_iter()
                .map(|(kind, url)| {
                    let class = match kind {
                        LinkKind::Android => "btn btn-primary",
                        LinkKind::WebTest | LinkKind::Demo => "btn btn-ghost",
                    };
                    view! {
                        <a class=class href=url target="_blank" rel="noopener noreferrer">
                            {kind.label()}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}
