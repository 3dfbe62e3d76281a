use leptos::prelude::*;

use crate::models::Stat;

#[component]
pub fn StatList(stats: Vec<Stat>) -> impl IntoView {
    view! {
        <dl class="stat-list">
            {stats
                .into_iter()
                .map(|stat| view! {
                    <div class="stat">
                        <dt class="stat-label">{stat.label}</dt>
                        <dd class="stat-value">{stat.value}</dd>
                    </div>
                })
                .collect_view()}
        </dl>
    }
}
