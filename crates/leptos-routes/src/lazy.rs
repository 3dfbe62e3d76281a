//! Guarded Async Loads
//!
//! Async view loads tied to a navigation ticket. A load that finishes after
//! a newer navigation is discarded, never rendered.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::generation::NavTicket;

/// Await `load`, then call `apply` only if `ticket` is still current.
/// Returns whether `apply` ran.
pub async fn run_guarded<T, Fut, A>(ticket: &NavTicket, load: Fut, apply: A) -> bool
where
    Fut: Future<Output = T>,
    A: FnOnce(T),
{
    let value = load.await;
    if !ticket.is_current() {
        return false;
    }
    apply(value);
    true
}

/// Spawn [`run_guarded`] on the local executor
pub fn spawn_guarded<T, Fut, A>(ticket: NavTicket, load: Fut, apply: A)
where
    T: 'static,
    Fut: Future<Output = T> + 'static,
    A: FnOnce(T) + 'static,
{
    spawn_local(async move {
        if !run_guarded(&ticket, load, apply).await {
            web_sys::console::log_1(
                &format!("[Router] Dropped stale load for generation {}", ticket.generation()).into(),
            );
        }
    });
}

/// Show a placeholder until `load` resolves, then `render` its output.
/// The rendered view appears all at once.
pub fn lazy_view<T, Fut, F, V>(ticket: NavTicket, load: Fut, render: F) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    Fut: Future<Output = T> + 'static,
    F: Fn(T) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let ready = RwSignal::new(None::<T>);
    spawn_guarded(ticket, load, move |value| {
        let _ = ready.try_set(Some(value));
    });

    move || match ready.get() {
        Some(value) => render(value).into_any(),
        None => view! { <div class="route-loading">"Loading..."</div> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::NavGeneration;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn test_current_load_is_applied() {
        let gen = NavGeneration::new();
        let ticket = gen.advance();
        let applied = Cell::new(None);

        let ran = block_on(run_guarded(&ticket, async { 7 }, |v| applied.set(Some(v))));
        assert!(ran);
        assert_eq!(applied.get(), Some(7));
    }

    #[test]
    fn test_load_finishing_after_newer_navigation_is_dropped() {
        let gen = NavGeneration::new();
        let ticket = gen.advance();
        let (tx, rx) = oneshot::channel::<u32>();
        let applied = Cell::new(false);

        let load = async move { rx.await.unwrap_or_default() };
        let pending = run_guarded(&ticket, load, |_| applied.set(true));

        // user navigates away, then the slow load completes
        gen.advance();
        tx.send(1).unwrap();

        assert!(!block_on(pending));
        assert!(!applied.get());
    }
}
