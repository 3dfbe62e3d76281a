//! Browser Router
//!
//! Binds a [`Navigator`] to `window.history`: resolves the current URL,
//! pushes or replaces history entries, follows back/forward and resets the
//! scroll position after every navigation. A change of the `#fragment`
//! alone keeps the mounted view and the browser's scroll position.

use std::sync::{Arc, Mutex, MutexGuard};

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::generation::NavTicket;
use crate::navigator::{HistoryUpdate, NavOutcome, NavTrigger, Navigator};
use crate::table::{Resolved, RouteTable};

/// Reactive router over a route table of views `R`
pub struct Router<R: Clone + Send + Sync + 'static> {
    navigator: Arc<Mutex<Navigator<R>>>,
    current: RwSignal<Option<Resolved<R>>>,
}

impl<R: Clone + Send + Sync + 'static> Clone for Router<R> {
    fn clone(&self) -> Self {
        Self {
            navigator: Arc::clone(&self.navigator),
            current: self.current,
        }
    }
}

impl<R: Clone + Send + Sync + 'static> Router<R> {
    pub fn new(table: RouteTable<R>) -> Self {
        Self {
            navigator: Arc::new(Mutex::new(Navigator::new(table))),
            current: RwSignal::new(None),
        }
    }

    /// Currently rendered route (None until [`Router::start`] ran)
    pub fn current(&self) -> ReadSignal<Option<Resolved<R>>> {
        self.current.read_only()
    }

    /// Ticket for the navigation currently in effect
    pub fn ticket(&self) -> NavTicket {
        self.lock().generation().ticket()
    }

    /// Resolve the page URL and start listening to back/forward
    pub fn start(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let href = current_href(&window);
        web_sys::console::log_1(&format!("[Router] Starting at {}", href).into());
        self.apply(&href, NavTrigger::Initial);

        let router = self.clone();
        let on_popstate = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            if let Some(window) = web_sys::window() {
                router.apply(&current_href(&window), NavTrigger::PopState);
            }
        });
        if let Err(e) = window
            .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref())
        {
            web_sys::console::error_1(&format!("[Router] Failed to listen to popstate: {:?}", e).into());
        }
        // lives for the whole page
        on_popstate.forget();
    }

    /// Navigate to an in-app href
    pub fn navigate(&self, href: &str) {
        self.apply(href, NavTrigger::Link);
    }

    fn apply(&self, href: &str, trigger: NavTrigger) {
        let outcome = self.lock().navigate(href, trigger);

        match outcome {
            Ok(NavOutcome::Changed { resolved, history, ticket }) => {
                if let Some(from) = &resolved.redirected_from {
                    web_sys::console::log_1(
                        &format!("[Router] Redirect {} -> {}", from, resolved.location).into(),
                    );
                }
                web_sys::console::log_1(
                    &format!("[Router] Navigated to {} (generation {})", resolved.location, ticket.generation()).into(),
                );
                write_history(history, &resolved.location.href());
                self.current.set(Some(resolved));
            }
            Ok(NavOutcome::FragmentOnly { href, history }) => {
                write_history(history, &href);
                return;
            }
            Ok(NavOutcome::Unchanged) => {}
            Err(e) => {
                web_sys::console::error_1(&format!("[Router] {}", e).into());
                return;
            }
        }

        scroll_to_top();
    }

    fn lock(&self) -> MutexGuard<'_, Navigator<R>> {
        self.navigator.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Type-erased navigate callback for links
#[derive(Clone, Copy)]
pub struct Navigate(Callback<String>);

impl Navigate {
    pub fn to(&self, href: impl Into<String>) {
        self.0.run(href.into());
    }
}

/// Provide the router and a [`Navigate`] handle to all children
pub fn provide_router<R: Clone + Send + Sync + 'static>(router: Router<R>) {
    let nav_router = router.clone();
    provide_context(Navigate(Callback::new(move |href: String| nav_router.navigate(&href))));
    provide_context(router);
}

pub fn use_router<R: Clone + Send + Sync + 'static>() -> Router<R> {
    expect_context::<Router<R>>()
}

pub fn use_navigate() -> Navigate {
    expect_context::<Navigate>()
}

/// In-app link. Plain left clicks navigate without a page load; modified
/// clicks (new tab, etc.) fall back to the browser.
#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let navigate = use_navigate();
    let target = href.clone();

    let on_click = move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || ev.meta_key() || ev.ctrl_key() || ev.shift_key() || ev.alt_key() {
            return;
        }
        ev.prevent_default();
        navigate.to(target.clone());
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

fn current_href(window: &web_sys::Window) -> String {
    let location = window.location();
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    let hash = location.hash().unwrap_or_default();
    format!("{}{}{}", path, search, hash)
}

fn write_history(update: HistoryUpdate, href: &str) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = match update {
        HistoryUpdate::Push => history.push_state_with_url(&JsValue::NULL, "", Some(href)),
        HistoryUpdate::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(href)),
        HistoryUpdate::Keep => Ok(()),
    };
    if let Err(e) = result {
        web_sys::console::warn_1(&format!("[Router] History update failed for {}: {:?}", href, e).into());
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
