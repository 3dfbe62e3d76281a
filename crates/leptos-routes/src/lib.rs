//! Leptos Routes
//!
//! Ordered route table with redirects and a history router for Leptos CSR.
//!
//! - `location`, `pattern`, `table`, `navigator`, `generation`: pure logic,
//!   usable and testable outside the browser
//! - `router`, `lazy`: browser bindings (history, popstate, scroll, links)

mod error;
mod generation;
mod lazy;
mod location;
mod navigator;
mod params;
mod pattern;
mod router;
mod table;

pub use error::{RouteError, RouteResult};
pub use generation::{NavGeneration, NavTicket};
pub use lazy::{lazy_view, run_guarded, spawn_guarded};
pub use location::{normalize_path, Location};
pub use navigator::{HistoryUpdate, NavOutcome, NavTrigger, Navigator};
pub use params::Params;
pub use pattern::{RoutePattern, Segment};
pub use router::{provide_router, use_navigate, use_router, Link, Navigate, Router};
pub use table::{Resolved, RouteAction, RouteTable, RouteTableBuilder, MAX_REDIRECTS};
