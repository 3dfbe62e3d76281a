//! Navigator
//!
//! Pure navigation state on top of a [`RouteTable`]: which route is current
//! and which history update a navigation needs. The browser layer in
//! `router.rs` applies the returned outcome.

use crate::error::RouteResult;
use crate::generation::{NavGeneration, NavTicket};
use crate::table::{Resolved, RouteTable};

/// What started a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTrigger {
    /// First resolution of the page URL
    Initial,
    /// In-app link or programmatic navigate
    Link,
    /// Browser back/forward
    PopState,
}

/// History entry change the browser layer must perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryUpdate {
    /// `history.pushState` with the final href
    Push,
    /// `history.replaceState` with the final href
    Replace,
    /// Address bar already shows the final href
    Keep,
}

/// Result of a navigation
#[derive(Debug, Clone)]
pub enum NavOutcome<R> {
    /// A new route is current
    Changed {
        resolved: Resolved<R>,
        history: HistoryUpdate,
        ticket: NavTicket,
    },
    /// Same path and query, only the `#fragment` moved. The view stays
    /// mounted and the scroll position is left to the browser.
    FragmentOnly { href: String, history: HistoryUpdate },
    /// Already on the resolved location; only the scroll reset applies
    Unchanged,
}

/// Current route plus generation counter
#[derive(Debug, Clone)]
pub struct Navigator<R> {
    table: RouteTable<R>,
    current: Option<Resolved<R>>,
    generation: NavGeneration,
}

impl<R: Clone> Navigator<R> {
    pub fn new(table: RouteTable<R>) -> Self {
        Self {
            table,
            current: None,
            generation: NavGeneration::new(),
        }
    }

    pub fn current(&self) -> Option<&Resolved<R>> {
        self.current.as_ref()
    }

    pub fn generation(&self) -> &NavGeneration {
        &self.generation
    }

    /// Resolve `href` and make it current.
    ///
    /// Re-navigating to the location that is already current yields
    /// [`NavOutcome::Unchanged`] and leaves the generation alone, as does a
    /// change of the fragment alone ([`NavOutcome::FragmentOnly`]).
    pub fn navigate(&mut self, href: &str, trigger: NavTrigger) -> RouteResult<NavOutcome<R>> {
        let resolved = self.table.resolve(href)?;

        if let Some(current) = &mut self.current {
            if current.location == resolved.location {
                return Ok(NavOutcome::Unchanged);
            }
            if current.location.path == resolved.location.path
                && current.location.query == resolved.location.query
            {
                current.location.hash = resolved.location.hash.clone();
                let history = match trigger {
                    NavTrigger::Link => HistoryUpdate::Push,
                    NavTrigger::Initial | NavTrigger::PopState => HistoryUpdate::Keep,
                };
                return Ok(NavOutcome::FragmentOnly { href: resolved.location.href(), history });
            }
        }

        let history = match trigger {
            NavTrigger::Link => HistoryUpdate::Push,
            NavTrigger::Initial | NavTrigger::PopState if resolved.was_redirected() => {
                HistoryUpdate::Replace
            }
            NavTrigger::Initial | NavTrigger::PopState => HistoryUpdate::Keep,
        };

        let ticket = self.generation.advance();
        self.current = Some(resolved.clone());

        Ok(NavOutcome::Changed { resolved, history, ticket })
    }
}
