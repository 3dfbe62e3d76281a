//! Navigation Generations
//!
//! Every navigation that changes the current route advances a shared counter.
//! Work started for an older navigation holds a ticket that stops being
//! current as soon as a newer navigation happens, so its result can be
//! dropped instead of rendered.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared navigation counter
#[derive(Debug, Clone, Default)]
pub struct NavGeneration(Arc<AtomicU64>);

impl NavGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    /// Start a new generation, invalidating all outstanding tickets
    pub fn advance(&self) -> NavTicket {
        let generation = self.0.fetch_add(1, Ordering::SeqCst) + 1;
        NavTicket { generation, source: self.clone() }
    }

    /// Ticket for the generation currently in effect
    pub fn ticket(&self) -> NavTicket {
        NavTicket { generation: self.current(), source: self.clone() }
    }
}

/// Handle tied to one navigation generation
#[derive(Debug, Clone)]
pub struct NavTicket {
    generation: u64,
    source: NavGeneration,
}

impl NavTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// False once any newer navigation has happened
    pub fn is_current(&self) -> bool {
        self.source.current() == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_navigation_invalidates_ticket() {
        let gen = NavGeneration::new();
        let first = gen.advance();
        assert!(first.is_current());

        let second = gen.advance();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert_eq!(second.generation(), first.generation() + 1);
    }

    #[test]
    fn test_ticket_snapshot_does_not_advance() {
        let gen = NavGeneration::new();
        gen.advance();
        let t = gen.ticket();
        assert_eq!(t.generation(), 1);
        assert!(t.is_current());
    }
}
