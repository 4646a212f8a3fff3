//! Synchronous match observers.
//!
//! Observers receive a [`Snapshot`] after every successful command, in
//! subscription order, on the engine's thread. A slow observer slows the
//! match; there is no queue and no backpressure to reason about.

use super::snapshot::Snapshot;

/// Receives a snapshot after every successful command.
///
/// Any `FnMut(&Snapshot)` closure is an observer, which covers most
/// callers; implement the trait directly when the observer carries state
/// worth naming.
pub trait MatchObserver {
    fn on_snapshot(&mut self, snapshot: &Snapshot);
}

impl<F: FnMut(&Snapshot)> MatchObserver for F {
    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        self(snapshot);
    }
}

/// The engine's observer list.
#[derive(Default)]
pub(crate) struct ObserverRegistry {
    observers: Vec<Box<dyn MatchObserver>>,
}

impl ObserverRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, observer: Box<dyn MatchObserver>) {
        self.observers.push(observer);
    }

    pub(crate) fn broadcast(&mut self, snapshot: &Snapshot) {
        for observer in &mut self.observers {
            observer.on_snapshot(snapshot);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::cards::Catalog;
    use crate::core::player::PlayerMap;
    use crate::core::rng::MatchRng;
    use crate::engine::state::{Controller, MatchState, PlayerState};
    use crate::supply::Supply;

    fn snapshot() -> Snapshot {
        let catalog = Catalog::base_set();
        let supply = Supply::standard(&catalog, 2);
        let players = PlayerMap::new(2, |id| {
            PlayerState::new(id, format!("Player {id}"), Controller::Human)
        });
        Snapshot::capture(&MatchState::new(players, catalog, supply, MatchRng::new(0)))
    }

    #[test]
    fn test_closures_are_observers() {
        let seen = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&seen);

        let mut registry = ObserverRegistry::new();
        registry.add(Box::new(move |_: &Snapshot| {
            *sink.borrow_mut() += 1;
        }));

        let snap = snapshot();
        registry.broadcast(&snap);
        registry.broadcast(&snap);

        assert_eq!(*seen.borrow(), 2);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_broadcast_preserves_subscription_order() {
        let order = Rc::new(RefCell::new(Vec::new()));

        let mut registry = ObserverRegistry::new();
        for tag in ["first", "second", "third"] {
            let sink = Rc::clone(&order);
            registry.add(Box::new(move |_: &Snapshot| {
                sink.borrow_mut().push(tag);
            }));
        }

        registry.broadcast(&snapshot());

        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }
}
