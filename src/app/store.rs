//! State store with a single mutation entry point.
//!
//! [`Store`] owns the [`AppState`] and exposes it read-only. The only way to
//! change it is [`Store::apply`], which is visible to the command handlers
//! alone. Every applied update is followed by a synchronous call to the
//! store's [`Projection`], so observers never see a half-applied state.
//!
//! # Example
//!
//! ```rust
//! use musicianhub::app::{AppState, Projection, Store};
//! use musicianhub::i18n::Language;
//!
//! #[derive(Default)]
//! struct Counter(usize);
//!
//! impl Projection for Counter {
//!     fn project(&mut self, _state: &AppState) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let store = Store::new(AppState::new(vec![], Language::Ko), Counter::default(), true);
//! assert_eq!(store.projection().0, 1); // initial projection
//! ```

use super::state::{AppState, StateUpdate};

/// Observer that re-projects the whole state after every change.
pub trait Projection {
    /// Rebuilds the observer's output from `state`.
    fn project(&mut self, state: &AppState);
}

/// Owner of the application state.
#[derive(Debug)]
pub struct Store<P> {
    state: AppState,
    projection: P,
    revision: u64,
    reset_search_on_back: bool,
}

impl<P: Projection> Store<P> {
    /// Creates a store and performs the initial projection.
    ///
    /// `reset_search_on_back` controls whether returning to the list clears
    /// the search text.
    pub fn new(state: AppState, mut projection: P, reset_search_on_back: bool) -> Self {
        projection.project(&state);
        Self {
            state,
            projection,
            revision: 0,
            reset_search_on_back,
        }
    }

    /// Read-only access to the current state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// The observer holding the latest projection.
    #[must_use]
    pub const fn projection(&self) -> &P {
        &self.projection
    }

    /// Number of updates applied since creation.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub const fn reset_search_on_back(&self) -> bool {
        self.reset_search_on_back
    }

    /// Merges `update` into the state and re-projects.
    ///
    /// Performs no validation. An empty update is ignored and does not
    /// trigger a projection.
    ///
    /// Returns `true` if the state was re-projected.
    pub(in crate::app) fn apply(&mut self, update: StateUpdate) -> bool {
        if update.is_empty() {
            return false;
        }

        let _span = tracing::debug_span!(
            "store_apply",
            revision = self.revision + 1,
            fields = ?update.touched_fields()
        )
        .entered();

        update.merge_into(&mut self.state);
        self.revision += 1;

        debug_assert!(self.state.is_consistent(), "state invariants violated");

        self.projection.project(&self.state);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::DetailTab;
    use crate::i18n::Language;

    #[derive(Default)]
    struct Recorder {
        seen: Vec<DetailTab>,
    }

    impl Projection for Recorder {
        fn project(&mut self, state: &AppState) {
            self.seen.push(state.active_tab);
        }
    }

    fn store() -> Store<Recorder> {
        Store::new(AppState::new(vec![], Language::Ko), Recorder::default(), true)
    }

    #[test]
    fn apply_merges_then_projects() {
        let mut store = store();
        let changed = store.apply(StateUpdate {
            active_tab: Some(DetailTab::Analytics),
            ..StateUpdate::default()
        });

        assert!(changed);
        assert_eq!(store.revision(), 1);
        assert_eq!(store.projection().seen, vec![DetailTab::Profile, DetailTab::Analytics]);
    }

    #[test]
    fn empty_update_is_ignored() {
        let mut store = store();
        assert!(!store.apply(StateUpdate::default()));
        assert_eq!(store.revision(), 0);
        assert_eq!(store.projection().seen.len(), 1);
    }
}
