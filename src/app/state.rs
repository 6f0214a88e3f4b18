//! Application state and partial updates.
//!
//! This module defines [`AppState`], the single source of truth for the
//! plugin, and [`StateUpdate`], the subset-of-fields patch that command
//! handlers hand to the store.
//!
//! # State Components
//!
//! - **Artists**: the artist collection, seeded at startup
//! - **Selection**: index of the selected artist within the collection
//! - **View**: list or detail page
//! - **Search Query**: raw text typed into the search box
//! - **Editing**: whether the edit form overlay is open
//! - **Active Tab**: profile or analytics pane
//! - **Language**: interface language
//!
//! # Invariants
//!
//! - `selected` is `Some` exactly when `view == ViewMode::Detail`
//! - a selection always points into `artists`, so the selected profile is
//!   always one element of the collection
//!
//! # Example
//!
//! ```rust
//! use musicianhub::app::AppState;
//! use musicianhub::i18n::Language;
//! use musicianhub::seed::Seed;
//!
//! let seed = Seed::embedded().unwrap();
//! let state = AppState::new(seed.artists, Language::Ko);
//! assert_eq!(state.filtered_artists().len(), 3);
//! assert!(state.selected_profile().is_none());
//! ```

use super::modes::{DetailTab, ViewMode};
use crate::domain::ArtistProfile;
use crate::i18n::Language;

/// Central application state container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// The artist collection. Names are unique within it.
    pub artists: Vec<ArtistProfile>,

    /// Position of the selected profile within `artists`.
    pub selected: Option<usize>,

    /// Page currently shown.
    pub view: ViewMode,

    /// Search text, stored verbatim (no trimming).
    pub search_query: String,

    /// Whether the edit form overlay is open.
    pub editing: bool,

    /// Pane shown for the selected profile.
    pub active_tab: DetailTab,

    /// Interface language.
    pub language: Language,
}

impl AppState {
    /// Creates the startup state: list view, nothing selected, empty search.
    #[must_use]
    pub fn new(artists: Vec<ArtistProfile>, language: Language) -> Self {
        Self {
            artists,
            selected: None,
            view: ViewMode::List,
            search_query: String::new(),
            editing: false,
            active_tab: DetailTab::Profile,
            language,
        }
    }

    /// Returns the selected profile, if any.
    #[must_use]
    pub fn selected_profile(&self) -> Option<&ArtistProfile> {
        self.selected.and_then(|index| self.artists.get(index))
    }

    /// Finds the collection position of the artist named `name`.
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.artists.iter().position(|artist| artist.name == name)
    }

    /// Artists whose name contains the search text, ignoring case.
    ///
    /// Recomputed from the full collection on every call; collection order is
    /// preserved and an empty query returns every artist.
    #[must_use]
    pub fn filtered_artists(&self) -> Vec<&ArtistProfile> {
        let needle = self.search_query.to_lowercase();

        let filtered: Vec<&ArtistProfile> = self
            .artists
            .iter()
            .filter(|artist| artist.name.to_lowercase().contains(&needle))
            .collect();

        tracing::trace!(
            total = self.artists.len(),
            filtered = filtered.len(),
            query_len = self.search_query.len(),
            "artist filter applied"
        );
        filtered
    }

    /// Checks the selection/view invariants.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let selection_matches_view = self.selected.is_some() == (self.view == ViewMode::Detail);
        let selection_in_bounds = self.selected.map_or(true, |index| index < self.artists.len());
        selection_matches_view && selection_in_bounds
    }
}

/// A patch over a subset of [`AppState`] fields.
///
/// `None` leaves a field unchanged. `selected` is doubly optional so a
/// handler can clear the selection with `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateUpdate {
    pub artists: Option<Vec<ArtistProfile>>,
    pub selected: Option<Option<usize>>,
    pub view: Option<ViewMode>,
    pub search_query: Option<String>,
    pub editing: Option<bool>,
    pub active_tab: Option<DetailTab>,
    pub language: Option<Language>,
}

impl StateUpdate {
    /// Whether the patch touches no field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Names of the fields the patch sets, for logging.
    #[must_use]
    pub fn touched_fields(&self) -> Vec<&'static str> {
        [
            ("artists", self.artists.is_some()),
            ("selected", self.selected.is_some()),
            ("view", self.view.is_some()),
            ("search_query", self.search_query.is_some()),
            ("editing", self.editing.is_some()),
            ("active_tab", self.active_tab.is_some()),
            ("language", self.language.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect()
    }

    /// Merges the patch into `state`.
    pub(crate) fn merge_into(self, state: &mut AppState) {
        if let Some(artists) = self.artists {
            state.artists = artists;
        }
        if let Some(selected) = self.selected {
            state.selected = selected;
        }
        if let Some(view) = self.view {
            state.view = view;
        }
        if let Some(search_query) = self.search_query {
            state.search_query = search_query;
        }
        if let Some(editing) = self.editing {
            state.editing = editing;
        }
        if let Some(active_tab) = self.active_tab {
            state.active_tab = active_tab;
        }
        if let Some(language) = self.language {
            state.language = language;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::Seed;

    fn state() -> AppState {
        AppState::new(Seed::embedded().unwrap().artists, Language::Ko)
    }

    fn names<'a>(artists: &[&'a ArtistProfile]) -> Vec<&'a str> {
        artists.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn empty_query_returns_full_collection_in_order() {
        let state = state();
        let all: Vec<&str> = state.artists.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names(&state.filtered_artists()), all);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let mut state = state();
        state.artists[1].name = "Junseo Park".to_string();

        state.search_query = "PARK".to_string();
        assert_eq!(names(&state.filtered_artists()), vec!["Junseo Park"]);

        state.search_query = "소현".to_string();
        assert_eq!(names(&state.filtered_artists()), vec!["이소현"]);
    }

    #[test]
    fn filter_with_no_match_is_empty() {
        let mut state = state();
        state.search_query = "zzz".to_string();
        assert!(state.filtered_artists().is_empty());
    }

    #[test]
    fn query_is_not_trimmed() {
        let mut state = state();
        state.search_query = " 이소현".to_string();
        assert!(state.filtered_artists().is_empty());
    }

    #[test]
    fn merge_touches_only_given_fields() {
        let mut state = state();
        let update = StateUpdate {
            view: Some(ViewMode::Detail),
            selected: Some(Some(2)),
            ..StateUpdate::default()
        };
        assert_eq!(update.touched_fields(), vec!["selected", "view"]);

        update.merge_into(&mut state);
        assert_eq!(state.selected, Some(2));
        assert_eq!(state.view, ViewMode::Detail);
        assert_eq!(state.language, Language::Ko);
        assert!(state.is_consistent());
    }

    #[test]
    fn clearing_selection_is_expressible() {
        let mut state = state();
        state.selected = Some(0);
        state.view = ViewMode::Detail;

        StateUpdate {
            selected: Some(None),
            view: Some(ViewMode::List),
            ..StateUpdate::default()
        }
        .merge_into(&mut state);

        assert_eq!(state.selected, None);
        assert!(state.is_consistent());
    }
}
