//! Command handling and state transition logic.
//!
//! This module implements the transition table of the application. Each
//! [`Command`] is one user intent; [`handle_command`] computes the next state
//! from the current one, commits it through the store's single update entry
//! point, and returns the host side effects to run.
//!
//! # Architecture
//!
//! ```text
//! key / binding → Command → handle_command → Store::apply → Projection::project
//!                                  ↓
//!                             Vec<Action> → perform(host)
//! ```
//!
//! # Failure Semantics
//!
//! Commands that name an artist absent from the collection are no-ops: the
//! state is left untouched and no re-projection happens. Handlers never fail.
//!
//! # Example
//!
//! ```rust
//! use musicianhub::app::{handle_command, AppState, Command, Projection, Store, ViewMode};
//! use musicianhub::i18n::{Catalog, Language};
//! use musicianhub::seed::Seed;
//!
//! struct Nothing;
//! impl Projection for Nothing {
//!     fn project(&mut self, _: &AppState) {}
//! }
//!
//! let catalog = Catalog::builtin().unwrap();
//! let seed = Seed::embedded().unwrap();
//! let name = seed.artists[0].name.clone();
//! let mut store = Store::new(AppState::new(seed.artists, Language::Ko), Nothing, true);
//!
//! handle_command(&mut store, &catalog, &Command::SelectArtist(name));
//! assert_eq!(store.state().view, ViewMode::Detail);
//! ```

use super::actions::Action;
use super::modes::{DetailTab, ViewMode};
use super::state::StateUpdate;
use super::store::{Projection, Store};
use crate::domain::ArtistProfile;
use crate::i18n::{Catalog, Language};

/// User intents, one per row of the transition table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Opens the detail page of the artist with this name.
    SelectArtist(String),

    /// Returns to the artist list.
    BackToList,

    /// Replaces the search text. The text is stored verbatim.
    ChangeSearch(String),

    /// Replaces a profile with an edited one.
    SaveProfile {
        /// Name of the profile the form was opened for.
        original_name: String,
        /// The reconstructed profile.
        profile: Box<ArtistProfile>,
    },

    /// Switches the detail pane.
    SetActiveTab(DetailTab),

    /// Opens or closes the edit form overlay.
    SetEditing(bool),

    /// Switches the interface language by code (`"ko"`, `"en"`).
    SetLanguage(String),

    /// Copies the page location and confirms.
    Share,

    /// Announces an EPK download. No file is transferred.
    DownloadEpk,
}

impl Command {
    /// Short name of the command, used as a tracing field.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectArtist(_) => "select_artist",
            Self::BackToList => "back_to_list",
            Self::ChangeSearch(_) => "change_search",
            Self::SaveProfile { .. } => "save_profile",
            Self::SetActiveTab(_) => "set_active_tab",
            Self::SetEditing(_) => "set_editing",
            Self::SetLanguage(_) => "set_language",
            Self::Share => "share",
            Self::DownloadEpk => "download_epk",
        }
    }
}

/// Processes a command, commits the resulting state and returns side effects.
///
/// # Parameters
///
/// * `store` - The state store; mutated only through its update entry point
/// * `catalog` - Translation tables for localized alert texts
/// * `command` - Command to process
///
/// # Returns
///
/// Actions for the host to execute in order. Empty for pure state changes
/// and for no-op commands.
pub fn handle_command<P: Projection>(
    store: &mut Store<P>,
    catalog: &Catalog,
    command: &Command,
) -> Vec<Action> {
    let _span = tracing::debug_span!("handle_command", command = command.name()).entered();
    let state = store.state();

    match command {
        Command::SelectArtist(name) => {
            let Some(index) = state.position_of(name) else {
                tracing::warn!(artist = %name, "select ignored: unknown artist");
                return vec![];
            };

            tracing::debug!(artist = %name, index, "artist selected");
            store.apply(StateUpdate {
                selected: Some(Some(index)),
                view: Some(ViewMode::Detail),
                active_tab: Some(DetailTab::Profile),
                ..StateUpdate::default()
            });
            vec![]
        }

        Command::BackToList => {
            let search_query = store.reset_search_on_back().then(String::new);
            store.apply(StateUpdate {
                selected: Some(None),
                view: Some(ViewMode::List),
                editing: Some(false),
                search_query,
                ..StateUpdate::default()
            });
            vec![]
        }

        Command::ChangeSearch(text) => {
            store.apply(StateUpdate {
                search_query: Some(text.clone()),
                ..StateUpdate::default()
            });
            vec![]
        }

        Command::SaveProfile { original_name, profile } => {
            let Some(index) = state.position_of(original_name) else {
                tracing::warn!(artist = %original_name, "save ignored: unknown artist");
                return vec![];
            };

            // A rename must not collide with another entry's identity.
            let clash = state
                .artists
                .iter()
                .enumerate()
                .any(|(i, artist)| i != index && artist.name == profile.name);
            if clash {
                tracing::warn!(
                    artist = %original_name,
                    new_name = %profile.name,
                    "save ignored: name already taken"
                );
                return vec![];
            }

            let mut artists = state.artists.clone();
            artists[index] = profile.as_ref().clone();

            tracing::debug!(
                artist = %original_name,
                new_name = %profile.name,
                index,
                "profile replaced"
            );
            store.apply(StateUpdate {
                artists: Some(artists),
                selected: Some(Some(index)),
                view: Some(ViewMode::Detail),
                editing: Some(false),
                ..StateUpdate::default()
            });
            vec![]
        }

        Command::SetActiveTab(tab) => {
            store.apply(StateUpdate {
                active_tab: Some(*tab),
                ..StateUpdate::default()
            });
            vec![]
        }

        Command::SetEditing(editing) => {
            store.apply(StateUpdate {
                editing: Some(*editing),
                ..StateUpdate::default()
            });
            vec![]
        }

        Command::SetLanguage(code) => {
            let Some(language) = Language::from_code(code) else {
                tracing::warn!(code = %code, "language switch rejected: unsupported code");
                return vec![];
            };

            store.apply(StateUpdate {
                language: Some(language),
                ..StateUpdate::default()
            });
            vec![Action::SetDocumentLanguage(language)]
        }

        Command::Share => {
            let message = catalog.lookup(state.language, "linkCopied").to_string();
            vec![Action::CopyLocation, Action::Alert(message)]
        }

        Command::DownloadEpk => {
            let message = catalog.lookup(state.language, "epkDownloadStarted").to_string();
            vec![Action::Alert(message)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::seed::Seed;

    #[derive(Default)]
    struct Counter(usize);

    impl Projection for Counter {
        fn project(&mut self, _state: &AppState) {
            self.0 += 1;
        }
    }

    fn setup(reset_search_on_back: bool) -> (Store<Counter>, Catalog) {
        let seed = Seed::embedded().unwrap();
        let state = AppState::new(seed.artists, Language::Ko);
        (
            Store::new(state, Counter::default(), reset_search_on_back),
            Catalog::builtin().unwrap(),
        )
    }

    fn name_at(store: &Store<Counter>, index: usize) -> String {
        store.state().artists[index].name.clone()
    }

    #[test]
    fn select_resets_tab_and_opens_detail() {
        let (mut store, catalog) = setup(true);
        handle_command(&mut store, &catalog, &Command::SetActiveTab(DetailTab::Analytics));

        let name = name_at(&store, 1);
        let actions = handle_command(&mut store, &catalog, &Command::SelectArtist(name.clone()));

        let state = store.state();
        assert!(actions.is_empty());
        assert_eq!(state.view, ViewMode::Detail);
        assert_eq!(state.active_tab, DetailTab::Profile);
        assert_eq!(state.selected_profile().map(|a| a.name.as_str()), Some(name.as_str()));
    }

    #[test]
    fn unknown_artist_is_a_no_op() {
        let (mut store, catalog) = setup(true);
        let before = store.state().clone();
        let projections = store.projection().0;

        handle_command(&mut store, &catalog, &Command::SelectArtist("nobody".to_string()));

        assert_eq!(store.state(), &before);
        assert_eq!(store.projection().0, projections);
    }

    #[test]
    fn back_to_list_respects_search_reset_setting() {
        for reset in [true, false] {
            let (mut store, catalog) = setup(reset);
            let name = name_at(&store, 0);
            handle_command(&mut store, &catalog, &Command::ChangeSearch("소".to_string()));
            handle_command(&mut store, &catalog, &Command::SelectArtist(name));
            handle_command(&mut store, &catalog, &Command::SetEditing(true));
            handle_command(&mut store, &catalog, &Command::BackToList);

            let state = store.state();
            assert_eq!(state.view, ViewMode::List);
            assert_eq!(state.selected, None);
            assert!(!state.editing);
            assert_eq!(state.search_query.is_empty(), reset);
        }
    }

    #[test]
    fn rename_onto_existing_name_is_rejected() {
        let (mut store, catalog) = setup(true);
        let original = name_at(&store, 0);
        let taken = name_at(&store, 1);
        handle_command(&mut store, &catalog, &Command::SelectArtist(original.clone()));

        let mut profile = store.state().artists[0].clone();
        profile.name = taken;
        let before = store.state().clone();
        handle_command(
            &mut store,
            &catalog,
            &Command::SaveProfile { original_name: original, profile: Box::new(profile) },
        );

        assert_eq!(store.state(), &before);
    }

    #[test]
    fn unsupported_language_is_rejected() {
        let (mut store, catalog) = setup(true);
        let actions = handle_command(&mut store, &catalog, &Command::SetLanguage("fr".to_string()));
        assert!(actions.is_empty());
        assert_eq!(store.state().language, Language::Ko);
    }

    #[test]
    fn share_copies_then_alerts_in_current_language() {
        let (mut store, catalog) = setup(true);
        handle_command(&mut store, &catalog, &Command::SetLanguage("en".to_string()));
        let revision = store.revision();

        let actions = handle_command(&mut store, &catalog, &Command::Share);

        assert_eq!(
            actions,
            vec![
                Action::CopyLocation,
                Action::Alert(catalog.lookup(Language::En, "linkCopied").to_string()),
            ]
        );
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn download_only_alerts() {
        let (mut store, catalog) = setup(true);
        let actions = handle_command(&mut store, &catalog, &Command::DownloadEpk);
        assert_eq!(
            actions,
            vec![Action::Alert(catalog.lookup(Language::Ko, "epkDownloadStarted").to_string())]
        );
    }
}
