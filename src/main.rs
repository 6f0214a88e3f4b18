//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the MusicianHub library and the Zellij
//! plugin system: it parses configuration, maps Zellij key events to
//! [`Key`]s for the [`TerminalSession`], and prints the painted frame.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build the hub
//! 2. **Subscribe**: Register for `Key` events
//! 3. **Update**: Map the key, let the session resolve it against the frame
//! 4. **Render**: Paint the latest frame for the pane size
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//! - `PageDown` / `PageUp`: Scroll
//!
//! List view:
//! - Characters: Type into the search box
//! - `Up` / `Down`: Move across cards
//! - `Enter`: Open the artist
//! - `Esc`: Clear search, or close the plugin when already empty
//!
//! Detail view:
//! - `b` back, `p` profile, `a` analytics, `e` edit, `s` share, `d` EPK,
//!   `K` / `E` language
//!
//! Edit form:
//! - `Tab` / `Shift+Tab`: Next / previous field
//! - `Enter`: Save, `Esc`: Cancel

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use musicianhub::ui::{Key, Outcome, TerminalSession};
use musicianhub::{Config, Hub};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    hub: Hub,
    session: TerminalSession,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        let hub = musicianhub::initialize(&config);
        let session = TerminalSession::new(config.location, hub.store.state().language);
        Self { hub, session }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// The plugin only reads its own embedded or configured data, so it asks
    /// for no permissions and subscribes to key events alone.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        musicianhub::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(
            language = ?config.language,
            reset_search_on_back = config.reset_search_on_back,
            seed_file = ?config.seed_file,
            "parsed configuration"
        );

        self.hub = musicianhub::initialize(&config);
        self.session = TerminalSession::new(config.location, self.hub.store.state().language);

        subscribe(&[EventType::Key]);
        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events. Returns `true` if the pane should be
    /// repainted.
    fn update(&mut self, event: Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        let _guard = tracing::debug_span!("plugin_update", bare_key = ?key.bare_key).entered();

        let Some(key) = map_key(&key) else {
            return false;
        };

        match self.session.handle_key(&mut self.hub, key) {
            Outcome::Redraw => true,
            Outcome::Ignored => false,
            Outcome::Hide => {
                tracing::debug!("hiding plugin");
                hide_self();
                false
            }
        }
    }

    /// Paints the latest frame.
    fn render(&mut self, rows: usize, cols: usize) {
        print!("{}", self.session.paint(&self.hub, rows, cols));
    }
}

/// Maps a Zellij key to a session key.
fn map_key(key: &KeyWithModifier) -> Option<Key> {
    if key.has_modifiers(&[KeyModifier::Ctrl]) {
        return match key.bare_key {
            BareKey::Char('n') => Some(Key::Down),
            BareKey::Char('p') => Some(Key::Up),
            _ => None,
        };
    }

    Some(match key.bare_key {
        BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Key::BackTab,
        BareKey::Tab => Key::Tab,
        BareKey::Char(c) => Key::Char(c),
        BareKey::Backspace => Key::Backspace,
        BareKey::Up => Key::Up,
        BareKey::Down => Key::Down,
        BareKey::Enter => Key::Enter,
        BareKey::Esc => Key::Esc,
        BareKey::PageUp => Key::PageUp,
        BareKey::PageDown => Key::PageDown,
        _ => return None,
    })
}
