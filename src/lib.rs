//! MusicianHub: a Zellij plugin for browsing, searching and editing artist
//! profiles.
//!
//! The plugin keeps one application state, changes it only through named
//! commands, and redraws the whole view after every change:
//! - Searchable list of artist cards
//! - Artist detail page with a profile tab and an analytics tab
//! - Edit form overlay that replaces a profile wholesale
//! - Korean and English interface text
//! - Share (copy link) and EPK download notices

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Key events, Host effects
//! └─────────────────────────────────────────────────────┘
//!                        │ Command
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Command handlers (the only writers)              │
//! │  - Store: merge, revision, notify projection        │
//! │  - Actions for host side effects                    │
//! └─────────────────────────────────────────────────────┘
//!                        │ Projection::project
//! ┌─────────────────────────────────────────────────────┐
//! │  UI Layer (ui/)                                     │
//! │  - Full-redraw renderer: Frame { tree, bindings }   │
//! │  - Components, theme, painter                       │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Domain        │   │ Seed          │   │ i18n          │
//! │ (domain/)     │   │ (seed.rs)     │   │ (i18n/)       │
//! │ - Profiles    │   │ - Artists     │   │ - Languages   │
//! │ - Analytics   │   │ - Analytics   │   │ - Catalog     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing with file-based OTLP export │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: State store, command handlers, host actions, edit form
//! - [`domain`]: Artist profile and analytics types, errors
//! - [`seed`]: Startup artist collection and analytics snapshot
//! - [`i18n`]: Supported languages and translation catalog
//! - [`ui`]: Renderer, bindings, theme and ANSI painter
//! - [`infrastructure`]: Sandbox paths
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/musicianhub.wasm" {
//!         language "en"
//!         reset_search_on_back "false"
//!         seed_file "~/music/artists.json"
//!         location "https://musicianhub.app/"
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use musicianhub::app::{Command, DetailTab, ViewMode};
//! use musicianhub::{initialize, Config};
//!
//! let mut hub = initialize(&Config::default());
//! hub.dispatch(&Command::SelectArtist("이소현".to_string()));
//! hub.dispatch(&Command::SetActiveTab(DetailTab::Analytics));
//!
//! let state = hub.store.state();
//! assert_eq!(state.view, ViewMode::Detail);
//! assert_eq!(state.active_tab, DetailTab::Analytics);
//! ```

pub mod app;
pub mod domain;
pub mod i18n;
pub mod infrastructure;
pub mod observability;
pub mod seed;
pub mod ui;

pub use app::{handle_command, Action, AppState, Command, DetailTab, Host, Store, ViewMode};
pub use domain::{ArtistProfile, HubError, Result};
pub use i18n::{Catalog, Language};
pub use ui::{Theme, ViewRenderer};

use seed::Seed;
use std::collections::BTreeMap;
use std::rc::Rc;

/// URL copied by the share action when none is configured.
pub const DEFAULT_LOCATION: &str = "https://musicianhub.app/";

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Initial interface language code. Default: `"ko"`
    pub language: Option<String>,

    /// Whether going back to the list clears the search text. Default: `true`
    pub reset_search_on_back: bool,

    /// JSON file replacing the built-in seed. `~` maps to `/host`.
    pub seed_file: Option<String>,

    /// URL copied to the clipboard by the share action.
    pub location: String,

    /// Built-in theme name: `catppuccin-mocha` or `catppuccin-latte`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            reset_search_on_back: true,
            seed_file: None,
            location: DEFAULT_LOCATION.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unparseable booleans and blank values keep their defaults; language
    /// codes are kept verbatim and checked by [`Config::validate`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use musicianhub::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("language".to_string(), "en".to_string());
    /// map.insert("reset_search_on_back".to_string(), "false".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.language.as_deref(), Some("en"));
    /// assert!(!config.reset_search_on_back);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let defaults = Self::default();
        Self {
            language: value("language"),
            reset_search_on_back: value("reset_search_on_back")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.reset_search_on_back),
            seed_file: value("seed_file"),
            location: value("location").unwrap_or(defaults.location),
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
        }
    }

    /// Initial language, [`Language::Ko`] when unset.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::UnsupportedLanguage`] for codes other than `ko`
    /// and `en`.
    pub fn initial_language(&self) -> Result<Language> {
        self.language
            .as_deref()
            .map_or(Ok(Language::default()), str::parse)
    }

    /// Checks values that parsing alone cannot reject.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Config`] for an empty share location and
    /// [`HubError::UnsupportedLanguage`] for an unknown language code.
    pub fn validate(&self) -> Result<()> {
        if self.location.trim().is_empty() {
            return Err(HubError::Config("location must not be empty".to_string()));
        }
        self.initial_language().map(|_| ())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Everything the plugin shim needs after startup.
#[derive(Debug)]
pub struct Hub {
    /// State store whose projection is the view renderer.
    pub store: Store<ViewRenderer>,
    /// Translations shared with the renderer, used for host notices.
    pub catalog: Rc<Catalog>,
    /// Painter colors.
    pub theme: Theme,
}

impl Hub {
    /// Runs `command` through the handlers against this hub's store.
    pub fn dispatch(&mut self, command: &Command) -> Vec<Action> {
        handle_command(&mut self.store, &self.catalog, command)
    }
}

/// Builds the store, renderer, catalog and theme from configuration.
///
/// Startup never fails: a broken seed file falls back to the built-in seed,
/// an unknown language to Korean, and a broken theme to the default, each
/// with a log line.
pub fn initialize(config: &Config) -> Hub {
    let _span = tracing::debug_span!("initialize").entered();

    if let Err(e) = config.validate() {
        tracing::warn!(error = %e, "invalid configuration, using defaults where needed");
    }

    let seed = load_seed(config);

    let catalog = Rc::new(Catalog::builtin().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load translations, labels fall back to keys");
        Catalog::default()
    }));

    let language = config.initial_language().unwrap_or_else(|e| {
        tracing::debug!(error = %e, "falling back to default language");
        Language::default()
    });

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(
                        theme_name = %theme_name,
                        "failed to load theme, using default"
                    );
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::resolve_host_path(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(
                    theme_file = %theme_file,
                    error = %e,
                    "failed to load theme from file, using default"
                );
                Theme::default()
            })
        },
    );

    let renderer = ViewRenderer::new(Rc::clone(&catalog), seed.analytics);
    let store = Store::new(
        AppState::new(seed.artists, language),
        renderer,
        config.reset_search_on_back,
    );

    tracing::debug!(
        artists = store.state().artists.len(),
        language = %language,
        theme = %theme.name,
        "musicianhub initialized"
    );

    Hub { store, catalog, theme }
}

fn load_seed(config: &Config) -> Seed {
    let from_file = config.seed_file.as_ref().and_then(|path| {
        Seed::from_file(infrastructure::resolve_host_path(path))
            .map_err(|e| {
                tracing::warn!(
                    seed_file = %path,
                    error = %e,
                    "failed to load seed file, using built-in seed"
                );
            })
            .ok()
    });

    from_file.unwrap_or_else(|| {
        Seed::embedded().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "built-in seed is invalid, starting empty");
            Seed::default()
        })
    })
}
