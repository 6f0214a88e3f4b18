//! View and tab mode types for the application.
//!
//! These closed enums replace free-form mode strings, so an invalid view or
//! tab cannot be constructed.
//!
//! # State Machine
//!
//! The application shows exactly one of two views:
//! - **List**: searchable grid of artist cards
//! - **Detail**: one selected profile, split across [`DetailTab`] panes
//!
//! # Example
//!
//! ```rust
//! use musicianhub::app::modes::{DetailTab, ViewMode};
//!
//! let view = ViewMode::default();
//! assert_eq!(view, ViewMode::List);
//! assert_eq!(DetailTab::default(), DetailTab::Profile);
//! ```

/// Which page is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Artist grid with the search box.
    #[default]
    List,

    /// A single selected profile.
    ///
    /// Only valid while a profile is selected.
    Detail,
}

/// Content pane shown for the selected profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DetailTab {
    /// Biography, releases, videos, events, social links and contact.
    #[default]
    Profile,

    /// Audience analytics snapshot.
    Analytics,
}

impl DetailTab {
    /// Both tabs, in navigation order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Profile, Self::Analytics]
    }

    /// Translation key for the tab label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Analytics => "analytics",
        }
    }
}
