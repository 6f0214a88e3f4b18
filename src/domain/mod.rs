//! Domain layer for the MusicianHub plugin.
//!
//! This module contains the core record types browsed by the plugin,
//! independent of Zellij APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`artist`]: Artist profiles and their releases, videos and events
//! - [`analytics`]: Read-only analytics snapshot

pub mod analytics;
pub mod artist;
pub mod error;

pub use analytics::{AnalyticsData, CityShare, SongStreams};
pub use artist::{ArtistProfile, Event, MusicRelease, ReleaseKind, ReleaseLinks, SocialLinks, Video};
pub use error::{HubError, Result};
