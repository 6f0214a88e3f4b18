//! Seed data collaborator.
//!
//! Supplies the initial artist collection and the analytics snapshot. The seed
//! is read once at startup and never re-fetched. A built-in seed is compiled
//! into the plugin; a JSON file with the same shape can replace it via the
//! `seed_file` configuration key.
//!
//! # File Format
//!
//! ```json
//! {
//!   "artists": [{ "name": "...", "genre": "...", "events": [...] }],
//!   "analytics": { "profileViews": 0, "fanDemographics": [], "topSongs": [] }
//! }
//! ```

use crate::domain::{AnalyticsData, ArtistProfile, HubError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const EMBEDDED_SEED: &str = include_str!("../data/seed.json");

/// Startup content: artists and the analytics snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Seed {
    pub artists: Vec<ArtistProfile>,
    #[serde(default)]
    pub analytics: AnalyticsData,
}

impl Seed {
    /// Parses the seed compiled into the plugin.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Seed`](crate::HubError::Seed) if the embedded JSON is
    /// malformed.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_SEED)
    }

    /// Parses a seed from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Seed`] on invalid JSON or missing required fields,
    /// and [`HubError::DuplicateArtist`] when two artists share a name.
    pub fn from_json(json: &str) -> Result<Self> {
        let _span = tracing::debug_span!("seed_parse", bytes = json.len()).entered();

        let seed: Self = serde_json::from_str(json)?;
        seed.check_unique_names()?;
        tracing::debug!(
            artists = seed.artists.len(),
            profile_views = seed.analytics.profile_views,
            "seed parsed"
        );
        Ok(seed)
    }

    /// Reads and parses a seed file.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Io`](crate::HubError::Io) if the file cannot be read
    /// and [`HubError::Seed`](crate::HubError::Seed) if it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    fn check_unique_names(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.artists.len());
        for artist in &self.artists {
            if !seen.insert(artist.name.as_str()) {
                tracing::warn!(name = %artist.name, "duplicate artist name in seed");
                return Err(HubError::DuplicateArtist(artist.name.clone()));
            }
        }
        Ok(())
    }
}
