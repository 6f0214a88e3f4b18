//! Artist profile domain model.
//!
//! An [`ArtistProfile`] is the central record browsed by the plugin. Its name is
//! its identity within the artist collection. Releases, videos and events are
//! immutable leaf records that only travel as part of their owning profile.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by event records (`2024-09-10`).
const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// One performer or act.
///
/// Profiles are replaced wholesale on edit; there is no field-level patching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistProfile {
    pub name: String,
    pub genre: String,
    pub location: String,
    /// Ensemble members. Empty for solo artists.
    #[serde(default)]
    pub members: Vec<String>,
    pub bio: String,
    pub profile_picture: String,
    pub cover_image: String,
    pub contact_email: String,
    #[serde(default)]
    pub socials: SocialLinks,
    #[serde(default)]
    pub music: Vec<MusicRelease>,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// Per-platform social profile URLs. Every platform is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

impl SocialLinks {
    /// Returns the configured platforms in display order as `(platform, url)`.
    ///
    /// The platform string doubles as the translation key for its label.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("youtube", &self.youtube),
            ("instagram", &self.instagram),
            ("twitter", &self.twitter),
            ("facebook", &self.facebook),
        ]
        .into_iter()
        .filter_map(|(platform, url)| url.as_deref().map(|url| (platform, url)))
        .collect()
    }
}

/// Kind of a music release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleaseKind {
    Album,
    Single,
}

impl ReleaseKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Album => "Album",
            Self::Single => "Single",
        }
    }
}

/// An album or single.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicRelease {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ReleaseKind,
    pub release_date: String,
    pub cover_art: String,
    #[serde(default)]
    pub links: ReleaseLinks,
}

/// Streaming links for a release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_music: Option<String>,
}

/// A hosted video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub youtube_video_id: String,
}

impl Video {
    /// Embeddable player URL for this video.
    #[must_use]
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.youtube_video_id)
    }
}

/// A scheduled performance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
    pub event_name: String,
    pub venue: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_link: Option<String>,
}

impl Event {
    /// Parses the event date. Returns `None` for malformed dates.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), EVENT_DATE_FORMAT).ok()
    }
}

impl ArtistProfile {
    /// Returns the events sorted ascending by date.
    ///
    /// The sort is stable. Events whose date cannot be parsed keep their
    /// relative order and sort after every dated event.
    ///
    /// # Examples
    ///
    /// ```
    /// # use musicianhub::seed::Seed;
    /// let seed = Seed::embedded().unwrap();
    /// let events = seed.artists[0].upcoming_events();
    /// assert!(events.windows(2).all(|w| w[0].date <= w[1].date));
    /// ```
    #[must_use]
    pub fn upcoming_events(&self) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.iter().collect();
        events.sort_by_key(|event| (event.parsed_date().is_none(), event.parsed_date()));
        events
    }

    /// Formats the month of the chronologically earliest event as `YYYY/MM`.
    ///
    /// Returns `None` when the profile has no event with a valid date, so
    /// callers never see a default date.
    #[must_use]
    pub fn next_event_month(&self) -> Option<String> {
        self.events
            .iter()
            .filter_map(Event::parsed_date)
            .min()
            .map(|date| date.format("%Y/%m").to_string())
    }

    /// Members joined for display, or `None` for solo artists.
    #[must_use]
    pub fn members_line(&self) -> Option<String> {
        if self.members.is_empty() {
            None
        } else {
            Some(self.members.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, date: &str) -> Event {
        Event {
            id: id.to_string(),
            date: date.to_string(),
            event_name: format!("show {id}"),
            venue: "hall".to_string(),
            city: "Seoul".to_string(),
            ticket_link: None,
        }
    }

    fn profile_with_events(events: Vec<Event>) -> ArtistProfile {
        ArtistProfile {
            name: "Test".to_string(),
            genre: "Piano".to_string(),
            location: "Berlin".to_string(),
            members: vec![],
            bio: String::new(),
            profile_picture: String::new(),
            cover_image: String::new(),
            contact_email: "a@b.c".to_string(),
            socials: SocialLinks::default(),
            music: vec![],
            videos: vec![],
            events,
        }
    }

    #[test]
    fn next_event_month_picks_earliest_date() {
        let profile = profile_with_events(vec![event("b", "2024-10-05"), event("a", "2024-09-10")]);
        assert_eq!(profile.next_event_month().as_deref(), Some("2024/09"));
    }

    #[test]
    fn next_event_month_is_absent_without_events() {
        let profile = profile_with_events(vec![]);
        assert_eq!(profile.next_event_month(), None);
    }

    #[test]
    fn next_event_month_ignores_malformed_dates() {
        let profile = profile_with_events(vec![event("x", "soon"), event("y", "2025-04-02")]);
        assert_eq!(profile.next_event_month().as_deref(), Some("2025/04"));

        let undated = profile_with_events(vec![event("x", "tbd")]);
        assert_eq!(undated.next_event_month(), None);
    }

    #[test]
    fn upcoming_events_sorts_ascending_with_undated_last() {
        let profile = profile_with_events(vec![
            event("late", "2025-01-01"),
            event("tbd", "later"),
            event("early", "2024-08-20"),
        ]);
        let ids: Vec<&str> = profile.upcoming_events().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "late", "tbd"]);
    }

    #[test]
    fn social_entries_skip_missing_platforms() {
        let socials = SocialLinks {
            instagram: Some("https://instagram.com".to_string()),
            youtube: Some("https://youtube.com".to_string()),
            facebook: None,
            twitter: None,
        };
        assert_eq!(
            socials.entries(),
            vec![("youtube", "https://youtube.com"), ("instagram", "https://instagram.com")]
        );
    }

    #[test]
    fn release_kind_deserializes_from_type_field() {
        let json = r#"{"id":"x","title":"T","type":"Single","releaseDate":"2024-02-20","coverArt":"c","links":{}}"#;
        let release: MusicRelease = serde_json::from_str(json).unwrap();
        assert_eq!(release.kind, ReleaseKind::Single);
        assert_eq!(release.links.youtube_music, None);
    }
}
