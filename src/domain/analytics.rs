//! Read-only analytics snapshot shown on the analytics tab.

use serde::{Deserialize, Serialize};

/// Audience analytics supplied with the seed data. Never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub profile_views: u64,
    #[serde(default)]
    pub fan_demographics: Vec<CityShare>,
    #[serde(default)]
    pub top_songs: Vec<SongStreams>,
}

/// Share of the audience located in one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityShare {
    pub city: String,
    pub percentage: u32,
}

/// Stream count for one song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongStreams {
    pub title: String,
    pub streams: u64,
}

impl AnalyticsData {
    /// The first-ranked song, if any.
    #[must_use]
    pub fn top_song(&self) -> Option<&SongStreams> {
        self.top_songs.first()
    }

    /// The first-ranked city, if any.
    #[must_use]
    pub fn top_city(&self) -> Option<&CityShare> {
        self.fan_demographics.first()
    }

    /// Largest city percentage, used to scale demographic bars.
    #[must_use]
    pub fn max_percentage(&self) -> u32 {
        self.fan_demographics
            .iter()
            .map(|share| share.percentage)
            .max()
            .unwrap_or(0)
    }

    /// Bar width for `share` relative to the largest city, in percent (0-100).
    #[must_use]
    pub fn bar_width(&self, share: &CityShare) -> u32 {
        let max = self.max_percentage();
        if max == 0 {
            0
        } else {
            let width = u64::from(share.percentage) * 100 / u64::from(max);
            u32::try_from(width).unwrap_or(100)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> AnalyticsData {
        AnalyticsData {
            profile_views: 10,
            fan_demographics: vec![
                CityShare { city: "Seoul".to_string(), percentage: 40 },
                CityShare { city: "Berlin".to_string(), percentage: 10 },
            ],
            top_songs: vec![SongStreams { title: "Aria".to_string(), streams: 5 }],
        }
    }

    #[test]
    fn bars_scale_against_largest_city() {
        let data = snapshot();
        assert_eq!(data.bar_width(&data.fan_demographics[0]), 100);
        assert_eq!(data.bar_width(&data.fan_demographics[1]), 25);
    }

    #[test]
    fn huge_percentages_do_not_overflow() {
        let data = AnalyticsData {
            fan_demographics: vec![
                CityShare { city: "A".to_string(), percentage: u32::MAX },
                CityShare { city: "B".to_string(), percentage: u32::MAX / 2 },
            ],
            ..AnalyticsData::default()
        };
        assert_eq!(data.bar_width(&data.fan_demographics[0]), 100);
        assert_eq!(data.bar_width(&data.fan_demographics[1]), 49);
    }

    #[test]
    fn empty_snapshot_has_no_leaders() {
        let data = AnalyticsData::default();
        assert!(data.top_song().is_none());
        assert!(data.top_city().is_none());
        assert_eq!(data.max_percentage(), 0);
    }
}
