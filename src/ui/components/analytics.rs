//! Analytics tab: view count, top song, top city, demographic bars and the
//! ranked song list.

use crate::domain::AnalyticsData;
use crate::i18n::Translator;
use crate::ui::helpers::group_thousands;
use crate::ui::viewmodel::{NodeKind, Segment, ViewNode};

pub fn analytics_tab(data: &AnalyticsData, t: &Translator<'_>) -> Vec<ViewNode> {
    let streams = t.t("streams");

    let mut summary = vec![ViewNode::line(vec![
        Segment::dim(format!("{}  ", t.t("totalProfileViews"))),
        Segment::strong(group_thousands(data.profile_views)),
    ])];
    if let Some(song) = data.top_song() {
        summary.push(ViewNode::line(vec![
            Segment::dim(format!("{}  ", t.t("topSong"))),
            Segment::strong(&song.title),
            Segment::dim(format!("  {} {streams}", group_thousands(song.streams))),
        ]));
    }
    if let Some(city) = data.top_city() {
        summary.push(ViewNode::line(vec![
            Segment::dim(format!("{}  ", t.t("topFanCity"))),
            Segment::strong(&city.city),
            Segment::dim(format!("  {}%", city.percentage)),
        ]));
    }

    let bars = data
        .fan_demographics
        .iter()
        .enumerate()
        .map(|(rank, share)| {
            ViewNode::new(NodeKind::Bar {
                label: share.city.clone(),
                percent: share.percentage,
                width: data.bar_width(share),
                rank,
            })
        })
        .collect();

    let ranked = data
        .top_songs
        .iter()
        .enumerate()
        .map(|(i, song)| {
            ViewNode::line(vec![
                Segment::accent(format!("{}. ", i + 1)),
                Segment::plain(&song.title),
                Segment::dim(format!("  {} {streams}", group_thousands(song.streams))),
            ])
        })
        .collect();

    vec![
        ViewNode::section(None, summary),
        ViewNode::section(Some(t.t("fanDemographicsByCity").to_string()), bars),
        ViewNode::section(Some(t.t("topSongsByStream").to_string()), ranked),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Language};
    use crate::seed::Seed;

    #[test]
    fn counts_use_thousands_separators() {
        let catalog = Catalog::builtin().unwrap();
        let t = catalog.translator(Language::En);
        let data = Seed::embedded().unwrap().analytics;

        let nodes = analytics_tab(&data, &t);
        let text = nodes.iter().flat_map(ViewNode::all_text).collect::<Vec<_>>().join("\n");
        assert!(text.contains("25,890"));
        assert!(text.contains("2,105,821 streams"));
    }

    #[test]
    fn largest_city_gets_full_bar() {
        let catalog = Catalog::builtin().unwrap();
        let t = catalog.translator(Language::Ko);
        let data = Seed::embedded().unwrap().analytics;

        let nodes = analytics_tab(&data, &t);
        let widths: Vec<u32> = nodes[1]
            .children
            .iter()
            .filter_map(|node| match node.kind {
                NodeKind::Bar { width, .. } => Some(width),
                _ => None,
            })
            .collect();
        assert_eq!(widths.first(), Some(&100));
        assert_eq!(widths.len(), data.fan_demographics.len());
    }
}
