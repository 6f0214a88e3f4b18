//! Profile tab: biography, music, videos, upcoming shows, social links and
//! booking contact.

use crate::domain::{ArtistProfile, Event};
use crate::i18n::Translator;
use crate::ui::viewmodel::{Segment, ViewNode};

pub fn profile_tab(profile: &ArtistProfile, t: &Translator<'_>) -> Vec<ViewNode> {
    vec![
        about(profile, t),
        music(profile, t),
        videos(profile, t),
        upcoming_shows(profile, t),
        social(profile, t),
        ViewNode::section(
            Some(t.t("bookingContact").to_string()),
            vec![ViewNode::line(vec![Segment::link(&profile.contact_email)])],
        ),
    ]
}

fn about(profile: &ArtistProfile, t: &Translator<'_>) -> ViewNode {
    let lines = profile
        .bio
        .lines()
        .map(|line| ViewNode::line(vec![Segment::plain(line)]))
        .collect();
    ViewNode::section(Some(t.t("about").to_string()), lines)
}

fn music(profile: &ArtistProfile, t: &Translator<'_>) -> ViewNode {
    let rows = profile
        .music
        .iter()
        .map(|release| {
            let mut segments = vec![
                Segment::strong(&release.title),
                Segment::dim(format!("  {} · {}", release.kind.label(), release.release_date)),
            ];
            if let Some(url) = &release.links.youtube_music {
                segments.push(Segment::dim(format!("  {}: ", t.t("youtubeMusic"))));
                segments.push(Segment::link(url));
            }
            ViewNode::line(segments)
        })
        .collect();
    ViewNode::section(Some(t.t("music").to_string()), rows)
}

fn videos(profile: &ArtistProfile, t: &Translator<'_>) -> ViewNode {
    let rows = profile
        .videos
        .iter()
        .map(|video| {
            ViewNode::line(vec![
                Segment::plain(&video.title),
                Segment::dim("  "),
                Segment::link(video.embed_url()),
            ])
        })
        .collect();
    ViewNode::section(Some(t.t("videos").to_string()), rows)
}

/// Events ascending by date, headed by the month of the next show.
fn upcoming_shows(profile: &ArtistProfile, t: &Translator<'_>) -> ViewNode {
    let mut title = t.t("upcomingShows").to_string();
    if let Some(month) = profile.next_event_month() {
        title = format!("{title} · {month}");
    }

    let rows = profile
        .upcoming_events()
        .into_iter()
        .map(|event| event_row(event, t))
        .collect();
    ViewNode::section(Some(title), rows)
}

fn event_row(event: &Event, t: &Translator<'_>) -> ViewNode {
    let day = event.parsed_date().map_or_else(
        || event.date.clone(),
        |date| date.format("%b %d").to_string().to_uppercase(),
    );

    let mut segments = vec![
        Segment::accent(day),
        Segment::plain(format!("  {}", event.event_name)),
        Segment::dim(format!("  {}, {}", event.venue, event.city)),
    ];
    if let Some(link) = &event.ticket_link {
        segments.push(Segment::dim(format!("  {}: ", t.t("buyTickets"))));
        segments.push(Segment::link(link));
    }
    ViewNode::line(segments)
}

fn social(profile: &ArtistProfile, t: &Translator<'_>) -> ViewNode {
    let rows = profile
        .socials
        .entries()
        .into_iter()
        .map(|(platform, url)| {
            ViewNode::line(vec![
                Segment::plain(format!("{}: ", t.t(platform))),
                Segment::link(url),
            ])
        })
        .collect();
    ViewNode::section(Some(t.t("social").to_string()), rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Language};
    use crate::seed::Seed;
    use crate::ui::viewmodel::NodeKind;

    #[test]
    fn shows_are_listed_ascending_with_month_heading() {
        let catalog = Catalog::builtin().unwrap();
        let t = catalog.translator(Language::En);
        let mut profile = Seed::embedded().unwrap().artists.remove(0);
        profile.events.reverse();

        let section = upcoming_shows(&profile, &t);
        assert_eq!(section.text(), "Upcoming Shows · 2024/09");

        let days: Vec<String> = section
            .children
            .iter()
            .map(|row| match &row.kind {
                NodeKind::Line(segments) => segments[0].text.clone(),
                _ => String::new(),
            })
            .collect();
        assert_eq!(days, vec!["SEP 10", "OCT 05"]);
    }

    #[test]
    fn no_events_means_no_month() {
        let catalog = Catalog::builtin().unwrap();
        let t = catalog.translator(Language::En);
        let mut profile = Seed::embedded().unwrap().artists.remove(0);
        profile.events.clear();

        let section = upcoming_shows(&profile, &t);
        assert_eq!(section.text(), "Upcoming Shows");
        assert!(section.children.is_empty());
    }
}
