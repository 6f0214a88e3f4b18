//! Artist list page: title, search box and artist card grid.

use crate::app::{AppState, Command};
use crate::domain::ArtistProfile;
use crate::i18n::Translator;
use crate::ui::bindings::{Binding, Bindings, Intent, Trigger};
use crate::ui::helpers::{match_range, split_at_range};
use crate::ui::viewmodel::{ElementId, NodeKind, Segment, SegmentStyle, ViewNode};

/// Brand name shown above the search box.
pub const TITLE: &str = "MusicianHub";

/// Builds the list page and registers its bindings.
///
/// The card grid is recomputed from the full collection on every call. An
/// empty filter result yields an empty grid.
pub fn list_page(state: &AppState, t: &Translator<'_>, bindings: &mut Bindings) -> Vec<ViewNode> {
    let search = ViewNode::new(NodeKind::Input {
        label: String::new(),
        value: state.search_query.clone(),
        placeholder: t.t("searchPlaceholder").to_string(),
    })
    .with_element(ElementId::SearchInput);

    bindings.register(Binding {
        element: ElementId::SearchInput,
        trigger: Trigger::Input,
        hotkey: None,
        intent: Intent::SearchInput,
    });

    let cards = state
        .filtered_artists()
        .into_iter()
        .map(|artist| artist_card(artist, &state.search_query, bindings))
        .collect();

    vec![
        ViewNode::line(vec![Segment::strong(TITLE)]),
        ViewNode::line(vec![Segment::dim(t.t("discoverArtists"))]),
        ViewNode::new(NodeKind::Gap),
        search,
        ViewNode::new(NodeKind::Gap),
        ViewNode::section(None, cards),
    ]
}

fn artist_card(artist: &ArtistProfile, query: &str, bindings: &mut Bindings) -> ViewNode {
    let element = ElementId::ArtistCard(artist.name.clone());
    bindings.register(Binding::command(
        element.clone(),
        Command::SelectArtist(artist.name.clone()),
    ));

    ViewNode::new(NodeKind::Card {
        image: artist.profile_picture.clone(),
        title: highlighted_name(&artist.name, query),
        subtitle: artist.genre.clone(),
    })
    .with_element(element)
}

/// Splits `name` into segments with the search match highlighted.
fn highlighted_name(name: &str, query: &str) -> Vec<Segment> {
    let Some(range) = match_range(name, query) else {
        return vec![Segment::strong(name)];
    };

    let (before, matched, after) = split_at_range(name, range);
    [
        Segment::strong(before),
        Segment::new(matched, SegmentStyle::Match),
        Segment::strong(after),
    ]
    .into_iter()
    .filter(|segment| !segment.text.is_empty())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_marks_only_the_match() {
        let segments = highlighted_name("Park Junseo", "jun");
        let styles: Vec<SegmentStyle> = segments.iter().map(|s| s.style).collect();
        assert_eq!(styles, vec![SegmentStyle::Strong, SegmentStyle::Match, SegmentStyle::Strong]);
        assert_eq!(segments[1].text, "Jun");
    }

    #[test]
    fn no_query_means_no_highlight() {
        assert_eq!(highlighted_name("Kim", ""), vec![Segment::strong("Kim")]);
    }
}
