//! Profile header: cover, avatar, name, genre, location and members.

use crate::domain::ArtistProfile;
use crate::i18n::Translator;
use crate::ui::viewmodel::{Segment, ViewNode};

/// Builds the header block of the detail page.
///
/// The member line is omitted for solo artists.
///
/// # Layout
///
/// ```text
/// ▒ cover: https://...
/// ◉ avatar: https://...
/// 이소현
/// 소프라노 · 서울, 대한민국
/// Members: ...
/// ```
pub fn profile_header(profile: &ArtistProfile, t: &Translator<'_>) -> Vec<ViewNode> {
    let mut lines = vec![
        ViewNode::line(vec![Segment::dim("▒ "), Segment::link(&profile.cover_image)]),
        ViewNode::line(vec![Segment::dim("◉ "), Segment::link(&profile.profile_picture)]),
        ViewNode::line(vec![Segment::strong(&profile.name)]),
        ViewNode::line(vec![
            Segment::accent(&profile.genre),
            Segment::dim(" · "),
            Segment::plain(&profile.location),
        ]),
    ];

    if let Some(members) = profile.members_line() {
        lines.push(ViewNode::line(vec![
            Segment::dim(format!("{}: ", t.t("members"))),
            Segment::plain(members),
        ]));
    }

    lines
}
