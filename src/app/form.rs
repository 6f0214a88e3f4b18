//! Edit form values and profile reconstruction.
//!
//! The edit overlay exposes the editable subset of an [`ArtistProfile`] as
//! plain text fields. [`EditForm::prefill`] fills them from a profile and
//! [`EditForm::into_profile`] rebuilds a whole profile from the field values,
//! taking music, videos and events from the profile the form was opened for.

use crate::domain::{ArtistProfile, SocialLinks};
use std::collections::HashMap;

/// One editable text field of the profile form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Name,
    Genre,
    Location,
    Members,
    Bio,
    ProfilePicture,
    CoverImage,
    Youtube,
    Instagram,
    Twitter,
    Facebook,
    ContactEmail,
}

impl FormField {
    /// All fields in tab order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Name,
            Self::Genre,
            Self::Location,
            Self::Members,
            Self::Bio,
            Self::ProfilePicture,
            Self::CoverImage,
            Self::Youtube,
            Self::Instagram,
            Self::Twitter,
            Self::Facebook,
            Self::ContactEmail,
        ]
    }

    /// Translation key of the field label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Name => "artistName",
            Self::Genre => "genre",
            Self::Location => "location",
            Self::Members => "membersInputLabel",
            Self::Bio => "bio",
            Self::ProfilePicture => "profilePicURL",
            Self::CoverImage => "coverImageURL",
            Self::Youtube => "youtubeURL",
            Self::Instagram => "instagramURL",
            Self::Twitter => "twitterURL",
            Self::Facebook => "facebookURL",
            Self::ContactEmail => "contactEmail",
        }
    }

    /// Form control name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Genre => "genre",
            Self::Location => "location",
            Self::Members => "members",
            Self::Bio => "bio",
            Self::ProfilePicture => "profilePicture",
            Self::CoverImage => "coverImage",
            Self::Youtube => "youtube",
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::ContactEmail => "contactEmail",
        }
    }

    /// Whether the field starts a new group (social links) in the form layout.
    #[must_use]
    pub const fn starts_section(self) -> bool {
        matches!(self, Self::Youtube)
    }

    /// The field after this one, wrapping to the first.
    #[must_use]
    pub fn next(self) -> Self {
        let all = Self::all();
        let index = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    /// The field before this one, wrapping to the last.
    #[must_use]
    pub fn previous(self) -> Self {
        let all = Self::all();
        let index = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(index + all.len() - 1) % all.len()]
    }
}

/// Text values of the profile form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    values: HashMap<FormField, String>,
}

impl EditForm {
    /// Fills every field from `profile`. Members are joined with `", "`.
    #[must_use]
    pub fn prefill(profile: &ArtistProfile) -> Self {
        let socials = &profile.socials;
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        let values = HashMap::from([
            (FormField::Name, profile.name.clone()),
            (FormField::Genre, profile.genre.clone()),
            (FormField::Location, profile.location.clone()),
            (FormField::Members, profile.members.join(", ")),
            (FormField::Bio, profile.bio.clone()),
            (FormField::ProfilePicture, profile.profile_picture.clone()),
            (FormField::CoverImage, profile.cover_image.clone()),
            (FormField::Youtube, text(&socials.youtube)),
            (FormField::Instagram, text(&socials.instagram)),
            (FormField::Twitter, text(&socials.twitter)),
            (FormField::Facebook, text(&socials.facebook)),
            (FormField::ContactEmail, profile.contact_email.clone()),
        ]);
        Self { values }
    }

    /// Current text of `field`.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn push_char(&mut self, field: FormField, c: char) {
        self.values.entry(field).or_default().push(c);
    }

    pub fn pop_char(&mut self, field: FormField) {
        if let Some(value) = self.values.get_mut(&field) {
            value.pop();
        }
    }

    /// Rebuilds a complete profile from the field values.
    ///
    /// Text fields are taken verbatim. Members are split on commas, trimmed,
    /// and empty entries dropped. An empty social URL means the platform is
    /// not linked. Music, videos and events are copied from `base` because
    /// the form does not expose them.
    #[must_use]
    pub fn into_profile(&self, base: &ArtistProfile) -> ArtistProfile {
        let link = |field: FormField| {
            let url = self.value(field).trim();
            (!url.is_empty()).then(|| url.to_string())
        };

        ArtistProfile {
            name: self.value(FormField::Name).to_string(),
            genre: self.value(FormField::Genre).to_string(),
            location: self.value(FormField::Location).to_string(),
            members: self
                .value(FormField::Members)
                .split(',')
                .map(str::trim)
                .filter(|member| !member.is_empty())
                .map(String::from)
                .collect(),
            bio: self.value(FormField::Bio).to_string(),
            profile_picture: self.value(FormField::ProfilePicture).to_string(),
            cover_image: self.value(FormField::CoverImage).to_string(),
            contact_email: self.value(FormField::ContactEmail).to_string(),
            socials: SocialLinks {
                instagram: link(FormField::Instagram),
                youtube: link(FormField::Youtube),
                facebook: link(FormField::Facebook),
                twitter: link(FormField::Twitter),
            },
            music: base.music.clone(),
            videos: base.videos.clone(),
            events: base.events.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::Seed;

    fn band() -> ArtistProfile {
        let mut profile = Seed::embedded().unwrap().artists.remove(0);
        profile.members = vec!["Kim".to_string(), "Lee".to_string()];
        profile
    }

    #[test]
    fn prefill_then_rebuild_is_identity() {
        let profile = band();
        let form = EditForm::prefill(&profile);
        assert_eq!(form.into_profile(&profile), profile);
    }

    #[test]
    fn members_are_split_trimmed_and_filtered() {
        let profile = band();
        let mut form = EditForm::prefill(&profile);
        form.set(FormField::Members, " Kim ,, Lee,  ,Park ");

        let rebuilt = form.into_profile(&profile);
        assert_eq!(rebuilt.members, vec!["Kim", "Lee", "Park"]);
    }

    #[test]
    fn blank_social_url_unlinks_platform() {
        let profile = band();
        let mut form = EditForm::prefill(&profile);
        form.set(FormField::Youtube, "   ");
        form.set(FormField::Facebook, "https://facebook.com/band");

        let rebuilt = form.into_profile(&profile);
        assert_eq!(rebuilt.socials.youtube, None);
        assert_eq!(rebuilt.socials.facebook.as_deref(), Some("https://facebook.com/band"));
    }

    #[test]
    fn rebuilt_profile_keeps_media_from_base() {
        let profile = band();
        let mut form = EditForm::prefill(&profile);
        form.set(FormField::Name, "Renamed");

        let rebuilt = form.into_profile(&profile);
        assert_eq!(rebuilt.name, "Renamed");
        assert_eq!(rebuilt.music, profile.music);
        assert_eq!(rebuilt.videos, profile.videos);
        assert_eq!(rebuilt.events, profile.events);
    }

    #[test]
    fn typing_edits_the_field() {
        let mut form = EditForm::default();
        form.push_char(FormField::Genre, 'J');
        form.push_char(FormField::Genre, 'z');
        form.pop_char(FormField::Genre);
        assert_eq!(form.value(FormField::Genre), "J");
        assert_eq!(form.value(FormField::Bio), "");
    }

    #[test]
    fn field_cycle_wraps() {
        assert_eq!(FormField::ContactEmail.next(), FormField::Name);
        assert_eq!(FormField::Name.previous(), FormField::ContactEmail);
    }
}
