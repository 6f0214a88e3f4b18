//! Top-level rendering coordinator.
//!
//! [`ViewRenderer`] is the store's [`Projection`]. After every state change it
//! throws away the previous [`Frame`] and builds a new one from scratch:
//! there is no diffing and no retained state between projections besides a
//! render counter.
//!
//! # Architecture
//!
//! ```text
//! AppState → render_frame → Frame { tree, bindings } → paint → ANSI output
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use musicianhub::app::{AppState, Store};
//! use musicianhub::i18n::{Catalog, Language};
//! use musicianhub::seed::Seed;
//! use musicianhub::ui::ViewRenderer;
//!
//! let seed = Seed::embedded().unwrap();
//! let renderer = ViewRenderer::new(Rc::new(Catalog::builtin().unwrap()), seed.analytics);
//! let store = Store::new(AppState::new(seed.artists, Language::Ko), renderer, true);
//!
//! let frame = store.projection().frame();
//! assert_eq!(frame.bindings.len(), 4); // search input + three cards
//! ```

use crate::app::{AppState, Projection, ViewMode};
use crate::domain::AnalyticsData;
use crate::i18n::Catalog;
use crate::ui::bindings::Bindings;
use crate::ui::components;
use crate::ui::viewmodel::{Frame, ViewNode};
use std::rc::Rc;

/// Builds a complete frame for `state`.
///
/// Pure: the same inputs always produce an equal frame.
#[must_use]
pub fn render_frame(state: &AppState, catalog: &Catalog, analytics: &AnalyticsData) -> Frame {
    let t = catalog.translator(state.language);
    let mut bindings = Bindings::default();

    let tree = match (state.view, state.selected_profile()) {
        (ViewMode::Detail, Some(profile)) => ViewNode::page(
            ViewMode::Detail,
            components::detail_view(state, profile, analytics, &t, &mut bindings),
        ),
        _ => ViewNode::page(ViewMode::List, components::list_view(state, &t, &mut bindings)),
    };

    Frame { tree, bindings }
}

/// Projection that keeps the latest rendered frame.
#[derive(Debug)]
pub struct ViewRenderer {
    catalog: Rc<Catalog>,
    analytics: AnalyticsData,
    frame: Frame,
    renders: u64,
}

impl ViewRenderer {
    #[must_use]
    pub fn new(catalog: Rc<Catalog>, analytics: AnalyticsData) -> Self {
        Self {
            catalog,
            analytics,
            frame: Frame::default(),
            renders: 0,
        }
    }

    /// The frame produced by the latest projection.
    #[must_use]
    pub const fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Number of projections so far.
    #[must_use]
    pub const fn renders(&self) -> u64 {
        self.renders
    }
}

impl Projection for ViewRenderer {
    fn project(&mut self, state: &AppState) {
        let _span = tracing::debug_span!(
            "project",
            render = self.renders + 1,
            view = ?state.view,
            tab = ?state.active_tab,
            editing = state.editing
        )
        .entered();

        self.frame = render_frame(state, &self.catalog, &self.analytics);
        self.renders += 1;

        tracing::debug!(bindings = self.frame.bindings.len(), "frame rebuilt");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Command, DetailTab};
    use crate::i18n::Language;
    use crate::seed::Seed;
    use crate::ui::bindings::Trigger;
    use crate::ui::paint::{PaintContext, Painter};
    use crate::ui::theme::Theme;
    use crate::ui::viewmodel::ElementId;
    use crate::{initialize, Config, Hub};
    use std::collections::{HashMap, HashSet};

    fn detail(name: &str, language: &str) -> Hub {
        let mut hub = initialize(&Config::default());
        hub.dispatch(&Command::SetLanguage(language.to_string()));
        hub.dispatch(&Command::SelectArtist(name.to_string()));
        hub
    }

    fn texts(hub: &Hub) -> Vec<String> {
        hub.store.projection().frame().tree.all_text()
    }

    #[test]
    fn rendering_the_same_state_twice_is_identical() {
        let seed = Seed::embedded().unwrap();
        let catalog = Catalog::builtin().unwrap();
        let mut state = AppState::new(seed.artists, Language::En);
        state.search_query = "박".to_string();

        let first = render_frame(&state, &catalog, &seed.analytics);
        let second = render_frame(&state, &catalog, &seed.analytics);
        assert_eq!(first, second);
    }

    #[test]
    fn rerenders_never_accumulate_bindings() {
        let mut hub = detail("이소현", "ko");
        let baseline = hub.store.projection().frame().bindings.len();

        for _ in 0..5 {
            hub.dispatch(&Command::SetActiveTab(DetailTab::Analytics));
            hub.dispatch(&Command::SetActiveTab(DetailTab::Profile));
        }

        let bindings = &hub.store.projection().frame().bindings;
        assert_eq!(bindings.len(), baseline);

        let keys: HashSet<(ElementId, Trigger)> = bindings
            .iter()
            .map(|b| (b.element.clone(), b.trigger))
            .collect();
        assert_eq!(keys.len(), bindings.len());
    }

    #[test]
    fn list_bindings_follow_the_filter() {
        let mut hub = initialize(&Config::default());
        hub.dispatch(&Command::ChangeSearch("김".to_string()));

        let bindings = &hub.store.projection().frame().bindings;
        assert_eq!(bindings.focus_order(), vec![&ElementId::ArtistCard("김민준".to_string())]);
        assert!(bindings.get(&ElementId::SearchInput, Trigger::Input).is_some());
    }

    #[test]
    fn detail_page_shows_upcoming_month_and_contact() {
        let hub = detail("이소현", "en");
        let texts = texts(&hub);
        let profile = hub.store.state().selected_profile().unwrap();

        assert!(texts.iter().any(|t| t == "Upcoming Shows · 2024/09"));
        assert!(texts.iter().any(|t| t == "Booking Contact"));
        assert!(texts.iter().any(|t| t.contains(&profile.contact_email)));
    }

    #[test]
    fn analytics_tab_lists_views_and_cities() {
        let mut hub = detail("박준서", "en");
        hub.dispatch(&Command::SetActiveTab(DetailTab::Analytics));
        let texts = texts(&hub);

        assert!(texts.iter().any(|t| t.contains("25,890")));
        assert!(texts.iter().any(|t| t.contains("서울")));
        assert!(texts.iter().any(|t| t == "Fan Demographics by City"));
    }

    #[test]
    fn editing_adds_overlay_and_its_bindings() {
        let mut hub = detail("김민준", "ko");
        assert!(hub.store.projection().frame().overlay().is_none());

        hub.dispatch(&Command::SetEditing(true));
        let frame = hub.store.projection().frame();

        assert!(frame.overlay().is_some());
        assert!(frame.bindings.get(&ElementId::ModalBackdrop, Trigger::Dismiss).is_some());
        assert!(frame.bindings.get(&ElementId::ModalClose, Trigger::Activate).is_some());
        assert!(frame.bindings.get(&ElementId::ModalCancel, Trigger::Activate).is_some());
        assert!(frame.bindings.get(&ElementId::EditForm, Trigger::Submit).is_some());
    }

    #[test]
    fn missing_translations_fall_back_to_keys() {
        let seed = Seed::embedded().unwrap();
        let mut catalog = Catalog::default();
        catalog.insert_table(
            Language::En,
            HashMap::from([("backToList".to_string(), "Back".to_string())]),
        );

        let mut state = AppState::new(seed.artists, Language::En);
        state.selected = Some(0);
        state.view = ViewMode::Detail;

        let frame = render_frame(&state, &catalog, &seed.analytics);
        let texts = frame.tree.all_text();
        assert!(texts.iter().any(|t| t == "Back"));
        assert!(texts.iter().any(|t| t == "editProfile"));
    }

    #[test]
    fn painting_fills_the_pane() {
        let hub = detail("이소현", "ko");
        let theme = Theme::default();
        let painter = Painter::new(&theme, 24, 60);
        let out = painter.paint(hub.store.projection().frame(), &PaintContext::default());

        assert!(out.contains("이소현"));
        for row in 1..=24 {
            assert!(out.contains(&format!("\u{1b}[{row};1H")));
        }
    }
}
