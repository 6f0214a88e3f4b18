//! Terminal session: keyboard interaction and host effects for one pane.
//!
//! The session owns what the terminal needs beyond the application state:
//! keyboard focus, the edit form draft, the notice bar, pending clipboard
//! writes and the document language. Keys are resolved against the bindings
//! of the current frame, never against view internals, so whatever the
//! renderer registered is exactly what the keyboard can reach.
//!
//! # Keys
//!
//! | Context      | Key                    | Effect                                  |
//! |--------------|------------------------|-----------------------------------------|
//! | list         | characters, Backspace  | edit the search text                    |
//! | list         | Up / Down              | move focus across the cards             |
//! | list         | Enter                  | open the focused (or first) card        |
//! | list         | Esc                    | clear the search, or hide when empty    |
//! | detail       | hotkeys                | activate the bound button               |
//! | detail       | Esc                    | back to the list                        |
//! | edit overlay | Tab / Down, BackTab / Up | cycle fields                          |
//! | edit overlay | characters, Backspace  | edit the focused field                  |
//! | edit overlay | Enter / Esc            | submit / dismiss                        |
//! | any          | PageUp / PageDown      | scroll                                  |

use crate::app::{perform, Command, EditForm, FormField, Host, ViewMode};
use crate::i18n::Language;
use crate::ui::bindings::{Payload, Trigger};
use crate::ui::paint::{PaintContext, Painter};
use crate::ui::viewmodel::ElementId;
use crate::Hub;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Rows moved by PageUp / PageDown.
const PAGE_ROWS: usize = 10;

/// Keys the session reacts to, already stripped of terminal specifics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Up,
    Down,
    Tab,
    BackTab,
    Enter,
    Esc,
    PageUp,
    PageDown,
}

/// What the plugin should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Repaint the pane.
    Redraw,
    /// Nothing visible changed.
    Ignored,
    /// Close the plugin pane.
    Hide,
}

/// Interaction state of one terminal pane; also the [`Host`] for actions.
#[derive(Debug, Clone)]
pub struct TerminalSession {
    location: String,
    focus: Option<ElementId>,
    draft: Option<EditForm>,
    field: FormField,
    notice: Option<String>,
    clipboard: Option<String>,
    document_language: Language,
    scroll: usize,
}

impl TerminalSession {
    #[must_use]
    pub fn new(location: impl Into<String>, language: Language) -> Self {
        Self {
            location: location.into(),
            focus: None,
            draft: None,
            field: FormField::Name,
            notice: None,
            clipboard: None,
            document_language: language,
            scroll: 0,
        }
    }

    #[must_use]
    pub const fn focus(&self) -> Option<&ElementId> {
        self.focus.as_ref()
    }

    #[must_use]
    pub const fn draft(&self) -> Option<&EditForm> {
        self.draft.as_ref()
    }

    #[must_use]
    pub const fn focused_field(&self) -> FormField {
        self.field
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Clipboard text waiting to be emitted with the next paint.
    #[must_use]
    pub fn pending_clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    #[must_use]
    pub const fn document_language(&self) -> Language {
        self.document_language
    }

    /// Handles one key against the hub's current frame.
    pub fn handle_key(&mut self, hub: &mut Hub, key: Key) -> Outcome {
        let _span = tracing::debug_span!("handle_key", key = ?key).entered();

        let had_notice = self.notice.take().is_some();

        let outcome = match key {
            Key::PageUp => {
                self.scroll = self.scroll.saturating_sub(PAGE_ROWS);
                Outcome::Redraw
            }
            Key::PageDown => {
                self.scroll += PAGE_ROWS;
                Outcome::Redraw
            }
            _ if hub.store.state().editing => self.edit_key(hub, key),
            _ => match hub.store.state().view {
                ViewMode::List => self.list_key(hub, key),
                ViewMode::Detail => self.detail_key(hub, key),
            },
        };

        match outcome {
            Outcome::Ignored if had_notice => Outcome::Redraw,
            other => other,
        }
    }

    fn list_key(&mut self, hub: &mut Hub, key: Key) -> Outcome {
        match key {
            Key::Char(c) => {
                let mut text = hub.store.state().search_query.clone();
                text.push(c);
                self.search(hub, &text)
            }
            Key::Backspace => {
                let mut text = hub.store.state().search_query.clone();
                if text.pop().is_none() {
                    return Outcome::Ignored;
                }
                self.search(hub, &text)
            }
            Key::Down | Key::Tab => self.move_focus(hub, 1),
            Key::Up | Key::BackTab => self.move_focus(hub, -1),
            Key::Enter => {
                let frame = hub.store.projection().frame();
                let target = self
                    .focus
                    .clone()
                    .or_else(|| frame.bindings.focus_order().first().map(|e| (*e).clone()));
                let command = target.and_then(|element| {
                    frame
                        .bindings
                        .get(&element, Trigger::Activate)
                        .and_then(|b| b.resolve(Payload::None))
                });
                self.run(hub, command)
            }
            Key::Esc if hub.store.state().search_query.is_empty() => Outcome::Hide,
            Key::Esc => self.search(hub, ""),
            _ => Outcome::Ignored,
        }
    }

    fn detail_key(&mut self, hub: &mut Hub, key: Key) -> Outcome {
        let bindings = &hub.store.projection().frame().bindings;
        let command = match key {
            Key::Char(c) => bindings.by_hotkey(c).and_then(|b| b.resolve(Payload::None)),
            Key::Esc => bindings
                .get(&ElementId::Back, Trigger::Activate)
                .and_then(|b| b.resolve(Payload::None)),
            Key::Down => {
                self.scroll += 1;
                return Outcome::Redraw;
            }
            Key::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                return Outcome::Redraw;
            }
            _ => None,
        };
        self.run(hub, command)
    }

    fn edit_key(&mut self, hub: &mut Hub, key: Key) -> Outcome {
        match key {
            Key::Tab | Key::Down => {
                self.field = self.field.next();
                Outcome::Redraw
            }
            Key::BackTab | Key::Up => {
                self.field = self.field.previous();
                Outcome::Redraw
            }
            Key::Char(c) => {
                self.with_draft(|draft, field| draft.push_char(field, c));
                Outcome::Redraw
            }
            Key::Backspace => {
                self.with_draft(|draft, field| draft.pop_char(field));
                Outcome::Redraw
            }
            Key::Enter => {
                let submit = hub
                    .store
                    .projection()
                    .frame()
                    .bindings
                    .first_with(Trigger::Submit);
                let command = match (&self.draft, submit) {
                    (Some(draft), Some(binding)) => binding.resolve(Payload::Form(draft)),
                    _ => None,
                };
                self.run(hub, command)
            }
            Key::Esc => {
                let command = hub
                    .store
                    .projection()
                    .frame()
                    .bindings
                    .first_with(Trigger::Dismiss)
                    .and_then(|b| b.resolve(Payload::None));
                self.run(hub, command)
            }
            _ => Outcome::Ignored,
        }
    }

    fn with_draft(&mut self, edit: impl FnOnce(&mut EditForm, FormField)) {
        let field = self.field;
        if let Some(draft) = self.draft.as_mut() {
            edit(draft, field);
        }
    }

    fn search(&mut self, hub: &mut Hub, text: &str) -> Outcome {
        let command = hub
            .store
            .projection()
            .frame()
            .bindings
            .first_with(Trigger::Input)
            .and_then(|b| b.resolve(Payload::Text(text)));
        self.run(hub, command)
    }

    fn move_focus(&mut self, hub: &Hub, step: isize) -> Outcome {
        let order = hub.store.projection().frame().bindings.focus_order();
        if order.is_empty() {
            return Outcome::Ignored;
        }

        let len = order.len() as isize;
        let next = match self.focus.as_ref().and_then(|f| order.iter().position(|e| *e == f)) {
            Some(current) => (current as isize + step).rem_euclid(len),
            None if step > 0 => 0,
            None => len - 1,
        };
        self.focus = Some(order[next as usize].clone());
        Outcome::Redraw
    }

    /// Dispatches `command`, performs its actions and re-syncs the session
    /// with the new frame.
    fn run(&mut self, hub: &mut Hub, command: Option<Command>) -> Outcome {
        let Some(command) = command else {
            return Outcome::Ignored;
        };

        let view_before = hub.store.state().view;
        let revision_before = hub.store.revision();

        let actions = hub.dispatch(&command);
        for action in &actions {
            perform(action, self);
        }

        if hub.store.state().view != view_before {
            self.scroll = 0;
        }
        self.sync(hub);

        if hub.store.revision() != revision_before || !actions.is_empty() {
            Outcome::Redraw
        } else {
            Outcome::Ignored
        }
    }

    /// Drops focus that left the frame and opens or discards the draft to
    /// follow the editing flag.
    fn sync(&mut self, hub: &Hub) {
        let state = hub.store.state();
        let bindings = &hub.store.projection().frame().bindings;

        if let Some(focus) = &self.focus {
            if !bindings.focus_order().contains(&focus) {
                self.focus = None;
            }
        }

        match (state.editing, state.selected_profile()) {
            (true, Some(profile)) if self.draft.is_none() => {
                self.draft = Some(EditForm::prefill(profile));
                self.field = FormField::Name;
            }
            (true, _) => {}
            (false, _) => self.draft = None,
        }
    }

    /// Paints the current frame, flushing any pending clipboard write as an
    /// OSC 52 sequence in front of it.
    pub fn paint(&mut self, hub: &Hub, rows: usize, cols: usize) -> String {
        let mut out = String::new();
        if let Some(text) = self.clipboard.take() {
            out.push_str(&osc52(&text));
        }

        let status = self.document_language.label();
        let ctx = PaintContext {
            focus: self.focus.as_ref(),
            draft: self.draft.as_ref(),
            focused_field: self.draft.as_ref().map(|_| self.field),
            notice: self.notice.as_deref(),
            status: Some(status),
            scroll: self.scroll,
        };
        let painter = Painter::new(&hub.theme, rows, cols);
        out.push_str(&painter.paint(hub.store.projection().frame(), &ctx));
        out
    }
}

impl Host for TerminalSession {
    fn location(&self) -> String {
        self.location.clone()
    }

    fn write_clipboard(&mut self, text: &str) {
        self.clipboard = Some(text.to_string());
    }

    fn alert(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }

    fn set_document_language(&mut self, language: Language) {
        self.document_language = language;
    }
}

/// OSC 52 "set clipboard" sequence for `text`.
#[must_use]
pub fn osc52(text: &str) -> String {
    format!("\u{1b}]52;c;{}\u{7}", STANDARD.encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::DetailTab;
    use crate::{initialize, Config};

    fn setup() -> (Hub, TerminalSession) {
        let config = Config::default();
        let hub = initialize(&config);
        let session = TerminalSession::new(config.location, hub.store.state().language);
        (hub, session)
    }

    fn press(session: &mut TerminalSession, hub: &mut Hub, keys: &[Key]) {
        for key in keys {
            session.handle_key(hub, *key);
        }
    }

    #[test]
    fn typing_filters_and_enter_opens_the_only_card() {
        let (mut hub, mut session) = setup();
        press(&mut session, &mut hub, &[Key::Char('박'), Key::Enter]);

        let state = hub.store.state();
        assert_eq!(state.view, ViewMode::Detail);
        assert_eq!(state.selected_profile().map(|p| p.name.as_str()), Some("박준서"));
    }

    #[test]
    fn focus_wraps_across_cards() {
        let (mut hub, mut session) = setup();
        press(&mut session, &mut hub, &[Key::Up]);
        let last = hub.store.state().artists[2].name.clone();
        assert_eq!(session.focus(), Some(&ElementId::ArtistCard(last)));

        press(&mut session, &mut hub, &[Key::Down]);
        let first = hub.store.state().artists[0].name.clone();
        assert_eq!(session.focus(), Some(&ElementId::ArtistCard(first)));
    }

    #[test]
    fn esc_on_empty_search_hides() {
        let (mut hub, mut session) = setup();
        assert_eq!(session.handle_key(&mut hub, Key::Esc), Outcome::Hide);

        press(&mut session, &mut hub, &[Key::Char('x')]);
        assert_eq!(session.handle_key(&mut hub, Key::Esc), Outcome::Redraw);
        assert!(hub.store.state().search_query.is_empty());
    }

    #[test]
    fn hotkeys_switch_tabs_and_share_copies_location() {
        let (mut hub, mut session) = setup();
        press(&mut session, &mut hub, &[Key::Enter, Key::Char('a')]);
        assert_eq!(hub.store.state().active_tab, DetailTab::Analytics);

        press(&mut session, &mut hub, &[Key::Char('s')]);
        assert_eq!(session.pending_clipboard(), Some(crate::DEFAULT_LOCATION));
        assert!(session.notice().is_some());

        let painted = session.paint(&hub, 30, 80);
        assert!(painted.starts_with(&osc52(crate::DEFAULT_LOCATION)));
        assert_eq!(session.pending_clipboard(), None);

        // The notice lasts until the next key.
        press(&mut session, &mut hub, &[Key::PageDown]);
        assert_eq!(session.notice(), None);
    }

    #[test]
    fn language_hotkey_updates_document_language() {
        let (mut hub, mut session) = setup();
        press(&mut session, &mut hub, &[Key::Enter, Key::Char('E')]);
        assert_eq!(hub.store.state().language, Language::En);
        assert_eq!(session.document_language(), Language::En);
    }

    #[test]
    fn edit_overlay_types_into_the_draft_and_submits() {
        let (mut hub, mut session) = setup();
        press(&mut session, &mut hub, &[Key::Enter, Key::Char('e')]);
        assert!(hub.store.state().editing);
        assert_eq!(session.focused_field(), FormField::Name);

        press(&mut session, &mut hub, &[Key::Tab, Key::Backspace, Key::Backspace]);
        let typed: Vec<Key> = "Jazz".chars().map(Key::Char).collect();
        press(&mut session, &mut hub, &typed);
        let genre = session.draft().map(|d| d.value(FormField::Genre).to_string());
        assert!(genre.is_some_and(|g| g.ends_with("Jazz")));

        press(&mut session, &mut hub, &[Key::Enter]);
        let state = hub.store.state();
        assert!(!state.editing);
        assert!(session.draft().is_none());
        assert!(state.artists[0].genre.ends_with("Jazz"));
    }

    #[test]
    fn esc_in_overlay_discards_changes() {
        let (mut hub, mut session) = setup();
        let before = hub.store.state().artists[0].clone();
        press(&mut session, &mut hub, &[Key::Enter, Key::Char('e'), Key::Char('!'), Key::Esc]);

        let state = hub.store.state();
        assert!(!state.editing);
        assert_eq!(state.artists[0], before);
        assert_eq!(state.view, ViewMode::Detail);
    }

    #[test]
    fn osc52_encodes_base64() {
        assert_eq!(osc52("hi"), "\u{1b}]52;c;aGk=\u{7}");
    }
}
