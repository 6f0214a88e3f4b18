//! Interaction bindings attached to a rendered frame.
//!
//! Every projection starts from an empty [`Bindings`] registry and registers
//! one [`Binding`] per interactive element. The registry is keyed by
//! `(element, trigger)`: registering the same pair again replaces the earlier
//! binding, so a frame never carries duplicates. Old bindings are dropped with
//! the old frame.
//!
//! Bindings are data, not callbacks. The host resolves a binding together
//! with the user's input into a [`Command`] and hands it to the command
//! handlers.
//!
//! # Example
//!
//! ```rust
//! use musicianhub::app::Command;
//! use musicianhub::ui::bindings::{Binding, Bindings, Payload, Trigger};
//! use musicianhub::ui::viewmodel::ElementId;
//!
//! let mut bindings = Bindings::default();
//! bindings.register(Binding::command(ElementId::Share, Command::Share).with_hotkey('s'));
//! bindings.register(Binding::command(ElementId::Share, Command::Share).with_hotkey('s'));
//! assert_eq!(bindings.len(), 1);
//!
//! let binding = bindings.by_hotkey('s').unwrap();
//! assert_eq!(binding.resolve(Payload::None), Some(Command::Share));
//! assert_eq!(binding.trigger, Trigger::Activate);
//! ```

use crate::app::{Command, EditForm};
use crate::domain::ArtistProfile;
use crate::ui::viewmodel::ElementId;

/// Kind of user interaction a binding reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Click or Enter.
    Activate,
    /// Text entry.
    Input,
    /// Form submission.
    Submit,
    /// Click outside or Esc.
    Dismiss,
}

/// What a binding does when triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A fixed command.
    Command(Command),
    /// Search text entry; the typed text becomes a `ChangeSearch`.
    SearchInput,
    /// Edit form submission; the form values are rebuilt on top of `base`.
    SubmitProfile { base: Box<ArtistProfile> },
}

/// Data supplied by the host along with a triggered binding.
#[derive(Debug, Clone, Copy)]
pub enum Payload<'a> {
    None,
    Text(&'a str),
    Form(&'a EditForm),
}

/// One element/trigger pair and its intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub element: ElementId,
    pub trigger: Trigger,
    /// Key that triggers the binding directly, if any.
    pub hotkey: Option<char>,
    pub intent: Intent,
}

impl Binding {
    /// An `Activate` binding issuing a fixed command.
    #[must_use]
    pub const fn command(element: ElementId, command: Command) -> Self {
        Self {
            element,
            trigger: Trigger::Activate,
            hotkey: None,
            intent: Intent::Command(command),
        }
    }

    #[must_use]
    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    #[must_use]
    pub fn with_hotkey(mut self, hotkey: char) -> Self {
        self.hotkey = Some(hotkey);
        self
    }

    /// Turns the binding plus user input into a command.
    ///
    /// Returns `None` when the payload does not fit the intent, e.g. a search
    /// input triggered without text.
    #[must_use]
    pub fn resolve(&self, payload: Payload<'_>) -> Option<Command> {
        match (&self.intent, payload) {
            (Intent::Command(command), _) => Some(command.clone()),
            (Intent::SearchInput, Payload::Text(text)) => {
                Some(Command::ChangeSearch(text.to_string()))
            }
            (Intent::SubmitProfile { base }, Payload::Form(form)) => Some(Command::SaveProfile {
                original_name: base.name.clone(),
                profile: Box::new(form.into_profile(base)),
            }),
            _ => None,
        }
    }
}

/// Bindings of one frame, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    entries: Vec<Binding>,
}

impl Bindings {
    /// Adds `binding`, replacing any binding for the same element and trigger.
    pub fn register(&mut self, binding: Binding) {
        let existing = self
            .entries
            .iter_mut()
            .find(|b| b.element == binding.element && b.trigger == binding.trigger);

        match existing {
            Some(slot) => {
                tracing::trace!(element = ?binding.element, "binding replaced");
                *slot = binding;
            }
            None => self.entries.push(binding),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.entries.iter()
    }

    /// The binding for `element` reacting to `trigger`.
    #[must_use]
    pub fn get(&self, element: &ElementId, trigger: Trigger) -> Option<&Binding> {
        self.entries
            .iter()
            .find(|b| &b.element == element && b.trigger == trigger)
    }

    /// The binding whose hotkey is `key`.
    #[must_use]
    pub fn by_hotkey(&self, key: char) -> Option<&Binding> {
        self.entries.iter().find(|b| b.hotkey == Some(key))
    }

    /// The first binding reacting to `trigger`, whatever its element.
    #[must_use]
    pub fn first_with(&self, trigger: Trigger) -> Option<&Binding> {
        self.entries.iter().find(|b| b.trigger == trigger)
    }

    /// Elements that can be activated without a hotkey, in registration
    /// order. The host cycles keyboard focus through them.
    #[must_use]
    pub fn focus_order(&self) -> Vec<&ElementId> {
        self.entries
            .iter()
            .filter(|b| b.trigger == Trigger::Activate && b.hotkey.is_none())
            .map(|b| &b.element)
            .collect()
    }
}
