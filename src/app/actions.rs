//! Side effects requested by command handlers.
//!
//! Handlers never touch the host directly. They return a `Vec<Action>` and the
//! plugin runtime executes each one through [`perform`] against a [`Host`]
//! implementation. All actions are fire-and-forget: nothing a host returns
//! flows back into the state.
//!
//! # Example
//!
//! ```rust
//! use musicianhub::app::{perform, Action, Host};
//! use musicianhub::i18n::Language;
//!
//! #[derive(Default)]
//! struct Log(Vec<String>);
//!
//! impl Host for Log {
//!     fn location(&self) -> String {
//!         "https://example.test/".to_string()
//!     }
//!     fn write_clipboard(&mut self, text: &str) {
//!         self.0.push(format!("clip {text}"));
//!     }
//!     fn alert(&mut self, message: &str) {
//!         self.0.push(format!("alert {message}"));
//!     }
//!     fn set_document_language(&mut self, language: Language) {
//!         self.0.push(format!("lang {language}"));
//!     }
//! }
//!
//! let mut host = Log::default();
//! perform(&Action::CopyLocation, &mut host);
//! assert_eq!(host.0, vec!["clip https://example.test/"]);
//! ```

use crate::i18n::Language;

/// Effects on the host environment, produced by the command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Copies the host's current location to the clipboard.
    CopyLocation,

    /// Shows an already-localized message to the user.
    Alert(String),

    /// Updates the document-level language attribute.
    ///
    /// Emitted after a successful language switch. The attribute lives in the
    /// host, not in the state.
    SetDocumentLanguage(Language),
}

/// Host environment facilities used by [`Action`]s.
pub trait Host {
    /// URL of the current page, copied by the share action.
    fn location(&self) -> String;

    /// Writes `text` to the system clipboard.
    fn write_clipboard(&mut self, text: &str);

    /// Surfaces a user-visible message.
    fn alert(&mut self, message: &str);

    /// Records the document language.
    fn set_document_language(&mut self, language: Language);
}

/// Executes one action against `host`.
pub fn perform<H: Host + ?Sized>(action: &Action, host: &mut H) {
    tracing::debug!(action = ?action, "performing action");

    match action {
        Action::CopyLocation => {
            let location = host.location();
            host.write_clipboard(&location);
        }
        Action::Alert(message) => host.alert(message),
        Action::SetDocumentLanguage(language) => host.set_document_language(*language),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        clipboard: Option<String>,
        alerts: Vec<String>,
        language: Option<Language>,
    }

    impl Host for Recorder {
        fn location(&self) -> String {
            "https://musicianhub.app/".to_string()
        }

        fn write_clipboard(&mut self, text: &str) {
            self.clipboard = Some(text.to_string());
        }

        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }

        fn set_document_language(&mut self, language: Language) {
            self.language = Some(language);
        }
    }

    #[test]
    fn copy_location_writes_current_url() {
        let mut host = Recorder::default();
        perform(&Action::CopyLocation, &mut host);
        assert_eq!(host.clipboard.as_deref(), Some("https://musicianhub.app/"));
        assert!(host.alerts.is_empty());
    }

    #[test]
    fn alert_and_language_reach_the_host() {
        let mut host = Recorder::default();
        perform(&Action::Alert("done".to_string()), &mut host);
        perform(&Action::SetDocumentLanguage(Language::En), &mut host);
        assert_eq!(host.alerts, vec!["done"]);
        assert_eq!(host.language, Some(Language::En));
    }
}
