//! Translation collaborator.
//!
//! A two-level lookup: [`Language`] → message key → localized string. Tables
//! are flat TOML documents compiled into the plugin, one per supported
//! language. A key missing from a table resolves to the key itself, so an
//! untranslated label shows up as its raw key instead of an empty string.
//!
//! # Example
//!
//! ```rust
//! use musicianhub::i18n::{Catalog, Language};
//!
//! let catalog = Catalog::builtin().unwrap();
//! assert_eq!(catalog.lookup(Language::En, "profile"), "Profile");
//! assert_eq!(catalog.lookup(Language::En, "noSuchKey"), "noSuchKey");
//! ```

use crate::domain::{HubError, Result};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Korean. The default.
    #[default]
    Ko,
    /// English.
    En,
}

impl Language {
    /// All supported languages, in toggle order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Ko, Self::En]
    }

    /// Language code as used in configuration and the document language.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::En => "en",
        }
    }

    /// Short label for the language toggle.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ko => "KO",
            Self::En => "EN",
        }
    }

    /// Parses a supported language code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "ko" => Some(Self::Ko),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    const fn table_source(self) -> &'static str {
        match self {
            Self::Ko => include_str!("../../locales/ko.toml"),
            Self::En => include_str!("../../locales/en.toml"),
        }
    }
}

impl FromStr for Language {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s).ok_or_else(|| HubError::UnsupportedLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Message tables for every supported language.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: HashMap<Language, HashMap<String, String>>,
}

impl Catalog {
    /// Loads the translation tables compiled into the plugin.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Locale`] if a built-in table fails to parse.
    pub fn builtin() -> Result<Self> {
        let mut catalog = Self::default();
        for &language in Language::all() {
            catalog.insert_toml(language, language.table_source())?;
        }
        tracing::debug!(languages = catalog.tables.len(), "translation catalog loaded");
        Ok(catalog)
    }

    /// Parses a flat `key = "value"` TOML table and installs it for `language`,
    /// replacing any previous table.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Locale`] on invalid TOML or non-string values.
    pub fn insert_toml(&mut self, language: Language, source: &str) -> Result<()> {
        let table: HashMap<String, String> = toml::from_str(source)
            .map_err(|e| HubError::Locale(format!("{language} table: {e}")))?;
        self.tables.insert(language, table);
        Ok(())
    }

    /// Installs an already-built table for `language`.
    pub fn insert_table(&mut self, language: Language, table: HashMap<String, String>) {
        self.tables.insert(language, table);
    }

    /// Resolves `key` in `language`, falling back to the key itself.
    #[must_use]
    pub fn lookup<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        self.tables
            .get(&language)
            .and_then(|table| table.get(key))
            .map_or(key, String::as_str)
    }

    /// Returns a translator bound to one language.
    #[must_use]
    pub const fn translator(&self, language: Language) -> Translator<'_> {
        Translator { catalog: self, language }
    }
}

/// A [`Catalog`] view fixed to one language, handed to view components.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    catalog: &'a Catalog,
    language: Language,
}

impl<'a> Translator<'a> {
    /// Localized string for `key`, or the key itself when unmapped.
    #[must_use]
    pub fn t(&self, key: &'a str) -> &'a str {
        self.catalog.lookup(self.language, key)
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }
}
