//! Language context passed to presentation code.

use crate::{lookup, table, Direction, Language};

/// The active language for a storefront session.
///
/// Holds the only piece of mutable i18n state. Presentation code receives
/// this by reference instead of reaching for a global.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageContext {
    language: Language,
}

impl LanguageContext {
    /// Create a context for the given language.
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch the active language.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Text direction for the active language.
    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    /// Translate a key in the active language.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        lookup(key, self.language)
    }

    /// Translate a key and substitute `{name}` placeholders.
    pub fn t_with(&self, key: &str, args: &[(&str, String)]) -> String {
        table::format(key, self.language, args)
    }
}
