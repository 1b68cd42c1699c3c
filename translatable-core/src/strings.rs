//! Localized UI strings.
//!
//! The table is an explicit value handed to whoever renders UI text; nothing here reads the
//! environment. Lookups walk a fallback chain: the requested locale, its base language
//! (`pt-BR` → `pt`), then the table's default locale.

use std::collections::HashMap;

/// Id of the message returned when a string id is unknown
pub const STRING_MISSING: &str = "string_missing";
/// Id of the message describing an unsupported locale
pub const LANG_NOT_SUPPORTED: &str = "lang_not_supported";

const BUILTIN_STRING_MISSING: &str = "String Id missing";

/// Strings keyed by locale, then by string id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTable {
    default_locale: String,
    tables: HashMap<String, HashMap<String, String>>,
}

impl Default for StringTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StringTable {
    /// Empty table falling back to `default_locale`.
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            default_locale: default_locale.into(),
            tables: HashMap::new(),
        }
    }

    /// The editor's own English and Greek strings.
    pub fn builtin() -> Self {
        let mut table = Self::new("en");
        for (id, text) in [
            ("preview", "Preview"),
            ("save", "Save"),
            ("block_view", "Block View"),
            ("section_view", "Section View"),
            ("expand", "Expand"),
            ("collapse", "Collapse"),
            (STRING_MISSING, BUILTIN_STRING_MISSING),
            (LANG_NOT_SUPPORTED, "Language not supported"),
        ] {
            table.insert("en", id, text);
        }
        table.insert("el", STRING_MISSING, "λείπει το εργαλείο");
        table
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Add or replace one string.
    pub fn insert(&mut self, locale: &str, id: impl Into<String>, text: impl Into<String>) {
        self.tables
            .entry(locale.to_string())
            .or_default()
            .insert(id.into(), text.into());
    }

    /// Merge every string of `other` into this table, replacing existing entries.
    pub fn extend(&mut self, other: HashMap<String, HashMap<String, String>>) {
        for (locale, strings) in other {
            self.tables.entry(locale).or_default().extend(strings);
        }
    }

    /// Locales consulted for `requested`, most specific first, without duplicates.
    pub fn fallback_chain(&self, requested: &str) -> Vec<String> {
        let mut chain: Vec<String> = Vec::with_capacity(3);
        let base = base_language(requested);
        for locale in [requested, base, self.default_locale.as_str()] {
            if !locale.is_empty() && !chain.iter().any(|known| known == locale) {
                chain.push(locale.to_string());
            }
        }
        chain
    }

    /// String `id` for `locale`, if any locale in the chain defines it.
    pub fn resolve(&self, locale: &str, id: &str) -> Option<&str> {
        self.fallback_chain(locale)
            .iter()
            .find_map(|candidate| self.tables.get(candidate)?.get(id))
            .map(String::as_str)
    }

    /// String `id` for `locale`, or the chain's "string missing" message.
    pub fn localize(&self, locale: &str, id: &str) -> &str {
        self.resolve(locale, id)
            .or_else(|| {
                log::debug!("No string '{id}' for locale '{locale}'");
                self.resolve(locale, STRING_MISSING)
            })
            .unwrap_or(BUILTIN_STRING_MISSING)
    }

    /// Whether `locale` or its base language has a table of its own.
    pub fn supports(&self, locale: &str) -> bool {
        self.tables.contains_key(locale) || self.tables.contains_key(base_language(locale))
    }
}

/// `pt-BR` and `pt_BR` → `pt`.
fn base_language(locale: &str) -> &str {
    locale.split(|c: char| c == '-' || c == '_').next().unwrap_or(locale)
}
