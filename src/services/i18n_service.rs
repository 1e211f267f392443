use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

pub const LOCALES: [&str; 2] = ["en", "sq"];
pub const DEFAULT_LOCALE: &str = "en";

const EN_MESSAGES: &str = include_str!("locales/en.json");
const SQ_MESSAGES: &str = include_str!("locales/sq.json");

/// Message-tree lookup for the two site locales. The pricing core only pulls
/// textual labels from here; nothing priced depends on a translation.
pub struct Translator {
    messages: HashMap<&'static str, Value>,
}

impl Translator {
    pub fn new() -> Self {
        let mut messages = HashMap::new();
        messages.insert(
            "en",
            serde_json::from_str(EN_MESSAGES).expect("Embedded en messages are malformed JSON"),
        );
        messages.insert(
            "sq",
            serde_json::from_str(SQ_MESSAGES).expect("Embedded sq messages are malformed JSON"),
        );
        Self { messages }
    }

    /// Normalize a requested locale to a supported one.
    pub fn resolve_locale(requested: Option<&str>) -> &'static str {
        LOCALES
            .iter()
            .find(|locale| Some(**locale) == requested)
            .copied()
            .unwrap_or(DEFAULT_LOCALE)
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&Value> {
        let mut value = self.messages.get(locale)?;
        for part in key.split('.') {
            value = value.get(part)?;
        }
        Some(value)
    }

    /// Translation string for a dot-separated key: `text("en",
    /// "Booking.estimatedTotal")`. A miss returns the key itself.
    pub fn text(&self, locale: &str, key: &str) -> String {
        match self.lookup(locale, key) {
            Some(Value::String(s)) => s.clone(),
            _ => key.to_string(),
        }
    }

    /// Translation with `{name}`-style interpolation.
    pub fn text_with(&self, locale: &str, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.text(locale, key);
        for (name, value) in args {
            text = text.replace(&format!("{{{name}}}"), value);
        }
        text
    }

    /// Raw value (arrays, objects) for things like inclusion lists.
    pub fn raw(&self, locale: &str, key: &str) -> Option<&Value> {
        self.lookup(locale, key)
    }

    /// Convenience for string-array messages (inclusions). Empty on a miss.
    pub fn string_list(&self, locale: &str, key: &str) -> Vec<String> {
        match self.raw(locale, key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_translator() -> Arc<Translator> {
    Arc::new(Translator::new())
}
