use serde::{Deserialize, Serialize};
use std::fmt;

use super::cli_option::{CliOption, OptionValue};
use crate::impl_case_insensitive_deserialize;

/// Which schematic a family of shortcuts applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortcutKind {
    Component,
    Module,
}

impl_case_insensitive_deserialize!(
    ShortcutKind,
    Component => "component",
    Module => "module"
);

impl ShortcutKind {
    /// Name of the schematic this kind of shortcut drives
    pub fn schematic_name(&self) -> &'static str {
        match self {
            ShortcutKind::Component => "component",
            ShortcutKind::Module => "module",
        }
    }
}

impl fmt::Display for ShortcutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.schematic_name())
    }
}

/// A labeled preset: a fixed option list plus an optional file name suffix
///
/// The same entry drives both the generated command (through its options) and
/// the predicted file path (through its suffix).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub label: String,
    #[serde(default)]
    pub options: Vec<CliOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    suffix: Option<String>,
}

impl Shortcut {
    pub fn new(label: impl Into<String>, options: Vec<CliOption>) -> Self {
        Self {
            label: label.into(),
            options,
            suffix: None,
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// The file name suffix, e.g. `page` for `hello.page.ts`
    ///
    /// An explicit suffix wins, otherwise a string `type` option supplies it.
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref().or_else(|| {
            self.options
                .iter()
                .find(|o| o.name == "type")
                .and_then(|o| match &o.value {
                    OptionValue::String(s) if !s.is_empty() => Some(s.as_str()),
                    _ => None,
                })
        })
    }
}

/// Ordered, label-keyed collection of shortcuts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutCatalog {
    entries: Vec<Shortcut>,
}

impl ShortcutCatalog {
    pub fn new(entries: Vec<Shortcut>) -> Self {
        let mut catalog = Self::default();
        catalog.extend(entries);
        catalog
    }

    pub fn get(&self, label: &str) -> Option<&Shortcut> {
        self.entries.iter().find(|s| s.label == label)
    }

    pub fn has(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shortcut> {
        self.entries.iter()
    }

    /// Add entries in order; an entry replaces an existing one with the same label
    pub fn extend(&mut self, entries: impl IntoIterator<Item = Shortcut>) {
        for entry in entries {
            match self.entries.iter_mut().find(|s| s.label == entry.label) {
                Some(existing) => {
                    tracing::debug!("Replacing shortcut '{}'", entry.label);
                    *existing = entry;
                }
                None => self.entries.push(entry),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_from_type_option() {
        let page = Shortcut::new(
            "Page",
            vec![CliOption::new("type", "page"), CliOption::flag("skipSelector")],
        );
        assert_eq!(page.suffix(), Some("page"));
    }

    #[test]
    fn test_explicit_suffix_wins() {
        let page = Shortcut::new("Page", vec![CliOption::new("type", "page")]).with_suffix("view");
        assert_eq!(page.suffix(), Some("view"));

        let plain = Shortcut::new("Default", vec![]);
        assert_eq!(plain.suffix(), None);
    }

    #[test]
    fn test_catalog_replaces_by_label() {
        let mut catalog = ShortcutCatalog::new(vec![
            Shortcut::new("Default", vec![]),
            Shortcut::new("Page", vec![CliOption::flag("skipSelector")]),
        ]);
        catalog.extend(vec![
            Shortcut::new("Page", vec![CliOption::new("type", "page")]),
            Shortcut::new("Dialog", vec![CliOption::new("type", "dialog")]),
        ]);

        assert_eq!(catalog.labels().collect::<Vec<_>>(), vec!["Default", "Page", "Dialog"]);
        assert_eq!(catalog.get("Page").and_then(|s| s.suffix()), Some("page"));
    }

    #[test]
    fn test_deserialize_shortcut() {
        let shortcut: Shortcut = serde_json::from_str(
            r#"{ "label": "Dialog", "options": [["type", "dialog"], ["skipSelector", true]] }"#,
        )
        .unwrap();

        assert_eq!(shortcut.suffix(), Some("dialog"));
        assert_eq!(shortcut.options.len(), 2);
    }

    #[test]
    fn test_kind_case_insensitive() {
        let kind: ShortcutKind = serde_json::from_str(r#""Module""#).unwrap();
        assert_eq!(kind, ShortcutKind::Module);
        assert_eq!(kind.to_string(), "module");
    }
}
