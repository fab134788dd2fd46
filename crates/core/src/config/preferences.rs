//! User preferences stored next to `angular.json`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::Shortcut;

/// Contents of the preferences file
///
/// ```json
/// {
///   "componentTypes": [{ "label": "Dialog", "options": [["type", "dialog"]] }],
///   "moduleTypes": [],
///   "collections": { "@angular/material": { "table": ["name", "project"] } },
///   "projects": { "admin": { "componentTypes": [] } }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub component_types: Vec<Shortcut>,
    #[serde(default)]
    pub module_types: Vec<Shortcut>,
    /// Extra collections: collection name, then schematic name to declared options
    #[serde(default)]
    pub collections: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    #[serde(default)]
    pub projects: BTreeMap<String, ProjectPreferences>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPreferences {
    #[serde(default)]
    pub component_types: Vec<Shortcut>,
}

impl Preferences {
    pub fn from_json(contents: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }
}
