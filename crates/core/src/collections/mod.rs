//! Schematic collections and the options each schematic declares

pub mod defaults;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};

/// A named code-generation template and the option names it accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schematic {
    pub name: String,
    #[serde(default)]
    pub options: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl Schematic {
    pub fn new<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            options: options.into_iter().map(Into::into).collect(),
            aliases: Vec::new(),
        }
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    /// Whether `option` is one of the declared option names
    pub fn accepts(&self, option: &str) -> bool {
        self.options.contains(option)
    }

    /// Schematics that create a whole new project instead of a file inside one
    pub fn creates_project(&self) -> bool {
        matches!(self.name.as_str(), "application" | "library")
    }
}

/// A named group of schematics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    pub name: String,
    schematics: BTreeMap<String, Schematic>,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schematics: BTreeMap::new(),
        }
    }

    pub fn with_schematic(mut self, schematic: Schematic) -> Self {
        self.insert(schematic);
        self
    }

    pub fn insert(&mut self, schematic: Schematic) {
        self.schematics.insert(schematic.name.clone(), schematic);
    }

    /// Look a schematic up by name or alias (`c` for `component`)
    pub fn get_schematic(&self, name: &str) -> Option<&Schematic> {
        self.schematics.get(name).or_else(|| {
            self.schematics
                .values()
                .find(|s| s.aliases.iter().any(|a| a == name))
        })
    }

    pub fn schematic_names(&self) -> impl Iterator<Item = &str> {
        self.schematics.keys().map(String::as_str)
    }
}

/// All collections known to a workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionCatalog {
    collections: BTreeMap<String, Collection>,
}

impl Default for CollectionCatalog {
    fn default() -> Self {
        let mut catalog = Self {
            collections: BTreeMap::new(),
        };
        catalog.insert(defaults::angular_collection());
        catalog
    }
}

impl CollectionCatalog {
    /// A catalog holding nothing, not even the built-in Angular collection
    pub fn empty() -> Self {
        Self {
            collections: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, collection: Collection) {
        self.collections.insert(collection.name.clone(), collection);
    }

    /// Register schematics declared as `{ "schematic": ["option", ...] }`
    ///
    /// Schematics are merged into an existing collection of the same name.
    pub fn declare(&mut self, collection: &str, schematics: &BTreeMap<String, Vec<String>>) {
        let entry = self
            .collections
            .entry(collection.to_string())
            .or_insert_with(|| Collection::new(collection));
        for (name, options) in schematics {
            tracing::debug!(
                "Declaring schematic {}:{} with {} options",
                collection,
                name,
                options.len()
            );
            entry.insert(Schematic::new(name.as_str(), options.iter().cloned()));
        }
    }

    pub fn get_collection(&self, name: &str) -> Option<&Collection> {
        self.collections.get(name)
    }

    /// Fetch a schematic, failing when either the collection or schematic is unknown
    pub fn get_schematic(&self, collection: &str, schematic: &str) -> Result<&Schematic> {
        let found = self
            .get_collection(collection)
            .ok_or_else(|| Error::UnknownCollection(collection.to_string()))?;
        found
            .get_schematic(schematic)
            .ok_or_else(|| Error::UnknownSchematic {
                collection: collection.to_string(),
                schematic: schematic.to_string(),
            })
    }
}
