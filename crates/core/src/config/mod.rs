//! Workspace configuration: projects, collections and type shortcuts

mod angular_json;
pub mod loader;
pub mod preferences;

pub use angular_json::AngularJson;
pub use loader::{ConfigLoader, PREFERENCES_FILE, WORKSPACE_FILES};
pub use preferences::Preferences;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::collections::CollectionCatalog;
use crate::collections::defaults::{
    ANGULAR_COLLECTION, DEFAULT_NEW_PROJECT_ROOT, default_component_types, default_module_types,
};
use crate::error::{Error, Result};
use crate::impl_case_insensitive_deserialize;
use crate::interfaces::ProjectCatalog;
use crate::types::context_path::join_posix;
use crate::types::{Shortcut, ShortcutCatalog, ShortcutKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProjectType {
    #[default]
    Application,
    Library,
}

impl_case_insensitive_deserialize!(
    ProjectType,
    Application => "application",
    Library => "library"
);

impl Serialize for ProjectType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Application => "application",
            ProjectType::Library => "library",
        }
    }

    /// Folder under the source root holding the project's code
    pub fn code_folder(&self) -> &'static str {
        match self {
            ProjectType::Application => "app",
            ProjectType::Library => "lib",
        }
    }
}

/// A project of the workspace, paths relative to the workspace root
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub root: String,
    pub source_root: String,
    pub project_type: ProjectType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Per-schematic option defaults keyed by `collection:schematic`
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub schematics: BTreeMap<String, Map<String, Value>>,
    #[serde(skip)]
    pub component_types: Vec<Shortcut>,
}

impl Project {
    /// A project with the conventional `<root>/src` source root
    pub fn new(name: impl Into<String>, root: impl Into<String>, project_type: ProjectType) -> Self {
        let root = root.into();
        let source_root = if root.is_empty() {
            "src".to_string()
        } else {
            format!("{}/src", root.trim_end_matches('/'))
        };
        Self {
            name: name.into(),
            root,
            source_root,
            project_type,
            prefix: None,
            schematics: BTreeMap::new(),
            component_types: Vec::new(),
        }
    }

    pub fn with_source_root(mut self, source_root: impl Into<String>) -> Self {
        self.source_root = source_root.into();
        self
    }

    pub fn with_schematic_defaults(mut self, key: impl Into<String>, defaults: Map<String, Value>) -> Self {
        self.schematics.insert(key.into(), defaults);
        self
    }

    pub fn root_path(&self, workspace_root: &Path) -> PathBuf {
        join_posix(workspace_root, &self.root)
    }

    pub fn source_root_path(&self, workspace_root: &Path) -> PathBuf {
        join_posix(workspace_root, &self.source_root)
    }

    /// `<sourceRoot>/app` for applications, `<sourceRoot>/lib` for libraries
    pub fn code_folder_path(&self, workspace_root: &Path) -> PathBuf {
        self.source_root_path(workspace_root)
            .join(self.project_type.code_folder())
    }

    /// Option defaults the project sets for a schematic
    ///
    /// Both `collection:schematic` and the bare schematic name are accepted as keys.
    pub fn schematic_defaults(&self, collection: &str, schematic: &str) -> Option<&Map<String, Value>> {
        self.schematics
            .get(&format!("{collection}:{schematic}"))
            .or_else(|| self.schematics.get(schematic))
    }

    /// Whether the project configures `flat: true` for a schematic
    pub fn prefers_flat(&self, collection: &str, schematic: &str) -> bool {
        self.schematic_defaults(collection, schematic)
            .and_then(|d| d.get("flat"))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

/// Everything the command builder needs to know about a workspace
#[derive(Debug, Clone)]
pub struct WorkspaceConfig {
    root: PathBuf,
    default_project: Option<String>,
    default_collection: String,
    new_project_root: String,
    projects: BTreeMap<String, Project>,
    collections: CollectionCatalog,
    component_types: ShortcutCatalog,
    module_types: ShortcutCatalog,
}

impl WorkspaceConfig {
    /// An empty workspace with the built-in catalogs
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            default_project: None,
            default_collection: ANGULAR_COLLECTION.to_string(),
            new_project_root: DEFAULT_NEW_PROJECT_ROOT.to_string(),
            projects: BTreeMap::new(),
            collections: CollectionCatalog::default(),
            component_types: ShortcutCatalog::new(default_component_types()),
            module_types: ShortcutCatalog::new(default_module_types()),
        }
    }

    /// Build from the contents of an `angular.json` file
    pub fn from_json(root: impl Into<PathBuf>, contents: &str) -> Result<Self> {
        let raw: AngularJson = serde_json::from_str(contents)?;
        Ok(raw.into_workspace(root.into()))
    }

    /// Find and load the workspace containing `start`
    pub fn discover(start: &Path) -> Result<Self> {
        ConfigLoader::discover(start)
    }

    /// Load the workspace rooted at `root`
    pub fn load(root: &Path) -> Result<Self> {
        ConfigLoader::load(root)
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.insert(project.name.clone(), project);
        self
    }

    pub fn with_default_project(mut self, name: impl Into<String>) -> Self {
        self.default_project = Some(name.into());
        self
    }

    pub fn with_default_collection(mut self, name: impl Into<String>) -> Self {
        self.default_collection = name.into();
        self
    }

    pub fn with_new_project_root(mut self, folder: impl Into<String>) -> Self {
        self.new_project_root = folder.into();
        self
    }

    /// Merge user preferences: extra shortcuts and collection declarations
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.component_types.extend(preferences.component_types);
        self.module_types.extend(preferences.module_types);
        for (collection, schematics) in &preferences.collections {
            self.collections.declare(collection, schematics);
        }
        for (name, project_preferences) in preferences.projects {
            match self.projects.get_mut(&name) {
                Some(project) => project.component_types = project_preferences.component_types,
                None => tracing::warn!("Preferences mention unknown project '{}'", name),
            }
        }
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The explicit default project, or else the project living at the workspace root
    pub fn default_project(&self) -> Option<&str> {
        self.default_project.as_deref().or_else(|| {
            self.projects
                .values()
                .find(|p| p.root.is_empty())
                .map(|p| p.name.as_str())
        })
    }

    pub fn default_collection(&self) -> &str {
        &self.default_collection
    }

    pub fn new_project_root(&self) -> &str {
        &self.new_project_root
    }

    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.get(name)
    }

    pub fn collections(&self) -> &CollectionCatalog {
        &self.collections
    }

    /// Component shortcuts for a project: workspace entries, then the project's own
    pub fn get_component_types(&self, project: &str) -> ShortcutCatalog {
        let mut catalog = self.component_types.clone();
        if let Some(project) = self.project(project) {
            catalog.extend(project.component_types.iter().cloned());
        }
        catalog
    }

    pub fn get_module_types(&self) -> &ShortcutCatalog {
        &self.module_types
    }

    /// Look a shortcut up by kind and label
    pub fn get_shortcut(&self, kind: ShortcutKind, project: &str, label: &str) -> Result<Shortcut> {
        let found = match kind {
            ShortcutKind::Component => self.get_component_types(project).get(label).cloned(),
            ShortcutKind::Module => self.module_types.get(label).cloned(),
        };
        found.ok_or_else(|| Error::UnknownShortcut {
            kind: kind.to_string(),
            label: label.to_string(),
        })
    }
}

impl ProjectCatalog for WorkspaceConfig {
    fn workspace_root(&self) -> &Path {
        &self.root
    }

    fn projects(&self) -> Box<dyn Iterator<Item = &Project> + '_> {
        Box::new(self.projects.values())
    }

    fn default_project(&self) -> Option<&str> {
        WorkspaceConfig::default_project(self)
    }
}
