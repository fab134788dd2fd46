//! Raw `angular.json` shape, only the parts the builder reads

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::{Project, ProjectType, WorkspaceConfig};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AngularJson {
    #[serde(default)]
    pub default_project: Option<String>,
    #[serde(default)]
    pub new_project_root: Option<String>,
    #[serde(default)]
    pub cli: Option<CliSection>,
    #[serde(default)]
    pub projects: BTreeMap<String, RawProject>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliSection {
    #[serde(default)]
    pub default_collection: Option<String>,
    /// Newer workspaces list collections here, the first one is the default
    #[serde(default)]
    pub schematic_collections: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProject {
    #[serde(default)]
    pub root: String,
    #[serde(default)]
    pub source_root: Option<String>,
    #[serde(default)]
    pub project_type: ProjectType,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub schematics: BTreeMap<String, Map<String, Value>>,
}

impl AngularJson {
    pub fn into_workspace(self, root: PathBuf) -> WorkspaceConfig {
        let mut workspace = WorkspaceConfig::new(root);

        if let Some(folder) = self.new_project_root {
            workspace = workspace.with_new_project_root(folder);
        }

        if let Some(cli) = self.cli {
            let collection = cli
                .default_collection
                .or_else(|| cli.schematic_collections.into_iter().next());
            if let Some(collection) = collection {
                workspace = workspace.with_default_collection(collection);
            }
        }

        if let Some(name) = self.default_project {
            workspace = workspace.with_default_project(name);
        }

        for (name, raw) in self.projects {
            tracing::trace!("Project '{}' rooted at '{}'", name, raw.root);
            let mut project = Project::new(name, raw.root, raw.project_type);
            if let Some(source_root) = raw.source_root {
                project = project.with_source_root(source_root);
            }
            project.prefix = raw.prefix;
            project.schematics = raw.schematics;
            workspace = workspace.with_project(project);
        }

        workspace
    }
}
