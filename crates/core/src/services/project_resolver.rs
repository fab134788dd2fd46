//! Infers which project a context path belongs to

use std::path::Path;

use crate::config::Project;
use crate::interfaces::ProjectCatalog;
use crate::types::ContextPath;

pub struct ProjectResolver<'a, C: ProjectCatalog + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: ProjectCatalog + ?Sized> ProjectResolver<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// The project owning `context`
    ///
    /// An empty context, or one at the workspace root, resolves to nothing.
    /// Otherwise the project with the longest root containing the path wins,
    /// falling back to the default project when no root contains it.
    pub fn resolve(&self, context: &ContextPath) -> Option<&'a Project> {
        let path = context.path()?;
        if context.is_workspace_level() {
            tracing::debug!("Context {:?} is at workspace level, no project inferred", path);
            return None;
        }

        self.longest_match(path).or_else(|| {
            let fallback = self
                .catalog
                .default_project()
                .and_then(|name| self.catalog.find_project(name));
            tracing::debug!(
                "No project root contains {:?}, falling back to {:?}",
                path,
                fallback.map(|p| &p.name)
            );
            fallback
        })
    }

    fn longest_match(&self, path: &Path) -> Option<&'a Project> {
        let root = self.catalog.workspace_root();
        self.catalog
            .projects()
            .filter_map(|project| {
                let project_root = project.root_path(root);
                // Component-wise, so `projects/lib` never matches `projects/lib2`
                path.starts_with(&project_root)
                    .then(|| (project_root.components().count(), project))
            })
            .inspect(|(depth, project)| {
                tracing::trace!("Candidate project '{}' at depth {}", project.name, depth)
            })
            .max_by_key(|(depth, _)| *depth)
            .map(|(_, project)| project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ProjectType, WorkspaceConfig};

    fn workspace() -> WorkspaceConfig {
        WorkspaceConfig::new("/ws")
            .with_project(Project::new("app", "", ProjectType::Application))
            .with_project(Project::new("lib", "projects/lib", ProjectType::Library))
            .with_project(Project::new("lib2", "projects/lib2", ProjectType::Library))
            .with_project(Project::new("admin", "projects/admin", ProjectType::Application))
    }

    fn resolve(workspace: &WorkspaceConfig, path: &str) -> Option<String> {
        let context = ContextPath::new(Some(Path::new(path)), workspace.root());
        ProjectResolver::new(workspace)
            .resolve(&context)
            .map(|p| p.name.clone())
    }

    #[test]
    fn test_no_context() {
        let workspace = workspace();
        let context = ContextPath::new(None, workspace.root());
        assert!(ProjectResolver::new(&workspace).resolve(&context).is_none());
    }

    #[test]
    fn test_workspace_root_resolves_nothing() {
        assert_eq!(resolve(&workspace(), "/ws"), None);
    }

    #[test]
    fn test_root_project() {
        assert_eq!(resolve(&workspace(), "/ws/src"), Some("app".to_string()));
        assert_eq!(resolve(&workspace(), "/ws/src/app/hello"), Some("app".to_string()));
    }

    #[test]
    fn test_longest_root_wins() {
        let workspace = workspace();
        assert_eq!(resolve(&workspace, "/ws/projects/lib/src/lib/hello"), Some("lib".to_string()));
        assert_eq!(resolve(&workspace, "/ws/projects/lib2/src/lib"), Some("lib2".to_string()));
        assert_eq!(resolve(&workspace, "/ws/projects/admin/src/app"), Some("admin".to_string()));
    }

    #[test]
    fn test_falls_back_to_default_project() {
        let workspace = WorkspaceConfig::new("/ws")
            .with_project(Project::new("lib", "projects/lib", ProjectType::Library))
            .with_project(Project::new("shop", "apps/shop", ProjectType::Application))
            .with_default_project("shop");

        assert_eq!(resolve(&workspace, "/ws/tools/scripts"), Some("shop".to_string()));
    }

    #[test]
    fn test_no_match_and_no_default() {
        let workspace = WorkspaceConfig::new("/ws")
            .with_project(Project::new("lib", "projects/lib", ProjectType::Library));

        assert_eq!(resolve(&workspace, "/ws/tools"), None);
    }
}
