//! Builds `ng generate` invocations from the user's context
//!
//! # Example
//! ```ignore
//! let mut builder = CommandBuilder::new(&workspace, Some(Path::new("/ws/src/app/shop")));
//! builder.set_schematic_by_name("component")?;
//! builder.validate_project();
//! builder.set_name_as_first_arg("cart");
//! assert_eq!(builder.get_command(), "ng g component shop/cart");
//! ```

use std::path::{Path, PathBuf};

use super::naming::split_name;
use super::ng_command::NgCommand;
use super::path_guess::GeneratedPathGuesser;
use crate::collections::Schematic;
use crate::config::WorkspaceConfig;
use crate::error::Result;
use crate::services::ProjectResolver;
use crate::types::{CliOption, ContextPath, Shortcut, ShortcutKind};

/// Mutable builder for one generation request
///
/// The context path is computed once at construction; everything else is set
/// through explicit setters. Options are append-only and never deduplicated.
#[derive(Debug, Clone)]
pub struct CommandBuilder<'a> {
    workspace: &'a WorkspaceConfig,
    context_path: ContextPath,
    project_name: String,
    is_root_project: bool,
    collection_name: String,
    schematic: Option<&'a Schematic>,
    name_as_first_arg: String,
    options: Vec<CliOption>,
    type_suffix: Option<String>,
}

impl<'a> CommandBuilder<'a> {
    /// Create a builder, inferring the project from `context` when given
    pub fn new(workspace: &'a WorkspaceConfig, context: Option<&Path>) -> Self {
        let mut context_path = ContextPath::new(context, workspace.root());
        let project = ProjectResolver::new(workspace).resolve(&context_path);

        if let Some(project) = project {
            context_path = context_path.with_project_folder(&project.code_folder_path(workspace.root()));
        }

        tracing::debug!(
            "Context {:?} resolved to project {:?}",
            context_path,
            project.map(|p| &p.name)
        );

        Self {
            workspace,
            context_path,
            project_name: project.map(|p| p.name.clone()).unwrap_or_default(),
            is_root_project: false,
            collection_name: workspace.default_collection().to_string(),
            schematic: None,
            name_as_first_arg: String::new(),
            options: Vec::new(),
            type_suffix: None,
        }
    }

    pub fn context_path(&self) -> &ContextPath {
        &self.context_path
    }

    pub fn get_project_name(&self) -> &str {
        &self.project_name
    }

    /// Override the inferred project
    pub fn set_project_name(&mut self, name: impl Into<String>) {
        self.project_name = name.into();
    }

    /// Check the project against the workspace and record whether it is the default one
    ///
    /// Must run before [`Self::get_command`] for the `--project` flag to be right.
    /// Returns whether the project exists.
    pub fn validate_project(&mut self) -> bool {
        let exists = self.workspace.project(&self.project_name).is_some();
        self.is_root_project = !self.project_name.is_empty()
            && self.workspace.default_project() == Some(self.project_name.as_str());

        if !exists && !self.project_name.is_empty() {
            tracing::warn!("Project '{}' is not part of the workspace", self.project_name);
        }
        exists
    }

    pub fn is_root_project(&self) -> bool {
        self.is_root_project
    }

    pub fn get_collection_name(&self) -> &str {
        &self.collection_name
    }

    pub fn set_collection_name(&mut self, name: impl Into<String>) {
        self.collection_name = name.into();
    }

    pub fn schematic(&self) -> Option<&'a Schematic> {
        self.schematic
    }

    /// Bind a schematic; it is not checked against the collection name
    pub fn set_schematic(&mut self, schematic: &'a Schematic) {
        self.schematic = Some(schematic);
    }

    /// Bind a schematic looked up in the current collection
    pub fn set_schematic_by_name(&mut self, name: &str) -> Result<()> {
        let schematic = self
            .workspace
            .collections()
            .get_schematic(&self.collection_name, name)?;
        self.set_schematic(schematic);
        Ok(())
    }

    /// Folder prefix contributed by the context, with a trailing `/`
    ///
    /// Empty without a project, for schematics creating a new project, or when
    /// the context is the project's code folder itself.
    pub fn get_context_for_name_as_first_arg(&self) -> String {
        if self.project_name.is_empty() || self.schematic.is_some_and(Schematic::creates_project) {
            return String::new();
        }

        let dir = self.context_path.project_relative_dir();
        if dir.is_empty() {
            String::new()
        } else {
            format!("{dir}/")
        }
    }

    /// Store the primary positional argument, which may contain folders (`hello/world`)
    pub fn set_name_as_first_arg(&mut self, name: impl Into<String>) {
        self.name_as_first_arg = name.into().trim().to_string();
    }

    /// The positional argument as it appears in the command: context prefix plus raw name
    pub fn get_name_as_first_arg(&self) -> String {
        if self.name_as_first_arg.is_empty() {
            return String::new();
        }
        format!(
            "{}{}",
            self.get_context_for_name_as_first_arg(),
            self.name_as_first_arg
        )
    }

    /// The artifact's own name: the last segment of the raw name
    pub fn get_artifact_name(&self) -> String {
        split_name(&self.name_as_first_arg).1
    }

    /// Router path for lazy modules, independent of the folders in the name
    pub fn get_route_from_first_arg(&self) -> String {
        self.get_artifact_name()
    }

    /// Append options in order; validity is checked when the command is built
    pub fn add_options<I, O>(&mut self, options: I)
    where
        I: IntoIterator<Item = O>,
        O: Into<CliOption>,
    {
        self.options.extend(options.into_iter().map(Into::into));
    }

    /// Apply a type shortcut: its options join the command, its suffix drives the path
    pub fn apply_shortcut(&mut self, shortcut: &Shortcut) {
        tracing::debug!("Applying shortcut '{}'", shortcut.label);
        self.add_options(shortcut.options.iter().cloned());
        if let Some(suffix) = shortcut.suffix() {
            self.type_suffix = Some(suffix.to_string());
        }
    }

    /// Look a shortcut up in the workspace catalogs and apply it
    pub fn apply_shortcut_label(&mut self, kind: ShortcutKind, label: &str) -> Result<()> {
        let shortcut = self.workspace.get_shortcut(kind, &self.project_name, label)?;
        self.apply_shortcut(&shortcut);
        Ok(())
    }

    /// Options the bound schematic declares, in the order they were added
    pub fn effective_options(&self) -> Vec<&CliOption> {
        let Some(schematic) = self.schematic else {
            return Vec::new();
        };

        self.options
            .iter()
            .filter(|option| {
                let accepted = schematic.accepts(&option.name);
                if !accepted {
                    tracing::debug!(
                        "Dropping option '{}' not declared by '{}'",
                        option.name,
                        schematic.name
                    );
                }
                accepted
            })
            .collect()
    }

    /// `collection:schematic`, or the schematic alone for the default collection
    fn schematic_token(&self) -> String {
        let Some(schematic) = self.schematic else {
            return String::new();
        };

        if self.collection_name.is_empty()
            || self.collection_name == self.workspace.default_collection()
        {
            schematic.name.clone()
        } else {
            format!("{}:{}", self.collection_name, schematic.name)
        }
    }

    /// Assemble the command from the current state
    pub fn build(&self) -> NgCommand {
        let mut args = vec!["g".to_string()];

        let token = self.schematic_token();
        if !token.is_empty() {
            args.push(token);
        }

        let first_arg = self.get_name_as_first_arg();
        if !first_arg.is_empty() {
            args.push(first_arg);
        }

        for option in self.effective_options() {
            args.extend(option.to_args());
        }

        let creates_project = self.schematic.is_some_and(Schematic::creates_project);
        if !self.project_name.is_empty() && !self.is_root_project && !creates_project {
            args.push("--project".to_string());
            args.push(self.project_name.clone());
        }

        NgCommand::new(args).with_working_dir(self.workspace.root().display().to_string())
    }

    /// The single-line `ng g ...` invocation
    pub fn get_command(&self) -> String {
        self.build().to_shell_command()
    }

    fn type_suffix(&self) -> Option<String> {
        self.type_suffix.clone().or_else(|| {
            self.effective_options()
                .into_iter()
                .find(|o| o.name == "type")
                .and_then(|o| o.value.as_str())
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
    }

    fn is_flat(&self, schematic: &str) -> bool {
        let from_options = self
            .effective_options()
            .iter()
            .rev()
            .find(|o| o.name == "flat")
            .map(|o| o.value.is_true());

        from_options.unwrap_or_else(|| {
            self.workspace
                .project(&self.project_name)
                .is_some_and(|p| p.prefers_flat(&self.collection_name, schematic))
        })
    }

    /// Absolute path of the file the command is expected to create
    pub fn guess_generated_file_path(&self) -> PathBuf {
        let root = self.workspace.root();
        let schematic = self.schematic.map(|s| s.name.as_str()).unwrap_or_default();
        let code_folder = self
            .workspace
            .project(&self.project_name)
            .map(|p| p.code_folder_path(root))
            .unwrap_or_else(|| root.join("src").join("app"));

        let first_arg = self.get_name_as_first_arg();
        let type_suffix = self.type_suffix();

        GeneratedPathGuesser {
            workspace_root: root,
            new_project_root: self.workspace.new_project_root(),
            code_folder,
            schematic,
            first_arg: &first_arg,
            type_suffix: type_suffix.as_deref(),
            flat: self.is_flat(schematic),
        }
        .guess()
    }

    /// Options as they were added, before filtering
    pub fn raw_options(&self) -> &[CliOption] {
        &self.options
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::defaults::{ANGULAR_COLLECTION, component_type, module_type};
    use crate::config::{Project, ProjectType};

    fn workspace() -> WorkspaceConfig {
        WorkspaceConfig::new("/ws")
            .with_project(Project::new("app", "", ProjectType::Application))
            .with_project(Project::new("lib", "projects/lib", ProjectType::Library))
    }

    fn component_builder(workspace: &WorkspaceConfig) -> CommandBuilder<'_> {
        let mut builder = CommandBuilder::new(workspace, None);
        builder.set_project_name("app");
        builder.set_schematic_by_name("component").unwrap();
        builder.validate_project();
        builder.set_name_as_first_arg("hello");
        builder
    }

    #[test]
    fn test_basic_component() {
        let workspace = workspace();
        let builder = component_builder(&workspace);

        assert_eq!(builder.get_command(), "ng g component hello");
        assert_eq!(
            builder.guess_generated_file_path(),
            PathBuf::from("/ws/src/app/hello/hello.component.ts")
        );
    }

    #[test]
    fn test_undeclared_option_is_dropped() {
        let workspace = workspace();
        let mut builder = component_builder(&workspace);
        let before = builder.get_command();

        builder.add_options([("elmo", true)]);
        assert_eq!(builder.get_command(), before);
        assert_eq!(builder.raw_options().len(), 1);
    }

    #[test]
    fn test_duplicate_options_are_kept() {
        let workspace = workspace();
        let mut builder = component_builder(&workspace);
        builder.add_options([("style", "scss")]);
        builder.add_options([("style", "css")]);

        assert_eq!(
            builder.get_command(),
            "ng g component hello --style scss --style css"
        );
    }

    #[test]
    fn test_options_checked_against_current_schematic() {
        let workspace = workspace();
        let mut builder = component_builder(&workspace);
        builder.add_options([("routing", true)]);
        assert_eq!(builder.get_command(), "ng g component hello");

        builder.set_schematic_by_name("module").unwrap();
        assert_eq!(builder.get_command(), "ng g module hello --routing");
    }

    #[test]
    fn test_non_default_project_flag() {
        let workspace = workspace();
        let mut builder = component_builder(&workspace);
        builder.set_project_name("lib");
        assert!(builder.validate_project());

        assert_eq!(builder.get_command(), "ng g component hello --project lib");
        assert_eq!(
            builder.guess_generated_file_path(),
            PathBuf::from("/ws/projects/lib/src/lib/hello/hello.component.ts")
        );
    }

    #[test]
    fn test_unknown_project_still_serializes() {
        let workspace = workspace();
        let mut builder = component_builder(&workspace);
        builder.set_project_name("ghost");

        assert!(!builder.validate_project());
        assert_eq!(builder.get_command(), "ng g component hello --project ghost");
    }

    #[test]
    fn test_non_default_collection_is_named() {
        let workspace = workspace().with_default_collection("@ngrx/schematics");
        let mut builder = CommandBuilder::new(&workspace, None);
        builder.set_project_name("app");
        builder.set_collection_name(ANGULAR_COLLECTION);
        builder.set_schematic_by_name("component").unwrap();
        builder.validate_project();
        builder.set_name_as_first_arg("hello");

        assert_eq!(
            builder.get_command(),
            format!("ng g {ANGULAR_COLLECTION}:component hello")
        );
    }

    #[test]
    fn test_shortcut_drives_options_and_path() {
        let workspace = workspace();
        let mut builder = component_builder(&workspace);
        let page = Shortcut::new(component_type::PAGE, vec![CliOption::flag("skipSelector")])
            .with_suffix("page");
        builder.apply_shortcut(&page);

        assert_eq!(builder.get_command(), "ng g component hello --skipSelector");
        assert_eq!(
            builder.guess_generated_file_path(),
            PathBuf::from("/ws/src/app/hello.page.ts")
        );
    }

    #[test]
    fn test_lazy_module_route() {
        let workspace = workspace();
        let mut builder = CommandBuilder::new(&workspace, None);
        builder.set_project_name("app");
        builder.set_schematic_by_name("module").unwrap();
        builder.validate_project();
        builder.set_name_as_first_arg("hello/world");
        builder
            .apply_shortcut_label(ShortcutKind::Module, module_type::LAZY)
            .unwrap();
        let route = builder.get_route_from_first_arg();
        builder.add_options([("route", route)]);

        assert_eq!(
            builder.get_command(),
            "ng g module hello/world --module app --route world"
        );
        assert_eq!(
            builder.guess_generated_file_path(),
            PathBuf::from("/ws/src/app/hello/world/world.module.ts")
        );
    }

    #[test]
    fn test_flat_option_changes_layout() {
        let workspace = workspace();
        let mut builder = component_builder(&workspace);
        builder.add_options([("flat", true)]);

        assert_eq!(builder.get_command(), "ng g component hello --flat");
        assert_eq!(
            builder.guess_generated_file_path(),
            PathBuf::from("/ws/src/app/hello.component.ts")
        );
    }

    #[test]
    fn test_without_schematic_is_incomplete_but_deterministic() {
        let workspace = workspace();
        let mut builder = CommandBuilder::new(&workspace, None);
        builder.set_name_as_first_arg("hello");
        builder.add_options([("export", true)]);

        assert_eq!(builder.get_command(), "ng g hello");
    }

    #[test]
    fn test_context_prefix_from_folder() {
        let workspace = workspace();
        let mut builder = CommandBuilder::new(&workspace, Some(Path::new("/ws/src/app/shop")));
        builder.set_schematic_by_name("service").unwrap();
        builder.validate_project();
        builder.set_name_as_first_arg("cart");

        assert_eq!(builder.get_project_name(), "app");
        assert_eq!(builder.get_command(), "ng g service shop/cart");
        assert_eq!(
            builder.guess_generated_file_path(),
            PathBuf::from("/ws/src/app/shop/cart.service.ts")
        );
    }

    #[test]
    fn test_shortcut_from_catalog_is_unknown() {
        let workspace = workspace();
        let mut builder = component_builder(&workspace);
        assert!(builder
            .apply_shortcut_label(ShortcutKind::Component, "Nope")
            .is_err());
    }
}
