use anyhow::{Context, Result};
use serde::Serialize;
use std::env;
use std::path::Path;
use tracing::debug;

use ng_gen_core::{CommandBuilder, ShortcutKind, WorkspaceConfig};

use crate::cli::GenerateArgs;
use crate::utils::{absolute_path, load_workspace, parse_options};

/// What a generation request resolves to
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationPlan {
    pub command: String,
    pub path: String,
    pub project: String,
    /// Folder the command has to run from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<String>,
}

/// Resolve a generation request made from `context` against a loaded workspace
pub fn plan(
    workspace: &WorkspaceConfig,
    args: &GenerateArgs,
    context: Option<&Path>,
) -> Result<GenerationPlan> {
    let mut builder = CommandBuilder::new(workspace, context);

    if let Some(ref project) = args.project {
        builder.set_project_name(project.as_str());
    }
    if let Some(ref collection) = args.collection {
        builder.set_collection_name(collection.as_str());
    }
    builder.set_schematic_by_name(&args.schematic).with_context(|| {
        format!(
            "Failed to find schematic '{}' in '{}'",
            args.schematic,
            builder.get_collection_name()
        )
    })?;
    if !builder.validate_project() {
        debug!("Project '{}' not found in workspace", builder.get_project_name());
    }

    if let Some(ref name) = args.name {
        builder.set_name_as_first_arg(name.as_str());
    }

    if let Some(ref label) = args.shortcut {
        let kind = match builder.schematic().map(|s| s.name.as_str()) {
            Some("module") => ShortcutKind::Module,
            _ => ShortcutKind::Component,
        };
        builder.apply_shortcut_label(kind, label).with_context(|| {
            let available: Vec<String> = match kind {
                ShortcutKind::Component => workspace
                    .get_component_types(builder.get_project_name())
                    .labels()
                    .map(String::from)
                    .collect(),
                ShortcutKind::Module => workspace.get_module_types().labels().map(String::from).collect(),
            };
            format!("Failed to apply type '{}' (available: {})", label, available.join(", "))
        })?;
    }

    builder.add_options(parse_options(&args.options));

    if args.route {
        let route = builder.get_route_from_first_arg();
        builder.add_options([("route", route)]);
    }

    let command = builder.build();
    Ok(GenerationPlan {
        command: command.to_shell_command(),
        path: builder.guess_generated_file_path().display().to_string(),
        project: builder.get_project_name().to_string(),
        working_dir: command.working_dir,
    })
}

fn load_and_plan(args: &GenerateArgs) -> Result<GenerationPlan> {
    let context = match args.path {
        Some(ref path) => absolute_path(path)?,
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let workspace = load_workspace(args.workspace.as_deref(), Some(&context))?;
    debug!("Loaded workspace at {:?}", workspace.root());
    plan(&workspace, args, Some(&context))
}

fn print_json(plan: &GenerationPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan).context("Failed to serialize plan")?;
    println!("{json}");
    Ok(())
}

pub fn command_command(args: &GenerateArgs) -> Result<()> {
    let plan = load_and_plan(args)?;
    if args.json {
        print_json(&plan)
    } else {
        println!("{}", plan.command);
        Ok(())
    }
}

pub fn guess_command(args: &GenerateArgs) -> Result<()> {
    let plan = load_and_plan(args)?;
    if args.json {
        print_json(&plan)
    } else {
        println!("{}", plan.path);
        Ok(())
    }
}
