use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{command_command, context_command, guess_command, types_command};

#[derive(Parser, Debug)]
#[command(name = "ng-gen")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the `ng generate` command for a schematic
    #[command(visible_alias = "c")]
    Command(GenerateArgs),
    /// Print the path of the file a schematic would create
    #[command(visible_alias = "g")]
    Guess(GenerateArgs),
    /// Show how a path resolves inside the workspace
    Context {
        /// File or folder to resolve (defaults to the current directory)
        path: Option<PathBuf>,

        /// Workspace root (discovered from the path when omitted)
        #[arg(short, long)]
        workspace: Option<PathBuf>,
    },
    /// List component or module type shortcuts
    Types {
        /// List module types instead of component types
        #[arg(short, long)]
        module: bool,

        /// Include the project's own component types
        #[arg(short, long)]
        project: Option<String>,

        /// Workspace root (discovered from the current directory when omitted)
        #[arg(short, long)]
        workspace: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Schematic name or alias (e.g. component, c, service)
    pub schematic: String,

    /// Artifact name, may contain folders (e.g. shop/cart)
    pub name: Option<String>,

    /// File or folder the request is made from
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Workspace root (discovered from --path or the current directory when omitted)
    #[arg(short, long)]
    pub workspace: Option<PathBuf>,

    /// Project to generate into, overriding the one inferred from --path
    #[arg(short, long)]
    pub project: Option<String>,

    /// Schematics collection (defaults to the workspace default)
    #[arg(short, long)]
    pub collection: Option<String>,

    /// Component or module type shortcut label (e.g. Page, Lazy)
    #[arg(short = 't', long = "type")]
    pub shortcut: Option<String>,

    /// Option as name=value, or name alone for a flag; repeatable
    #[arg(short, long = "option", value_name = "NAME[=VALUE]")]
    pub options: Vec<String>,

    /// Add --route with the artifact's own name
    #[arg(long)]
    pub route: bool,

    /// Print command, path and project as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Command(args) => command_command(&args),
            Commands::Guess(args) => guess_command(&args),
            Commands::Context { path, workspace } => {
                context_command(path.as_deref(), workspace.as_deref())
            }
            Commands::Types {
                module,
                project,
                workspace,
            } => types_command(module, project.as_deref(), workspace.as_deref()),
        }
    }
}
