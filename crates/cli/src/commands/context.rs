use anyhow::{Context, Result};
use std::env;
use std::path::Path;

use ng_gen_core::CommandBuilder;

use crate::display::print_context;
use crate::utils::{absolute_path, load_workspace};

pub fn context_command(path: Option<&Path>, workspace: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(path) => absolute_path(path)?,
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let workspace = load_workspace(workspace, Some(&path))?;

    let builder = CommandBuilder::new(&workspace, Some(&path));
    print_context(&workspace, &builder);
    Ok(())
}
