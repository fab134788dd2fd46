use anyhow::Result;
use std::path::Path;

use crate::display::print_shortcuts;
use crate::utils::load_workspace;

pub fn types_command(module: bool, project: Option<&str>, workspace: Option<&Path>) -> Result<()> {
    let workspace = load_workspace(workspace, None)?;

    if module {
        println!("📦 Module types:");
        print_shortcuts(workspace.get_module_types());
    } else {
        let project = project.or(workspace.default_project()).unwrap_or_default();
        println!("🧩 Component types ({}):", if project.is_empty() { "workspace" } else { project });
        print_shortcuts(&workspace.get_component_types(project));
    }

    Ok(())
}
