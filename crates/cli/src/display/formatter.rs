use ng_gen_core::{CommandBuilder, Shortcut, ShortcutCatalog, WorkspaceConfig};

/// One-line description of a shortcut: label, options and suffix
pub fn format_shortcut(shortcut: &Shortcut) -> String {
    let options: Vec<String> = shortcut
        .options
        .iter()
        .flat_map(|o| o.to_args())
        .collect();

    let mut line = shortcut.label.clone();
    if !options.is_empty() {
        line.push_str(&format!("  {}", options.join(" ")));
    }
    if let Some(suffix) = shortcut.suffix() {
        line.push_str(&format!("  (*.{suffix}.ts)"));
    }
    line
}

pub fn print_shortcuts(catalog: &ShortcutCatalog) {
    for shortcut in catalog.iter() {
        println!("   • {}", format_shortcut(shortcut));
    }
}

pub fn print_context(workspace: &WorkspaceConfig, builder: &CommandBuilder<'_>) {
    let context = builder.context_path();

    println!("🔍 Context: {}", context.full);
    println!("{}", "=".repeat(80));
    println!("   📁 Workspace: {}", workspace.root().display());
    println!("   📏 Relative to workspace: {}", display_or_dash(&context.relative_to_workspace_folder));
    println!("   📏 Relative to project: {}", display_or_dash(&context.relative_to_project_folder));

    let project = builder.get_project_name();
    if project.is_empty() {
        println!("   📦 Project: -");
    } else {
        let marker = if workspace.default_project() == Some(project) {
            " (default)"
        } else {
            ""
        };
        println!("   📦 Project: {}{}", project, marker);
    }

    println!("   🏷️  Name prefix: {}", display_or_dash(&builder.get_context_for_name_as_first_arg()));
    println!("   🧰 Default collection: {}", workspace.default_collection());
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
