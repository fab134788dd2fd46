//! Built-in catalogs: the Angular schematics collection and default type shortcuts

use super::{Collection, Schematic};
use crate::types::{CliOption, Shortcut};

pub const ANGULAR_COLLECTION: &str = "@schematics/angular";

/// Folder new applications and libraries are created under
pub const DEFAULT_NEW_PROJECT_ROOT: &str = "projects";

const COMMON: &[&str] = &["name", "path", "project"];

const APPLICATION: &[&str] = &[
    "name",
    "inlineStyle",
    "inlineTemplate",
    "minimal",
    "prefix",
    "routing",
    "skipInstall",
    "skipTests",
    "ssr",
    "standalone",
    "strict",
    "style",
    "viewEncapsulation",
];

const LIBRARY: &[&str] = &[
    "name",
    "entryFile",
    "prefix",
    "skipInstall",
    "skipPackageJson",
    "skipTsConfig",
    "standalone",
];

const COMPONENT: &[&str] = &[
    "changeDetection",
    "displayBlock",
    "entryComponent",
    "export",
    "flat",
    "inlineStyle",
    "inlineTemplate",
    "module",
    "prefix",
    "selector",
    "skipImport",
    "skipSelector",
    "skipTests",
    "standalone",
    "style",
    "type",
    "viewEncapsulation",
];

const DIRECTIVE: &[&str] = &[
    "export",
    "flat",
    "module",
    "prefix",
    "selector",
    "skipImport",
    "skipTests",
    "standalone",
];

const PIPE: &[&str] = &["export", "flat", "module", "skipImport", "skipTests", "standalone"];

const SERVICE: &[&str] = &["flat", "skipTests"];

const GUARD: &[&str] = &["flat", "functional", "implements", "skipTests"];

const RESOLVER: &[&str] = &["flat", "functional", "skipTests"];

const MODULE: &[&str] = &["commonModule", "flat", "module", "route", "routing", "routingScope"];

const CLASS: &[&str] = &["skipTests", "type"];

const INTERFACE: &[&str] = &["prefix", "type"];

const ENUM: &[&str] = &["type"];

fn project_scoped(name: &str, options: &[&str]) -> Schematic {
    Schematic::new(name, COMMON.iter().chain(options.iter()).copied())
}

/// The `@schematics/angular` collection with its declared options
pub fn angular_collection() -> Collection {
    Collection::new(ANGULAR_COLLECTION)
        .with_schematic(Schematic::new("application", APPLICATION.iter().copied()).with_aliases(&["app"]))
        .with_schematic(Schematic::new("library", LIBRARY.iter().copied()).with_aliases(&["lib"]))
        .with_schematic(project_scoped("component", COMPONENT).with_aliases(&["c"]))
        .with_schematic(project_scoped("directive", DIRECTIVE).with_aliases(&["d"]))
        .with_schematic(project_scoped("pipe", PIPE).with_aliases(&["p"]))
        .with_schematic(project_scoped("service", SERVICE).with_aliases(&["s"]))
        .with_schematic(project_scoped("guard", GUARD).with_aliases(&["g"]))
        .with_schematic(project_scoped("resolver", RESOLVER).with_aliases(&["r"]))
        .with_schematic(project_scoped("interceptor", RESOLVER))
        .with_schematic(project_scoped("module", MODULE).with_aliases(&["m"]))
        .with_schematic(project_scoped("class", CLASS).with_aliases(&["cl"]))
        .with_schematic(project_scoped("interface", INTERFACE).with_aliases(&["i"]))
        .with_schematic(project_scoped("enum", ENUM).with_aliases(&["e"]))
}

pub mod component_type {
    pub const DEFAULT: &str = "Default";
    pub const PAGE: &str = "Page";
    pub const PURE: &str = "Pure";
    pub const EXPORTED: &str = "Exported";
}

pub mod module_type {
    pub const DEFAULT: &str = "Default";
    pub const LAZY: &str = "Lazy";
    pub const ROUTING: &str = "Routing";
}

pub fn default_component_types() -> Vec<Shortcut> {
    vec![
        Shortcut::new(component_type::DEFAULT, vec![]),
        Shortcut::new(component_type::PAGE, vec![CliOption::flag("skipSelector")]),
        Shortcut::new(
            component_type::PURE,
            vec![CliOption::new("changeDetection", "OnPush")],
        ),
        Shortcut::new(
            component_type::EXPORTED,
            vec![
                CliOption::flag("export"),
                CliOption::new("changeDetection", "OnPush"),
            ],
        ),
    ]
}

pub fn default_module_types() -> Vec<Shortcut> {
    vec![
        Shortcut::new(module_type::DEFAULT, vec![]),
        Shortcut::new(module_type::LAZY, vec![CliOption::new("module", "app")]),
        Shortcut::new(
            module_type::ROUTING,
            vec![CliOption::new("module", "app"), CliOption::flag("routing")],
        ),
    ]
}
