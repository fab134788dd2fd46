//! Fixture workspaces written to temporary directories
//!
//! `defaults` is a single-application workspace with no preferences.
//! `customized` adds a library and a sub-application, a non-default
//! collection, and a preferences file with user component types.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ng_gen_core::WorkspaceConfig;
use serde_json::json;
use tempfile::TempDir;

pub const ROOT_PROJECT: &str = "my-app";
pub const LIB_PROJECT: &str = "my-lib";
pub const SUBAPP_PROJECT: &str = "my-subapp";
pub const MATERIAL_COLLECTION: &str = "@angular/material";
pub const CUSTOMIZED_DEFAULT_COLLECTION: &str = "@ngrx/schematics";
pub const USER_COMPONENT_TYPE: &str = "Widget";
pub const SUBAPP_COMPONENT_TYPE: &str = "Dialog";

/// A workspace on disk; the directory lives as long as this value
pub struct Fixture {
    dir: TempDir,
    pub workspace: WorkspaceConfig,
}

impl Fixture {
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path from a `/`-separated path relative to the workspace root
    pub fn path(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .filter(|s| !s.is_empty())
            .fold(self.root().to_path_buf(), |acc, s| acc.join(s))
    }
}

fn write(dir: &Path, name: &str, value: &serde_json::Value) -> io::Result<()> {
    let contents = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    fs::write(dir.join(name), contents)
}

fn load(dir: TempDir) -> io::Result<Fixture> {
    let workspace = WorkspaceConfig::load(dir.path()).map_err(io::Error::other)?;
    Ok(Fixture { dir, workspace })
}

/// Single application at the workspace root, stock catalogs
pub fn defaults() -> io::Result<Fixture> {
    let dir = TempDir::new()?;
    write(
        dir.path(),
        "angular.json",
        &json!({
            "version": 1,
            "newProjectRoot": "projects",
            "projects": {
                ROOT_PROJECT: {
                    "projectType": "application",
                    "root": "",
                    "sourceRoot": "src",
                    "prefix": "app"
                }
            },
            "defaultProject": ROOT_PROJECT
        }),
    )?;
    fs::create_dir_all(dir.path().join("src/app"))?;
    load(dir)
}

/// Root application, a library, a sub-application and user preferences
pub fn customized() -> io::Result<Fixture> {
    let dir = TempDir::new()?;
    write(
        dir.path(),
        "angular.json",
        &json!({
            "version": 1,
            "newProjectRoot": "projects",
            "projects": {
                ROOT_PROJECT: {
                    "projectType": "application",
                    "root": "",
                    "sourceRoot": "src"
                },
                LIB_PROJECT: {
                    "projectType": "library",
                    "root": "projects/my-lib",
                    "sourceRoot": "projects/my-lib/src",
                    "schematics": {
                        "@schematics/angular:component": { "flat": true }
                    }
                },
                SUBAPP_PROJECT: {
                    "projectType": "application",
                    "root": "projects/my-subapp",
                    "sourceRoot": "projects/my-subapp/src"
                }
            },
            "defaultProject": ROOT_PROJECT,
            "cli": { "defaultCollection": CUSTOMIZED_DEFAULT_COLLECTION }
        }),
    )?;
    write(
        dir.path(),
        ".ng-gen.json",
        &json!({
            "componentTypes": [
                { "label": "Page", "options": [["type", "page"], ["skipSelector", true]] },
                { "label": USER_COMPONENT_TYPE, "options": [["skipSelector", true], ["entryComponent", true]] }
            ],
            "collections": {
                MATERIAL_COLLECTION: {
                    "table": ["name", "path", "project", "module", "flat"],
                    "navigation": ["name", "path", "project", "module"]
                }
            },
            "projects": {
                SUBAPP_PROJECT: {
                    "componentTypes": [
                        { "label": SUBAPP_COMPONENT_TYPE, "options": [["type", "dialog"], ["skipSelector", true]] }
                    ]
                }
            }
        }),
    )?;
    load(dir)
}
