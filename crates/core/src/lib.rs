//! ng-gen - builds Angular schematic commands from where the user stands
//!
//! This crate provides functionality to:
//! - Resolve a filesystem location to its workspace project and code folder
//! - Assemble `ng generate` invocations from schematics, names and options
//! - Predict the file a generation will create, without running it
pub mod utils;

pub mod collections;
pub mod command;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod services;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use collections::{Collection, CollectionCatalog, Schematic};
pub use command::{CommandBuilder, NgCommand};
pub use config::{Project, ProjectType, WorkspaceConfig};
