//! Seams between the core and the workspace description it reads

pub mod project_catalog;

pub use project_catalog::ProjectCatalog;
