//! Service implementations over the interface traits

pub mod project_resolver;

pub use project_resolver::ProjectResolver;
