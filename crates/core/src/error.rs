use std::io;

/// Errors that can occur while loading a workspace or looking up catalogs
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("No workspace configuration found from {0}")]
    WorkspaceNotFound(String),

    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    #[error("Unknown schematic '{schematic}' in collection '{collection}'")]
    UnknownSchematic {
        collection: String,
        schematic: String,
    },

    #[error("Unknown {kind} type: {label}")]
    UnknownShortcut { kind: String, label: String },
}

/// Result type alias for ng-gen operations
pub type Result<T> = std::result::Result<T, Error>;
