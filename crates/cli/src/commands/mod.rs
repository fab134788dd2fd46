pub mod context;
pub mod generate;
pub mod types;

pub use context::context_command;
pub use generate::{command_command, guess_command};
pub use types::types_command;
