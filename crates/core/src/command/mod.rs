//! `ng generate` command assembly and generated path prediction

pub mod builder;
pub mod naming;
pub mod ng_command;
pub mod path_guess;

pub use builder::CommandBuilder;
pub use ng_command::NgCommand;
pub use path_guess::{ArtifactKind, GeneratedPathGuesser};
