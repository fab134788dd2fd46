pub mod cli_option;
pub mod context_path;
pub mod shortcut;

pub use cli_option::{CliOption, OptionValue};
pub use context_path::ContextPath;
pub use shortcut::{Shortcut, ShortcutCatalog, ShortcutKind};
