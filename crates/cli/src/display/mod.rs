pub mod formatter;

pub use formatter::{format_shortcut, print_context, print_shortcuts};
