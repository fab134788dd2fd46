pub mod parser;
pub mod workspace;

pub use parser::parse_options;
pub use workspace::{absolute_path, load_workspace};
