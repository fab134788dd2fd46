//! Predicts the file a schematic will write, without running it

use std::path::{Path, PathBuf};

use super::naming::{dasherize, split_name};
use crate::types::context_path::join_posix;

/// Naming convention families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Folder per artifact, `.component.` infix; also used for unknown schematics
    Component,
    /// Folder per artifact, `.module.` infix
    Module,
    /// Flat file suffixed with the schematic name: service, guard, pipe ...
    Suffixed,
    /// Flat file without infix unless a type is given: class, interface
    Plain,
    Enum,
    Application,
    Library,
}

impl ArtifactKind {
    pub fn from_schematic(name: &str) -> Self {
        match name {
            "component" => ArtifactKind::Component,
            "module" => ArtifactKind::Module,
            "service" | "guard" | "pipe" | "directive" | "resolver" | "interceptor" => {
                ArtifactKind::Suffixed
            }
            "class" | "interface" => ArtifactKind::Plain,
            "enum" => ArtifactKind::Enum,
            "application" => ArtifactKind::Application,
            "library" => ArtifactKind::Library,
            _ => ArtifactKind::Component,
        }
    }
}

/// Inputs for a path prediction
#[derive(Debug, Clone)]
pub struct GeneratedPathGuesser<'a> {
    pub workspace_root: &'a Path,
    pub new_project_root: &'a str,
    /// The owning project's `src/app` or `src/lib` folder
    pub code_folder: PathBuf,
    pub schematic: &'a str,
    /// Context prefix plus the raw name, e.g. `hello/world`
    pub first_arg: &'a str,
    /// Type shortcut suffix replacing the default infix
    pub type_suffix: Option<&'a str>,
    pub flat: bool,
}

impl GeneratedPathGuesser<'_> {
    pub fn guess(&self) -> PathBuf {
        let kind = ArtifactKind::from_schematic(self.schematic);
        let (dir, name) = split_name(self.first_arg);
        let file_name = dasherize(&name);

        tracing::debug!(
            "Guessing {:?} path for '{}' (dir '{}', suffix {:?}, flat {})",
            kind,
            name,
            dir,
            self.type_suffix,
            self.flat
        );

        match kind {
            ArtifactKind::Application => self.new_project(&file_name).join("src").join("main.ts"),
            ArtifactKind::Library => self.new_project(&file_name).join("src").join("public-api.ts"),
            ArtifactKind::Component | ArtifactKind::Module => {
                let base = join_posix(&self.code_folder, &dir);
                match self.type_suffix {
                    Some(suffix) => base.join(format!("{file_name}.{suffix}.ts")),
                    None => {
                        let infix = if kind == ArtifactKind::Module {
                            "module"
                        } else {
                            "component"
                        };
                        let folder = if self.flat { base } else { base.join(&file_name) };
                        folder.join(format!("{file_name}.{infix}.ts"))
                    }
                }
            }
            ArtifactKind::Suffixed => join_posix(&self.code_folder, &dir)
                .join(format!("{file_name}.{}.ts", self.schematic)),
            ArtifactKind::Plain => {
                let base = join_posix(&self.code_folder, &dir);
                match self.type_suffix {
                    Some(suffix) => base.join(format!("{file_name}.{suffix}.ts")),
                    None => base.join(format!("{file_name}.ts")),
                }
            }
            ArtifactKind::Enum => {
                join_posix(&self.code_folder, &dir).join(format!("{file_name}.enum.ts"))
            }
        }
    }

    fn new_project(&self, name: &str) -> PathBuf {
        join_posix(self.workspace_root, self.new_project_root).join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guesser<'a>(schematic: &'a str, first_arg: &'a str) -> GeneratedPathGuesser<'a> {
        GeneratedPathGuesser {
            workspace_root: Path::new("/ws"),
            new_project_root: "projects",
            code_folder: PathBuf::from("/ws/src/app"),
            schematic,
            first_arg,
            type_suffix: None,
            flat: false,
        }
    }

    #[test]
    fn test_component_nested() {
        assert_eq!(
            guesser("component", "hello/world").guess(),
            PathBuf::from("/ws/src/app/hello/world/world.component.ts")
        );
    }

    #[test]
    fn test_component_flat() {
        let guess = GeneratedPathGuesser {
            flat: true,
            ..guesser("component", "hello")
        };
        assert_eq!(guess.guess(), PathBuf::from("/ws/src/app/hello.component.ts"));
    }

    #[test]
    fn test_component_type_suffix_is_flat() {
        let guess = GeneratedPathGuesser {
            type_suffix: Some("page"),
            ..guesser("component", "shop/cart")
        };
        assert_eq!(guess.guess(), PathBuf::from("/ws/src/app/shop/cart.page.ts"));
    }

    #[test]
    fn test_flat_kinds() {
        assert_eq!(guesser("service", "hello").guess(), PathBuf::from("/ws/src/app/hello.service.ts"));
        assert_eq!(guesser("guard", "auth/admin").guess(), PathBuf::from("/ws/src/app/auth/admin.guard.ts"));
        assert_eq!(guesser("pipe", "hello").guess(), PathBuf::from("/ws/src/app/hello.pipe.ts"));
        assert_eq!(guesser("interface", "hello").guess(), PathBuf::from("/ws/src/app/hello.ts"));
        assert_eq!(guesser("enum", "color").guess(), PathBuf::from("/ws/src/app/color.enum.ts"));
    }

    #[test]
    fn test_module_nested() {
        assert_eq!(guesser("module", "hello").guess(), PathBuf::from("/ws/src/app/hello/hello.module.ts"));
    }

    #[test]
    fn test_unknown_schematic_uses_component_layout() {
        assert_eq!(
            guesser("table", "hello").guess(),
            PathBuf::from("/ws/src/app/hello/hello.component.ts")
        );
    }

    #[test]
    fn test_new_projects() {
        assert_eq!(
            guesser("library", "ui-kit").guess(),
            PathBuf::from("/ws/projects/ui-kit/src/public-api.ts")
        );
        assert_eq!(
            guesser("application", "admin").guess(),
            PathBuf::from("/ws/projects/admin/src/main.ts")
        );
    }

    #[test]
    fn test_name_is_dasherized() {
        assert_eq!(
            guesser("component", "userProfile").guess(),
            PathBuf::from("/ws/src/app/user-profile/user-profile.component.ts")
        );
    }
}
