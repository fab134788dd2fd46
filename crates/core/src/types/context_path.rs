use serde::Serialize;
use std::path::{Component, Path, PathBuf};

/// The filesystem location a generation request was made from
///
/// Computed once from the raw path and the workspace root, then frozen.
/// All relative forms use `/` separators regardless of platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextPath {
    pub full: String,
    pub relative_to_workspace_folder: String,
    pub relative_to_project_folder: String,
}

impl ContextPath {
    /// Build a context path relative to the workspace root
    ///
    /// An empty or missing path gives an empty context. A path outside the
    /// workspace keeps `full` but has no relative forms.
    pub fn new(raw: Option<&Path>, workspace_root: &Path) -> Self {
        let raw = match raw {
            Some(path) if !path.as_os_str().is_empty() => normalize(path),
            _ => return Self::default(),
        };
        let raw = raw.as_path();

        let relative_to_workspace_folder = to_posix_relative(raw, workspace_root).unwrap_or_else(|| {
            tracing::debug!(
                "Context path {:?} is outside workspace {:?}",
                raw,
                workspace_root
            );
            String::new()
        });

        Self {
            full: raw.to_string_lossy().into_owned(),
            relative_to_workspace_folder,
            relative_to_project_folder: String::new(),
        }
    }

    /// Fill in the path relative to the owning project's code folder
    pub fn with_project_folder(mut self, project_folder: &Path) -> Self {
        if let Some(path) = self.path() {
            self.relative_to_project_folder =
                to_posix_relative(path, project_folder).unwrap_or_default();
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }

    /// True when the context is exactly the workspace root or lies outside it
    pub fn is_workspace_level(&self) -> bool {
        self.relative_to_workspace_folder.is_empty()
    }

    pub fn path(&self) -> Option<&Path> {
        if self.full.is_empty() {
            None
        } else {
            Some(Path::new(&self.full))
        }
    }

    /// Whether the context names a file rather than a folder
    ///
    /// Decided from the last segment having an extension, the path is never
    /// touched on disk.
    pub fn is_file(&self) -> bool {
        self.path()
            .and_then(|p| p.extension())
            .is_some_and(|ext| !ext.is_empty())
    }

    /// The project-relative folder, dropping a trailing file name
    pub fn project_relative_dir(&self) -> &str {
        let relative = self.relative_to_project_folder.as_str();
        if !self.is_file() {
            return relative;
        }
        match relative.rfind('/') {
            Some(pos) => &relative[..pos],
            None => "",
        }
    }
}

/// Resolve `.` and `..` lexically, without touching the filesystem
///
/// `..` never climbs above the root or a prefix.
pub fn normalize(path: &Path) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            c => components.push(c),
        }
    }
    components.iter().collect()
}

/// `path` relative to `base` with `/` separators, `None` when not under `base`
pub fn to_posix_relative(path: &Path, base: &Path) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?;
    let segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    Some(segments.join("/"))
}

/// Join a `/`-separated relative path onto `base`
pub fn join_posix(base: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|s| !s.is_empty())
        .fold(base.to_path_buf(), |acc, segment| acc.join(segment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context() {
        let context = ContextPath::new(None, Path::new("/ws"));
        assert_eq!(context, ContextPath::default());

        let context = ContextPath::new(Some(Path::new("")), Path::new("/ws"));
        assert!(context.is_empty());
    }

    #[test]
    fn test_workspace_root_has_no_relative_forms() {
        let context = ContextPath::new(Some(Path::new("/ws")), Path::new("/ws"));
        assert_eq!(context.full, "/ws");
        assert_eq!(context.relative_to_workspace_folder, "");
        assert!(context.is_workspace_level());
    }

    #[test]
    fn test_relative_paths() {
        let context = ContextPath::new(Some(Path::new("/ws/src/app/hello/world")), Path::new("/ws"))
            .with_project_folder(Path::new("/ws/src/app"));

        assert_eq!(context.relative_to_workspace_folder, "src/app/hello/world");
        assert_eq!(context.relative_to_project_folder, "hello/world");
        assert!(context
            .relative_to_workspace_folder
            .ends_with(&context.relative_to_project_folder));
    }

    #[test]
    fn test_outside_project_folder() {
        let context = ContextPath::new(Some(Path::new("/ws/src")), Path::new("/ws"))
            .with_project_folder(Path::new("/ws/src/app"));

        assert_eq!(context.relative_to_workspace_folder, "src");
        assert_eq!(context.relative_to_project_folder, "");
    }

    #[test]
    fn test_file_context_keeps_file_name() {
        let context = ContextPath::new(Some(Path::new("/ws/src/app/hello/world.ts")), Path::new("/ws"))
            .with_project_folder(Path::new("/ws/src/app"));

        assert!(context.is_file());
        assert_eq!(context.relative_to_project_folder, "hello/world.ts");
        assert_eq!(context.project_relative_dir(), "hello");
    }

    #[test]
    fn test_file_at_project_folder_root() {
        let context = ContextPath::new(Some(Path::new("/ws/src/app/app.module.ts")), Path::new("/ws"))
            .with_project_folder(Path::new("/ws/src/app"));

        assert_eq!(context.project_relative_dir(), "");
    }

    #[test]
    fn test_outside_workspace() {
        let context = ContextPath::new(Some(Path::new("/elsewhere/src")), Path::new("/ws"));
        assert_eq!(context.full, "/elsewhere/src");
        assert!(context.is_workspace_level());
    }

    #[test]
    fn test_parent_segments_are_resolved() {
        let context = ContextPath::new(
            Some(Path::new("/ws/src/../projects/lib/./src/lib/hello")),
            Path::new("/ws"),
        );
        assert_eq!(context.full, "/ws/projects/lib/src/lib/hello");
        assert_eq!(context.relative_to_workspace_folder, "projects/lib/src/lib/hello");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/ws/a/../b/./c")), PathBuf::from("/ws/b/c"));
        assert_eq!(normalize(Path::new("/../ws")), PathBuf::from("/ws"));
        assert_eq!(normalize(Path::new("../ws/..")), PathBuf::from(".."));
    }

    #[test]
    fn test_join_posix() {
        assert_eq!(
            join_posix(Path::new("/ws"), "src/app/"),
            PathBuf::from("/ws/src/app")
        );
        assert_eq!(join_posix(Path::new("/ws"), ""), PathBuf::from("/ws"));
    }
}
