//! Media-root path containment.
//!
//! Every filesystem path accepted from a caller must resolve to a location
//! at or beneath the configured media root. Resolution is purely lexical so
//! traversal attempts are rejected before any filesystem access happens.

use std::path::{Component, Path, PathBuf};

use super::error::PathError;

/// The configured media root and its containment rules.
#[derive(Debug, Clone)]
pub struct MediaRoot {
    root: PathBuf,
}

impl MediaRoot {
    /// Wraps a root directory. The root itself should be an absolute,
    /// already-normalized path (enforced by config validation).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Resolves a caller-supplied path against the root.
    ///
    /// Relative inputs are joined to the root; absolute inputs must already
    /// lie beneath it. The result is lexically normalized and verified to
    /// stay inside the root before it is returned.
    pub fn resolve(&self, requested: impl AsRef<Path>) -> Result<PathBuf, PathError> {
        let requested = requested.as_ref();

        let joined = if requested.is_absolute() {
            requested.to_path_buf()
        } else {
            self.root.join(requested)
        };

        let normalized = lexical_normalize(&joined).ok_or_else(|| PathError::Invalid {
            path: requested.to_path_buf(),
        })?;

        if !normalized.starts_with(&self.root) {
            return Err(PathError::OutsideRoot {
                path: requested.to_path_buf(),
            });
        }

        Ok(normalized)
    }

    /// Renders an absolute path inside the root as a root-relative string.
    pub fn relativize(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    }
}

/// Collapses `.` and `..` segments without touching the filesystem. Returns
/// None when a `..` would pop past the path's prefix.
fn lexical_normalize(path: &Path) -> Option<PathBuf> {
    let mut normalized = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component),
            Component::CurDir => {}
            Component::ParentDir => {
                if depth == 0 {
                    return None;
                }
                normalized.pop();
                depth -= 1;
            }
            Component::Normal(part) => {
                normalized.push(part);
                depth += 1;
            }
        }
    }

    Some(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> MediaRoot {
        MediaRoot::new("/srv/media")
    }

    #[test]
    fn test_resolve_relative_paths() {
        assert_eq!(
            root().resolve("movies/a.mkv").unwrap(),
            PathBuf::from("/srv/media/movies/a.mkv")
        );
        assert_eq!(root().resolve("").unwrap(), PathBuf::from("/srv/media"));
    }

    #[test]
    fn test_resolve_absolute_path_inside_root() {
        assert_eq!(
            root().resolve("/srv/media/shows/b.mkv").unwrap(),
            PathBuf::from("/srv/media/shows/b.mkv")
        );
    }

    #[test]
    fn test_rejects_escapes() {
        assert!(matches!(
            root().resolve("../etc/passwd"),
            Err(PathError::OutsideRoot { .. })
        ));
        assert!(matches!(
            root().resolve("movies/../../etc/passwd"),
            Err(PathError::OutsideRoot { .. })
        ));
        assert!(matches!(
            root().resolve("/etc/passwd"),
            Err(PathError::OutsideRoot { .. })
        ));
    }

    #[test]
    fn test_rejects_every_traversal_depth() {
        for depth in 1..6 {
            let requested = format!("{}etc/passwd", "../".repeat(depth));
            assert!(root().resolve(&requested).is_err(), "{}", requested);
        }
    }

    #[test]
    fn test_inner_dotdot_resolved_lexically() {
        assert_eq!(
            root().resolve("movies/../shows/c.mkv").unwrap(),
            PathBuf::from("/srv/media/shows/c.mkv")
        );
    }

    #[test]
    fn test_relativize() {
        assert_eq!(
            root().relativize(Path::new("/srv/media/movies/a.mkv")),
            "movies/a.mkv"
        );
    }
}
