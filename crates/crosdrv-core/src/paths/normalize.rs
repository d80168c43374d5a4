//! Lexical path normalization.
//!
//! Nothing here touches the filesystem: `..` pops the previous component
//! without resolving symlinks, which is how the ancestor walk treats parents.

use std::env;
use std::path::{Component, Path, PathBuf};

use super::error::PathError;
use crate::ports::OsPort;

/// Clean an absolute path lexically.
///
/// Drops `.` components and resolves `..` against the preceding component.
/// `..` at the root stays at the root.
pub fn lexical_absolute(path: &Path) -> Result<PathBuf, PathError> {
    if path.as_os_str().is_empty() {
        return Err(PathError::EmptyPath);
    }
    if !path.is_absolute() {
        return Err(PathError::NotAbsolute(path.to_path_buf()));
    }

    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                cleaned.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
        }
    }
    Ok(cleaned)
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub fn normalize_user_path(raw: &str, os: &dyn OsPort) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed == "~" {
        os.homedir()
    } else if let Some(rest) = trimmed.strip_prefix("~/") {
        os.homedir().join(rest)
    } else {
        PathBuf::from(trimmed)
    };

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))?
    };
    lexical_absolute(&absolute)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::ports::os::MockOsPort;

    fn home_at(path: &'static str) -> MockOsPort {
        let mut os = MockOsPort::new();
        os.expect_homedir().return_const(PathBuf::from(path));
        os
    }

    #[test]
    fn lexical_drops_dots() {
        let cleaned = lexical_absolute(Path::new("/a/./b/../c/")).unwrap();
        assert_eq!(cleaned, PathBuf::from("/a/c"));
    }

    #[test]
    fn lexical_parent_of_root_is_root() {
        let cleaned = lexical_absolute(Path::new("/../../x")).unwrap();
        assert_eq!(cleaned, PathBuf::from("/x"));
    }

    #[test]
    fn lexical_rejects_relative_and_empty() {
        assert!(matches!(
            lexical_absolute(Path::new("a/b")),
            Err(PathError::NotAbsolute(_))
        ));
        assert!(matches!(
            lexical_absolute(Path::new("")),
            Err(PathError::EmptyPath)
        ));
    }

    #[test]
    fn tilde_expands_to_homedir() {
        let os = home_at("/home/dev");
        assert_eq!(
            normalize_user_path("~/chromiumos/src", &os).unwrap(),
            PathBuf::from("/home/dev/chromiumos/src")
        );
        assert_eq!(
            normalize_user_path(" ~ ", &os).unwrap(),
            PathBuf::from("/home/dev")
        );
    }

    #[test]
    fn relative_joins_current_dir() {
        let os = MockOsPort::new();
        let resolved = normalize_user_path("some/file.cc", &os).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("some/file.cc"));
    }

    #[test]
    fn blank_input_is_rejected() {
        let os = MockOsPort::new();
        assert!(matches!(
            normalize_user_path("   ", &os),
            Err(PathError::EmptyPath)
        ));
    }
}
