//! Path anchoring relative to the project root.
//!
//! All relative paths in the assembled configuration resolve against the
//! project root, never against the invoking shell's working directory.

use std::path::{Component, Path, PathBuf};

/// Find the project root by walking up from `cwd` looking for `package.json` or `.git`.
///
/// Returns the first directory containing either marker, or `None` if neither is found.
#[must_use]
pub fn project_root(cwd: &Path) -> Option<PathBuf> {
    cwd.ancestors()
        .find(|dir| dir.join("package.json").exists() || dir.join(".git").exists())
        .map(Path::to_path_buf)
}

/// Join `relative` onto `base`, normalizing `.` and `..` lexically.
///
/// Absolute inputs are returned unchanged. Pure, no filesystem access.
#[must_use]
pub fn anchored(base: &Path, relative: impl AsRef<Path>) -> PathBuf {
    let relative = relative.as_ref();
    if relative.is_absolute() {
        return relative.to_path_buf();
    }

    let mut joined = base.to_path_buf();
    for component in relative.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                joined.pop();
            }
            other => joined.push(other),
        }
    }

    joined
}
