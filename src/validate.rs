use std::path::{Component, Path, PathBuf};

use tracing::{debug, instrument};

use crate::error::ResolveError;

/// Joins `path` onto `base` when relative and folds `.` / `..` lexically.
/// Symlinks are not resolved.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() { path.to_path_buf() } else { base.join(path) };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // `/..` stays `/`
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                }
            }
            Component::Normal(name) => normalized.push(name),
        }
    }

    normalized
}

/// Absolute form of the binding cache directory, created along with any
/// missing parents. An existing directory is left untouched.
#[instrument(level = "debug", skip(base))]
pub fn check_binding_path(path: &Path, base: &Path) -> Result<PathBuf, ResolveError> {
    let path = absolutize(path, base);

    if !path.is_dir() {
        debug!(path = %path.display(), "creating binding cache directory");
        // create_dir_all treats a directory raced into existence as success
        std::fs::create_dir_all(&path).map_err(|source| ResolveError::BindingDir {
            path: path.clone(),
            source,
        })?;
    }

    Ok(path)
}

/// Absolute form of `path` if it exists as a file or directory.
#[instrument(level = "debug", skip(base))]
pub fn valid_path(path: &Path, base: &Path) -> Result<PathBuf, ResolveError> {
    if !base.join(path).exists() {
        return Err(ResolveError::PathNotFound { path: path.display().to_string() });
    }

    Ok(absolutize(path, base))
}
