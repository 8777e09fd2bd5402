use shellexpand::LookupError;
use std::{env::VarError, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserPathError {
    #[error("Error resolving the given path ('{1}'): {0}")]
    Expand(#[source] LookupError<VarError>, String),
    #[error("An empty path was given for the template store.")]
    Empty,
}

/// Converts a user specified path (potentially using `~` or `$VAR`) into
/// a `PathBuf`.
///
/// The path is not canonicalized, as the template store is allowed not to
/// exist yet.
pub fn to_user_path(path: &str) -> Result<PathBuf, UserPathError> {
    let path = path.trim();
    if path.is_empty() {
        return Err(UserPathError::Empty);
    }
    let expanded =
        shellexpand::full(path).map_err(|e| UserPathError::Expand(e, path.to_string()))?;
    Ok(PathBuf::from(expanded.as_ref()))
}
