use crate::userbool::Confirm;
use log::debug;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use walkdir::WalkDir;

const DIR_EXISTS: &str = "Directory exists, do you want to overwrite (merge) it?";
const FILE_EXISTS: &str = "File exists, do you want to overwrite it?";

#[derive(Debug, Error)]
pub enum CopyError {
    #[error("Could not copy into '{1}': {0}")]
    Io(#[source] io::Error, String),
    #[error("Could not read the template: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("'{0}' is the template itself.")]
    SameFile(String),
    #[error("Cannot copy a directory template into itself ('{0}').")]
    IntoItself(String),
    #[error("'{0}' is not part of the template being copied.")]
    Stray(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Created,
    Overwritten,
    Skipped,
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> CopyError + '_ {
    move |e| CopyError::Io(e, path.to_string_lossy().to_string())
}

/// `path` with symlinks and `..` resolved, even when its last component
/// does not exist yet.
fn resolved(path: &Path) -> Option<PathBuf> {
    if let Ok(path) = path.canonicalize() {
        return Some(path);
    }
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Some(parent.canonicalize().ok()?.join(path.file_name()?))
}

/// Whether `path` is `root` or lies somewhere below it.
fn is_within(path: &Path, root: &Path) -> bool {
    matches!(
        (resolved(path), resolved(root)),
        (Some(path), Some(root)) if path.starts_with(&root)
    )
}

/// Copies the file `from` to `to`, asking before replacing an existing file.
///
/// If `to` is a directory the file lands inside it, under its own name.
pub fn safe_copy(
    from: &Path,
    to: &Path,
    confirm: &mut impl Confirm,
) -> Result<(PathBuf, CopyOutcome), CopyError> {
    let to = match from.file_name() {
        Some(file_name) if to.is_dir() => to.join(file_name),
        _ => to.to_path_buf(),
    };
    if is_within(&to, from) {
        return Err(CopyError::SameFile(to.to_string_lossy().to_string()));
    }
    let outcome = if to.is_file() {
        if !confirm.confirm(FILE_EXISTS, true) {
            return Ok((to, CopyOutcome::Skipped));
        }
        CopyOutcome::Overwritten
    } else {
        CopyOutcome::Created
    };
    fs::copy(from, &to).map_err(io_err(&to))?;
    Ok((to, outcome))
}

/// Recursively copies the directory `from` into `to`, merging with whatever
/// `to` already holds. Asks first if `to` exists.
pub fn safe_copytree(
    from: &Path,
    to: &Path,
    confirm: &mut impl Confirm,
) -> Result<CopyOutcome, CopyError> {
    if is_within(to, from) {
        return Err(CopyError::IntoItself(to.to_string_lossy().to_string()));
    }
    let outcome = if to.exists() {
        if !confirm.confirm(DIR_EXISTS, true) {
            return Ok(CopyOutcome::Skipped);
        }
        CopyOutcome::Overwritten
    } else {
        CopyOutcome::Created
    };
    copy_tree(from, to)?;
    Ok(outcome)
}

fn copy_tree(from: &Path, to: &Path) -> Result<(), CopyError> {
    fs::create_dir_all(to).map_err(io_err(to))?;
    for entry in WalkDir::new(from).min_depth(1).follow_links(true) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(|_| CopyError::Stray(entry.path().to_string_lossy().to_string()))?;
        let target = to.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(io_err(&target))?;
        } else {
            debug!("{} -> {}", entry.path().display(), target.display());
            fs::copy(entry.path(), &target).map_err(io_err(&target))?;
        }
    }
    Ok(())
}
