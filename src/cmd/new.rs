use crate::{
    copy::{self, CopyError, CopyOutcome},
    store::{StoreError, TemplateStore},
    userbool::Confirm,
};
use colored::Colorize;
use log::{info, warn};
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

pub const TARGET_ARG: &str = "TARGET";
pub const NAMES_ARG: &str = "NAMES";

/// What happened to one requested destination.
#[derive(Debug)]
pub struct Creation {
    pub destination: PathBuf,
    pub result: Result<CopyOutcome, CopyError>,
}

impl Creation {
    pub fn failed(&self) -> bool {
        self.result.is_err()
    }
}

/// Copies the template `target` into `here`.
///
/// Without `names`, the copy keeps the template's on-disk name. Otherwise
/// one copy is made per name; every name is attempted even if an earlier
/// one failed or was declined.
pub fn create_template(
    store: &TemplateStore,
    target: &str,
    names: Option<&[String]>,
    here: &Path,
    confirm: &mut impl Confirm,
) -> Result<Vec<Creation>, StoreError> {
    let template = store.resolve(target)?;
    let source = store.source_path(&template);

    let destinations: Vec<PathBuf> = match names {
        None => vec![here.join(&template.entry)],
        Some(names) => names
            .iter()
            .filter(|name| {
                if name.is_empty() {
                    warn!("Ignoring an empty output name for {}.", target);
                }
                !name.is_empty()
            })
            .map(|name| here.join(name))
            .collect(),
    };

    let creations = destinations
        .into_iter()
        .map(|destination| {
            let (destination, result) = if template.is_dir() {
                let result = copy::safe_copytree(&source, &destination, &mut *confirm);
                (destination, result)
            } else {
                match copy::safe_copy(&source, &destination, &mut *confirm) {
                    Ok((written, outcome)) => (written, Ok(outcome)),
                    Err(e) => (destination, Err(e)),
                }
            };
            match &result {
                Ok(outcome) => info!("{:?} {}", outcome, destination.display()),
                Err(e) => warn!("Failed to create {}: {}", destination.display(), e),
            }
            Creation {
                destination,
                result,
            }
        })
        .collect();
    Ok(creations)
}

/// Prints one line per destination.
pub fn report(creations: &[Creation], out: &mut impl Write) -> io::Result<()> {
    for creation in creations {
        let path = creation.destination.to_string_lossy();
        match &creation.result {
            Ok(CopyOutcome::Created) => writeln!(out, "{} {}", "Created".green(), path)?,
            Ok(CopyOutcome::Overwritten) => writeln!(out, "{} {}", "Overwrote".yellow(), path)?,
            Ok(CopyOutcome::Skipped) => writeln!(out, "{} {}", "Skipped".dimmed(), path)?,
            Err(e) => writeln!(out, "{}", e.to_string().red())?,
        }
    }
    Ok(())
}
