use crate::template::Template;
use log::debug;
use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Name of the store directory, relative to the user's home directory.
pub const DEFAULT_STORE_NAME: &str = ".newt_templates";

/// Target names mapped to the templates they resolve to.
pub type Listing = BTreeMap<String, Template>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not determine the home directory for the template store.")]
    NoHome,
    #[error("The templates path ('{0}') exists, but is not a directory!")]
    NotADirectory(String),
    #[error("Could not create the templates directory ('{1}'): '{0}'")]
    Create(#[source] io::Error, String),
    #[error("Could not read the contents of the templates directory ('{1}'): '{0}'")]
    ReadDir(#[source] io::Error, String),
    #[error("Could not read content of the templates directory ('{1}'): '{0}'")]
    DirEntry(#[source] io::Error, String),
    #[error("Chosen target '{0}' doesn't exist.")]
    UnknownTarget(String),
}

/// The directory holding every template, one per direct child.
#[derive(Clone, Debug)]
pub struct TemplateStore {
    path: PathBuf,
}

impl TemplateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TemplateStore { path: path.into() }
    }

    /// The store under the user's home directory.
    pub fn default_location() -> Result<Self, StoreError> {
        let home = dirs::home_dir().ok_or(StoreError::NoHome)?;
        Ok(Self::new(home.join(DEFAULT_STORE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.to_string_lossy().to_string()
    }

    /// Creates the store directory if it does not exist yet.
    fn ensure_exists(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            if !self.path.is_dir() {
                return Err(StoreError::NotADirectory(self.display_path()));
            }
            return Ok(());
        }
        debug!("Creating template store at {}", self.path.display());
        fs::create_dir_all(&self.path).map_err(|e| StoreError::Create(e, self.display_path()))
    }

    /// Lists the templates currently in the store.
    ///
    /// The listing is computed from the directory contents on every call.
    /// Entries sharing a name overwrite each other in enumeration order.
    pub fn list_targets(&self) -> Result<Listing, StoreError> {
        self.ensure_exists()?;
        let items =
            fs::read_dir(&self.path).map_err(|e| StoreError::ReadDir(e, self.display_path()))?;

        let mut listing = Listing::new();
        for item in items {
            let item = item.map_err(|e| StoreError::DirEntry(e, self.display_path()))?;
            if let Some(template) = Template::infer_from_path(&item.path()) {
                debug!("Found template {} ({})", template.name, template.entry);
                listing.insert(template.name.clone(), template);
            }
        }
        Ok(listing)
    }

    /// Looks `target` up in a fresh listing.
    pub fn resolve(&self, target: &str) -> Result<Template, StoreError> {
        self.list_targets()?
            .remove(target)
            .ok_or_else(|| StoreError::UnknownTarget(target.to_string()))
    }

    pub fn source_path(&self, template: &Template) -> PathBuf {
        self.path.join(&template.entry)
    }
}
