use std::path::Path;

/// Suffix appended to directory entries when they are listed.
pub const DIR_MARKER: char = '/';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateKind {
    File,
    Directory,
}

/// A single entry of the template store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    /// The name the user asks for on the command line.
    pub name: String,
    /// The on-disk name, relative to the store.
    pub entry: String,
    pub kind: TemplateKind,
}

impl Template {
    /// Infers a template from a direct child of the store.
    ///
    /// Files are named after their stem (only the final extension is
    /// stripped, so `foo.tar.gz` becomes `foo.tar`), directories keep
    /// their full name. Returns `None` for paths without a file name,
    /// such as `..`.
    pub fn infer_from_path(path: &Path) -> Option<Self> {
        let entry = path.file_name()?.to_string_lossy().to_string();
        let (name, kind) = if path.is_dir() {
            (entry.clone(), TemplateKind::Directory)
        } else {
            let stem = Path::new(&entry)
                .file_stem()
                .map_or_else(|| entry.clone(), |s| s.to_string_lossy().to_string());
            (stem, TemplateKind::File)
        };
        Some(Template { name, entry, kind })
    }

    pub fn is_dir(&self) -> bool {
        self.kind == TemplateKind::Directory
    }

    /// The entry as shown in listings, with a trailing marker for directories.
    pub fn listed_entry(&self) -> String {
        match self.kind {
            TemplateKind::Directory => format!("{}{}", self.entry, DIR_MARKER),
            TemplateKind::File => self.entry.clone(),
        }
    }
}
