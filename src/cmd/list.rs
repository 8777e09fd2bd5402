use crate::{
    store::{Listing, StoreError, TemplateStore},
    template::Template,
};
use colored::Colorize;
use std::io::{self, Write};

pub const LIST_ARG: &str = "list";

/// Spacing between the name column and the arrow, and after the arrow.
const OFFSET: usize = 4;

/// How directory entries are highlighted in listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    Plain,
    Colored,
}

impl Palette {
    /// Colored output if the terminal (and `NO_COLOR`/`CLICOLOR`) allow it.
    pub fn detect() -> Self {
        if colored::control::SHOULD_COLORIZE.should_colorize() {
            Palette::Colored
        } else {
            Palette::Plain
        }
    }

    fn directory(self, entry: &str) -> String {
        match self {
            Palette::Plain => entry.to_string(),
            Palette::Colored => entry.blue().bold().to_string(),
        }
    }
}

/// Writes the table of templates, sorted case-insensitively by name.
pub fn write_targets(listing: &Listing, palette: Palette, out: &mut impl Write) -> io::Result<()> {
    let width = listing
        .keys()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0)
        + OFFSET;

    let mut print_line = |left: &str, right: &str, arrow: bool| {
        let padding = " ".repeat(width.saturating_sub(left.chars().count()));
        writeln!(
            out,
            "{}{}{}{}{}",
            left,
            padding,
            if arrow { "->" } else { "  " },
            " ".repeat(OFFSET),
            right
        )
    };

    print_line("Name", "File / Dir", false)?;
    print_line("----", "----------", false)?;

    let mut templates: Vec<&Template> = listing.values().collect();
    templates.sort_by_key(|t| t.name.to_lowercase());
    for template in templates {
        let entry = if template.is_dir() {
            palette.directory(&template.listed_entry())
        } else {
            template.listed_entry()
        };
        print_line(template.name.as_str(), entry.as_str(), true)?;
    }

    writeln!(out)
}

/// Lists the store and prints the table on stdout.
pub fn show_targets(store: &TemplateStore, palette: Palette) -> Result<(), StoreError> {
    let listing = store.list_targets()?;
    let stdout = io::stdout();
    write_targets(&listing, palette, &mut stdout.lock()).ok();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateKind;

    fn template(name: &str, entry: &str, kind: TemplateKind) -> Template {
        Template {
            name: name.to_string(),
            entry: entry.to_string(),
            kind,
        }
    }

    fn render(listing: &Listing, palette: Palette) -> String {
        let mut out = Vec::new();
        write_targets(listing, palette, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_listing_prints_header_only() {
        assert_eq!(
            render(&Listing::new(), Palette::Plain),
            format!(
                "Name{0}File / Dir\n----{0}----------\n\n",
                " ".repeat(6)
            )
        );
    }

    #[test]
    fn columns_are_aligned_and_sorted_case_insensitively() {
        let mut listing = Listing::new();
        for t in vec![
            template("python", "python.py", TemplateKind::File),
            template("Makefile", "Makefile", TemplateKind::File),
            template("latex", "latex", TemplateKind::Directory),
        ] {
            listing.insert(t.name.clone(), t);
        }

        let expected = [
            format!("Name{}File / Dir", " ".repeat(14)),
            format!("----{}----------", " ".repeat(14)),
            format!("latex{}->    latex/", " ".repeat(7)),
            format!("Makefile{}->    Makefile", " ".repeat(4)),
            format!("python{}->    python.py", " ".repeat(6)),
            String::new(),
            String::new(),
        ]
        .join("\n");
        assert_eq!(render(&listing, Palette::Plain), expected);
    }

    #[test]
    fn colored_palette_only_touches_directories() {
        colored::control::set_override(true);
        let mut listing = Listing::new();
        listing.insert("c".into(), template("c", "c.c", TemplateKind::File));
        listing.insert("web".into(), template("web", "web", TemplateKind::Directory));

        let rendered = render(&listing, Palette::Colored);

        assert!(rendered.contains("->    c.c\n"));
        assert!(rendered.contains("\u{1b}["));
        assert!(!rendered.contains("->    web/\n"));
        colored::control::unset_override();
    }
}
