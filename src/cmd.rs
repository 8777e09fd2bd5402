pub mod list;
pub mod new;

use crate::{args::Failure, store::TemplateStore};
use colored::Colorize;
use list::Palette;
use log::error;
use std::io::{self, Write};

/// Prints what went wrong with the command line, then the available targets.
pub fn report_failure(
    failure: &Failure,
    store: &TemplateStore,
    palette: Palette,
    out: &mut impl Write,
) -> io::Result<()> {
    match failure {
        Failure::NoTarget => writeln!(
            out,
            "Usage: {} target [output_name ...]",
            env!("CARGO_PKG_NAME")
        )?,
        Failure::UnknownTarget(target) => {
            writeln!(out, "Chosen target '{}' doesn't exist.", target)?
        }
    }
    writeln!(out, "Available targets:")?;
    match store.list_targets() {
        Ok(listing) => list::write_targets(&listing, palette, out),
        Err(e) => {
            error!("{}", e);
            writeln!(out, "{}", e.to_string().red())
        }
    }
}

/// Reports `failure` on stdout and exits with a usage error.
pub fn fail(failure: &Failure, store: &TemplateStore, palette: Palette) -> ! {
    let stdout = io::stdout();
    report_failure(failure, store, palette, &mut stdout.lock()).ok();
    std::process::exit(exitcode::USAGE);
}
