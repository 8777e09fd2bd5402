use crate::{
    cmd::{
        list::LIST_ARG,
        new::{NAMES_ARG, TARGET_ARG},
    },
    store::Listing,
    verbosity::Verbosity,
};
use clap::{App, AppSettings, Arg};
use std::ffi::OsString;

pub const VERBOSITY_ARG: &str = "v";
pub const STORE_ARG: &str = "store";
pub const STORE_ENV: &str = "NEWT_TEMPLATES";

/// The command line, as typed.
#[derive(Debug)]
pub struct Args {
    pub verbosity: Verbosity,
    pub store: Option<String>,
    pub list: bool,
    pub target: Option<String>,
    pub names: Option<Vec<String>>,
}

/// A target known to exist, and where to copy it.
#[derive(Debug, PartialEq, Eq)]
pub struct Request {
    pub target: String,
    pub names: Option<Vec<String>>,
}

/// Why the command line cannot be acted upon.
#[derive(Debug, PartialEq, Eq)]
pub enum Failure {
    NoTarget,
    UnknownTarget(String),
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author("Miguel Murça <zvthryzhepn+rot13@gmail.com>")
        .about("Creates files and folders from templates.")
        .setting(AppSettings::AllowLeadingHyphen)
        .arg(
            Arg::with_name(TARGET_ARG)
                .help("The template to copy")
                .long_help(
                    "The template to copy. Files in the template store are named \
                    after their file name without the extension, directories after \
                    their full name. Call without arguments to see what is available.",
                )
                .index(1),
        )
        .arg(
            Arg::with_name(NAMES_ARG)
                .help("Names for the copies")
                .long_help(
                    "Names for the copies, one copy per name. Defaults to the \
                    template's own file or directory name. Names may start with a \
                    hyphen; put them after `--` if they clash with a flag.",
                )
                .multiple(true)
                .index(2),
        )
        .arg(
            Arg::with_name(VERBOSITY_ARG)
                .short("v")
                .multiple(true)
                .help("Sets the level of verbosity"),
        )
        .arg(
            Arg::with_name(LIST_ARG)
                .short("l")
                .long("list")
                .help("Lists the available templates"),
        )
        .arg(
            Arg::with_name(STORE_ARG)
                .long("store")
                .takes_value(true)
                .hidden(true)
                .env(STORE_ENV),
        )
}

/// Parses `argv` (program name included).
///
/// The target and every output name are trimmed. A single positional
/// argument leaves `names` unset.
pub fn parse_args<I, T>(argv: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = app().get_matches_from_safe(argv)?;
    Ok(Args {
        verbosity: Verbosity::from(matches.occurrences_of(VERBOSITY_ARG)),
        store: matches.value_of(STORE_ARG).map(str::to_string),
        list: matches.is_present(LIST_ARG),
        target: matches.value_of(TARGET_ARG).map(|t| t.trim().to_string()),
        names: matches
            .values_of(NAMES_ARG)
            .map(|names| names.map(|n| n.trim().to_string()).collect()),
    })
}

impl Args {
    /// Checks the target against `listing`.
    pub fn resolve(self, listing: &Listing) -> Result<Request, Failure> {
        let target = self.target.ok_or(Failure::NoTarget)?;
        if !listing.contains_key(&target) {
            return Err(Failure::UnknownTarget(target));
        }
        Ok(Request {
            target,
            names: self.names,
        })
    }
}
