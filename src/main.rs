mod args;
mod cmd;
mod copy;
mod store;
mod template;
mod userbool;
mod userpath;
mod verbosity;

use cmd::list::Palette;
use colored::Colorize;
use std::io;
use store::TemplateStore;
use verbosity::Verbosity;

fn setup_logging(verbosity: Verbosity) {
    let env = env_logger::Env::default().default_filter_or(verbosity.level_filter().to_string());
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

/// Prints `message` in red and exits with `code`.
fn exit_with(message: &str, code: exitcode::ExitCode) -> ! {
    println!("{}", message.red());
    std::process::exit(code);
}

/// The store given through `--store`/`NEWT_TEMPLATES`, or the default one
/// under the home directory.
fn template_store(user_path: Option<&str>) -> TemplateStore {
    match user_path {
        Some(user_path) => match userpath::to_user_path(user_path) {
            Ok(path) => TemplateStore::new(path),
            Err(err) => exit_with(&err.to_string(), exitcode::CONFIG),
        },
        None => TemplateStore::default_location()
            .unwrap_or_else(|err| exit_with(&err.to_string(), exitcode::CONFIG)),
    }
}

fn main() {
    let args = match args::parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => err.exit(),
    };
    setup_logging(args.verbosity);

    let store = template_store(args.store.as_deref());
    let palette = Palette::detect();
    log::debug!("Using template store {}", store.path().display());

    if args.list {
        if let Err(err) = cmd::list::show_targets(&store, palette) {
            exit_with(&err.to_string(), exitcode::CONFIG);
        }
        std::process::exit(exitcode::OK);
    }

    let listing = store
        .list_targets()
        .unwrap_or_else(|err| exit_with(&err.to_string(), exitcode::CONFIG));
    let request = match args.resolve(&listing) {
        Ok(request) => request,
        Err(failure) => cmd::fail(&failure, &store, palette),
    };

    let here = std::env::current_dir().unwrap_or_else(|err| {
        exit_with(
            &format!("Could not read the current directory: {}", err),
            exitcode::IOERR,
        )
    });
    let creations = cmd::new::create_template(
        &store,
        &request.target,
        request.names.as_deref(),
        &here,
        &mut userbool::Terminal,
    )
    .unwrap_or_else(|err| exit_with(&err.to_string(), exitcode::USAGE));

    let stdout = io::stdout();
    cmd::new::report(&creations, &mut stdout.lock()).ok();
    if creations.iter().any(cmd::new::Creation::failed) {
        std::process::exit(exitcode::IOERR);
    }
}
