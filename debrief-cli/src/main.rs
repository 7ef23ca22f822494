//! Command-line interface for debrief
//! This binary runs the debrief parsers over a file and prints the structured result, mainly
//! for inspecting what the dashboard will render.
//!
//! Usage:
//!   debrief `<path>` --transform `<name>` [--config `<file>`] [--keep-annotations]
//!   debrief --list-transforms
//!
//! Settings come from the built-in defaults, then `$XDG_CONFIG_HOME/debrief/config.toml` (or
//! `~/.config/debrief/config.toml`) if present, then `--config`.
//!
//! Diagnostics go to stderr; set `RUST_LOG=debug` to see per-parse summaries.

mod transforms;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use debrief_config::Loader;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("debrief")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting wargame event logs and debrief feedback")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the event log or feedback file")
                .required_unless_present("list-transforms")
                .index(1),
        )
        .arg(
            Arg::new("transform")
                .long("transform")
                .short('t')
                .help("Transform to run (e.g., 'log-json', 'feedback-json', 'highlight-tag')")
                .required_unless_present("list-transforms"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the defaults and the user config"),
        )
        .arg(
            Arg::new("keep-annotations")
                .long("keep-annotations")
                .help("Keep *(...)* asides in EVENT: text")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    if let Err(e) = handle_execute_command(&matches) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Handle the execute command
fn handle_execute_command(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("path")
        .context("path is required unless listing transforms")?;
    let transform = matches
        .get_one::<String>("transform")
        .context("transform is required unless listing transforms")?;

    let mut loader = Loader::new().with_user_config();
    if let Some(config_path) = matches.get_one::<String>("config") {
        loader = loader.with_file(config_path);
    }
    if matches.get_flag("keep-annotations") {
        loader = loader.set_override("feedback.strip_event_annotations", false)?;
    }
    let config = loader.build().context("failed to load configuration")?;

    let source =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
    let source = source.strip_prefix('\u{feff}').unwrap_or(&source);
    let output = transforms::execute_transform(source, transform, &config)?;

    println!("{}", output);
    Ok(())
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");

    for (name, description) in transforms::AVAILABLE_TRANSFORMS {
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}
