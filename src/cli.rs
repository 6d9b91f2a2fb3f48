// File: ./src/cli.rs
//! Command-line entry points shared by the binary: argument handling,
//! `--help`, and the one-shot commands.
use crate::config::Config;
use crate::context::SharedContext;
use crate::help::get_line_syntax_help;
use crate::model::{TripData, parse_itinerary};
use crate::store::TripStore;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Tui,
    Help,
    /// Print the days parsed from a seed file (or the configured seed).
    Parse(Option<PathBuf>),
    Export,
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub root: Option<PathBuf>,
    pub command: Command,
}

/// Parses `args` without the program name.
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut root = None;
    let mut rest = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-r" | "--root" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--root needs a path"))?;
                root = Some(PathBuf::from(path));
            }
            _ => rest.push(arg.as_str()),
        }
    }

    let command = match rest.as_slice() {
        [] => Command::Tui,
        ["-h" | "--help" | "help", ..] => Command::Help,
        ["parse"] => Command::Parse(None),
        ["parse", path] => Command::Parse(Some(PathBuf::from(*path))),
        ["export"] => Command::Export,
        ["reset"] => Command::Reset,
        other => {
            return Err(anyhow::anyhow!(
                "Unknown arguments: {}. Try --help.",
                other.join(" ")
            ));
        }
    };
    Ok(CliArgs { root, command })
}

/// Runs a one-shot command, writing its output to `out`.
pub fn run_command(
    command: &Command,
    ctx: SharedContext,
    config: &Config,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::Tui => Err(anyhow::anyhow!("The TUI is not a one-shot command")),
        Command::Help => {
            print_help("tripdeck", out)?;
            Ok(())
        }
        Command::Parse(path) => {
            let data = match path {
                Some(p) => TripData::from_path(p)?,
                None => config.load_seed()?,
            };
            let days = parse_itinerary(&data.itinerary, &config.heading_style());
            writeln!(out, "{}", serde_json::to_string_pretty(&days)?)?;
            Ok(())
        }
        Command::Export => {
            let store = TripStore::load(ctx, config.load_seed()?, config.heading_style());
            writeln!(out, "{}", serde_json::to_string_pretty(store.days())?)?;
            Ok(())
        }
        Command::Reset => {
            let mut store = TripStore::load(ctx, config.load_seed()?, config.heading_style());
            store.reset_days();
            let stats = store.stats();
            log::info!("Days reset to the seed itinerary");
            writeln!(
                out,
                "Reset {} days ({} activities) to the seed itinerary.",
                stats.days, stats.activities
            )?;
            Ok(())
        }
    }
}

pub fn print_help(binary_name: &str, out: &mut dyn Write) -> Result<()> {
    let mut text = String::new();
    text.push_str(&format!(
        "Tripdeck v{} - Travel itinerary viewer and editor (TUI)\n\n",
        env!("CARGO_PKG_VERSION")
    ));
    text.push_str("USAGE:\n");
    text.push_str(&format!("    {} [--root <path>]           Start interactive TUI\n", binary_name));
    text.push_str(&format!("    {} parse [seed.json]         Print parsed days as JSON\n", binary_name));
    text.push_str(&format!("    {} export                    Print current days as JSON\n", binary_name));
    text.push_str(&format!("    {} reset                     Discard edits, re-parse the seed\n", binary_name));
    text.push_str(&format!("    {} --help                    Show this help message\n\n", binary_name));
    text.push_str("OPTIONS:\n");
    text.push_str("    -r, --root <path>     Use a different directory for config and data.\n");
    text.push_str("    -h, --help            Show this help message.\n\n");
    text.push_str("KEYBINDINGS:\n");
    text.push_str("    Press '?' inside the app for full interactive help\n\n");

    for section in get_line_syntax_help() {
        text.push_str(&format!("{}:\n", section.title.to_uppercase()));
        for item in section.items {
            text.push_str(&format!("    {:<18}{}\n", item.keys, item.desc));
        }
        text.push('\n');
    }

    text.push_str("EXAMPLES:\n");
    text.push_str("    17:16 – Llegada a MSY\n");
    text.push_str("    20:00 – Cena en Arnaud's + French 75 Bar\n");
    text.push_str("    Brunch en Willa Jean (confirmación: ABC123, llegar 10 min antes)\n");

    out.write_all(text.as_bytes())
        .context("Failed to write help text")?;
    Ok(())
}
