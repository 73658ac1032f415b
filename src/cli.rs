// File: src/cli.rs
//! Command-line argument handling shared by the binary: parsing and help.
use crate::model::PanelSelection;
use anyhow::{Result, bail};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the interactive TUI (the default).
    Tui,
    /// Compose the page headlessly and print plain text to stdout.
    Export { panel: PanelSelection },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub command: Command,
    /// CV record for this run; overrides the config's `cv_path`.
    pub cv_path: Option<PathBuf>,
}

pub fn parse(args: &[String]) -> Result<CliArgs> {
    let mut parsed = CliArgs {
        command: Command::Tui,
        cv_path: None,
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" | "help" => {
                parsed.command = Command::Help;
            }
            "export" => {
                parsed.command = Command::Export {
                    panel: PanelSelection::Education,
                };
            }
            "--panel" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--panel requires a value"))?;
                let panel = match value.as_str() {
                    "education" => PanelSelection::Education,
                    "experience" => PanelSelection::Experience,
                    other => bail!("Unknown panel '{}' (use education or experience)", other),
                };
                match parsed.command {
                    Command::Export { .. } => parsed.command = Command::Export { panel },
                    _ => bail!("--panel only applies to the export command"),
                }
            }
            "--cv" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--cv requires a file path"))?;
                parsed.cv_path = Some(PathBuf::from(value));
            }
            other => bail!("Unknown argument '{}' (see --help)", other),
        }
    }

    Ok(parsed)
}

pub fn print_help(binary_name: &str) {
    println!(
        "Vitae v{} - A terminal curriculum vitae viewer (TUI)",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--cv <file.toml>]", binary_name);
    println!(
        "    {} export [--panel education|experience] [--cv <file.toml>]",
        binary_name
    );
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    --cv <file.toml>      Use an external CV record instead of the built-in one.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("EXPORT COMMAND:");
    println!(
        "    {} export                          Print the page (education panel) as plain text",
        binary_name
    );
    println!(
        "    {} export --panel experience       Print the experience panel instead",
        binary_name
    );
    println!(
        "    {} export > cv.txt                 Save the rendered page to a file",
        binary_name
    );
    println!();
    println!("KEYBINDINGS:");
    println!("    e/Left            Show the education panel");
    println!("    x/Right           Show the experience panel");
    println!("    j/k, Down/Up      Scroll");
    println!("    PgDn/PgUp         Scroll by page");
    println!("    g/G               Jump to top/bottom");
    println!("    t                 Cycle color theme");
    println!("    ?                 Toggle key help");
    println!("    q/Esc             Quit");
    println!();
    println!("CV FILE:");
    println!("    A TOML document with [profile], [[about]], [[education]],");
    println!("    [[experience]], [[languages]] and a top-level skills array.");
    println!("    See assets/cv.toml in the source tree for a complete example.");
}
