use anyhow::Result;
use std::env;
use vitae::cli::{self, Command};
use vitae::config::Config;
use vitae::paths::AppPaths;
use vitae::{composer, data};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let parsed = cli::parse(&args)?;

    match parsed.command {
        Command::Help => {
            cli::print_help("vitae");
            return Ok(());
        }
        Command::Export { panel } => {
            // Headless path: compose the page and print it, no terminal UI.
            let cfg = Config::load()?;
            let cv = data::resolve(parsed.cv_path.as_deref(), cfg.cv_path.as_deref())?;
            let document = composer::compose(&cv, panel);
            print!("{}", document.to_plain_text());
            return Ok(());
        }
        Command::Tui => {}
    }

    init_logging();
    vitae::tui::run(parsed)
}

// The TUI owns the terminal, so logs go to a file in the cache dir. Failure
// to set up logging is not fatal.
fn init_logging() {
    if let Ok(path) = AppPaths::get_log_file_path()
        && let Ok(file) = std::fs::File::create(&path)
    {
        let _ = simplelog::WriteLogger::init(
            log::LevelFilter::Info,
            simplelog::Config::default(),
            file,
        );
    }
}
