// File: src/tui/mod.rs
// Entry point and main loop for the TUI application.
pub mod action;
pub mod handlers;
pub mod state;
pub mod view;

use crate::cli::CliArgs;
use crate::config::Config;
use crate::data;
use crate::tui::action::Action;
use crate::tui::state::AppState;
use crate::tui::view::draw;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

pub fn run(args: CliArgs) -> Result<()> {
    // --- 1. CONFIG & DATA ---
    let mut cfg = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            // Syntax or permission errors should be visible before the
            // terminal enters raw mode.
            eprintln!("Error loading configuration:\n{}", e);
            std::process::exit(1);
        }
    };

    let cv = data::resolve(args.cv_path.as_deref(), cfg.cv_path.as_deref())?;
    log::info!(
        "Loaded CV for {} ({} education, {} experience entries)",
        cv.profile.full_name(),
        cv.education.len(),
        cv.experience.len()
    );

    // Panic Hook
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        use std::io::Write;
        if let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("vitae_panic.log")
        {
            let _ = writeln!(file, "PANIC: {:?}", info);
        }
        default_hook(info);
    }));

    // --- 2. TERMINAL SETUP ---
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if cfg.mouse_capture {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // --- 3. STATE INIT ---
    let mut app_state = AppState::new(cv, cfg.theme);

    // --- 4. UI LOOP ---
    loop {
        terminal.draw(|f| draw(f, &mut app_state))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => app_state.apply(Action::ScrollDown),
                    MouseEventKind::ScrollUp => app_state.apply(Action::ScrollUp),
                    _ => {}
                },
                Event::Key(key) => {
                    // Filter out KeyRelease events to prevent double input on Windows
                    if key.kind == event::KeyEventKind::Release {
                        continue;
                    }

                    if let Some(action) = handlers::handle_key_event(key, &app_state) {
                        if matches!(action, Action::Quit) {
                            break;
                        }
                        app_state.apply(action);
                    }
                }
                _ => {}
            }
        }
    }

    // --- 5. CLEANUP ---
    disable_raw_mode()?;
    if cfg.mouse_capture {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    // Persist a theme changed during the session.
    if app_state.theme_dirty && app_state.theme != cfg.theme {
        cfg.theme = app_state.theme;
        if let Err(e) = cfg.save() {
            log::warn!("Could not save config: {}", e);
        } else if let Ok(path) = Config::get_path_string() {
            log::info!("Theme saved to {}", path);
        }
    }

    Ok(())
}
