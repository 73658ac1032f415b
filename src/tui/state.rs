// File: src/tui/state.rs
// Manages the application state for the TUI.
use crate::composer;
use crate::config::AppTheme;
use crate::document::Document;
use crate::model::{CvData, PanelSelection};
use crate::tui::action::Action;
use strum::IntoEnumIterator;

pub struct AppState {
    // Data
    pub cv: CvData,
    pub selection: PanelSelection,
    /// Rebuilt from (cv, selection) whenever the selection actually changes.
    pub document: Document,

    // UI State
    pub scroll: u16,
    /// Set by the view after measuring the wrapped document against the
    /// current viewport; `scroll` is clamped against it.
    pub max_scroll: u16,
    pub viewport_height: u16,
    pub theme: AppTheme,
    pub theme_dirty: bool,
    pub show_full_help: bool,
    pub message: String,
}

impl AppState {
    pub fn new(cv: CvData, theme: AppTheme) -> Self {
        let selection = PanelSelection::default();
        let document = composer::compose(&cv, selection);
        Self {
            cv,
            selection,
            document,
            scroll: 0,
            max_scroll: 0,
            viewport_height: 0,
            theme,
            theme_dirty: false,
            show_full_help: false,
            message: String::new(),
        }
    }

    fn set_selection(&mut self, next: PanelSelection) {
        // Repeated presses of the active trigger leave state and output
        // untouched (the triggers are idempotent forced-sets).
        if next == self.selection {
            return;
        }
        self.selection = next;
        self.document = composer::compose(&self.cv, self.selection);
        self.scroll = 0;
    }

    fn cycle_theme(&mut self) {
        let themes: Vec<AppTheme> = AppTheme::iter().collect();
        let pos = themes.iter().position(|t| *t == self.theme).unwrap_or(0);
        self.theme = themes[(pos + 1) % themes.len()];
        self.theme_dirty = true;
        self.message = format!("Theme: {}", self.theme);
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SelectEducation => self.set_selection(self.selection.select_education()),
            Action::SelectExperience => self.set_selection(self.selection.select_experience()),
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            Action::ScrollDown => self.scroll = self.scroll.saturating_add(1).min(self.max_scroll),
            Action::PageUp => self.scroll = self.scroll.saturating_sub(self.viewport_height.max(1)),
            Action::PageDown => {
                self.scroll = self
                    .scroll
                    .saturating_add(self.viewport_height.max(1))
                    .min(self.max_scroll)
            }
            Action::Top => self.scroll = 0,
            Action::Bottom => self.scroll = self.max_scroll,
            Action::CycleTheme => self.cycle_theme(),
            Action::ToggleHelp => self.show_full_help = !self.show_full_help,
            // Quit is handled by the event loop before actions are applied.
            Action::Quit => {}
        }
    }
}
