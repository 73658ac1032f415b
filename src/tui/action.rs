// Defines the actions key and mouse handlers can produce.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forced-set: always lands on the education panel.
    SelectEducation,
    /// Forced-set: always lands on the experience panel.
    SelectExperience,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    CycleTheme,
    ToggleHelp,
    Quit,
}
