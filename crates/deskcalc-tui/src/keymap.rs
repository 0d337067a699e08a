//! Keyboard shortcut handling.
//!
//! Calculator bindings mirror the button grid: digits and `.` append,
//! `+ - * / ^ % ( )` append, `s`/`c`/`t` open trig calls, Enter evaluates,
//! Backspace erases, Escape clears. The remaining keys drive TUI chrome.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use deskcalc_core::Action;

/// Which surface receives typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The expression buffer and button grid.
    #[default]
    Buffer,
    /// The customer-name field (business mode).
    Customer,
    /// The business history list.
    History,
}

/// TUI input actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward to the calculator dispatch.
    Calculator(Action),
    Quit,
    CycleMode,
    ToggleTheme,
    ToggleAngleUnit,
    ToggleHistory,
    ExportCsv,
    ClearHistory,
    SwitchFocus,
    CustomerChar(char),
    CustomerBackspace,
    GridLeft,
    GridRight,
    GridUp,
    GridDown,
    GridPress,
    HistoryPrev,
    HistoryNext,
    Recall,
    None,
}

/// Map a key event to an action for the given focus.
#[must_use]
pub fn map_key(key: KeyEvent, focus: Focus) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }
    match focus {
        Focus::Buffer => map_buffer_key(key),
        Focus::Customer => map_customer_key(key),
        Focus::History => map_history_key(key),
    }
}

fn map_buffer_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter => KeyAction::Calculator(Action::Equals),
        KeyCode::Backspace => KeyAction::Calculator(Action::Backspace),
        KeyCode::Esc => KeyAction::Calculator(Action::ClearAll),
        KeyCode::Tab => KeyAction::SwitchFocus,
        KeyCode::Left => KeyAction::GridLeft,
        KeyCode::Right => KeyAction::GridRight,
        KeyCode::Up => KeyAction::GridUp,
        KeyCode::Down => KeyAction::GridDown,
        KeyCode::Delete => KeyAction::ClearHistory,
        KeyCode::Char(' ') => KeyAction::GridPress,
        KeyCode::Char(c) => {
            // Calculator characters win over chrome keys.
            if let Some(action) = Action::from_char(c) {
                return KeyAction::Calculator(action);
            }
            match c {
                'q' => KeyAction::Quit,
                'm' => KeyAction::CycleMode,
                'd' => KeyAction::ToggleTheme,
                'u' => KeyAction::ToggleAngleUnit,
                'h' => KeyAction::ToggleHistory,
                'x' => KeyAction::ExportCsv,
                _ => KeyAction::None,
            }
        }
        _ => KeyAction::None,
    }
}

fn map_customer_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => KeyAction::SwitchFocus,
        KeyCode::Backspace => KeyAction::CustomerBackspace,
        KeyCode::Char(c) => KeyAction::CustomerChar(c),
        _ => KeyAction::None,
    }
}

fn map_history_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Up => KeyAction::HistoryPrev,
        KeyCode::Down => KeyAction::HistoryNext,
        KeyCode::Enter => KeyAction::Recall,
        KeyCode::Esc | KeyCode::Tab => KeyAction::SwitchFocus,
        KeyCode::Delete => KeyAction::ClearHistory,
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('x') => KeyAction::ExportCsv,
        _ => KeyAction::None,
    }
}
