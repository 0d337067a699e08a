//! Input dispatch: button labels and typed characters map to actions.

use crate::angle::TrigFn;
use crate::layout::Mode;

/// A single calculator input action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Reset the buffer and the previous-expression line.
    ClearAll,
    /// Remove the last buffer character; no-op when empty.
    Backspace,
    /// Rewrite a trailing `<number><op><number>` as a percentage.
    Percent,
    /// Append the power operator.
    Power,
    /// Append the pi constant token.
    Pi,
    /// Append an opening square-root call.
    Sqrt,
    /// Append a trig function call opener.
    Trig(TrigFn),
    /// Append the tax factor literal.
    Tax,
    /// Bring the business history list into view; no buffer mutation.
    ShowHistory,
    /// Evaluate the buffer.
    Equals,
    /// Append the label text as-is (digits, operators, parentheses, dot).
    Literal(String),
}

impl Action {
    /// Map a button label to its action for the given mode.
    ///
    /// Unrecognized labels fall through to a literal append, exactly like
    /// the default branch of the button dispatch.
    #[must_use]
    pub fn from_label(mode: Mode, label: &str) -> Action {
        if mode == Mode::Business && label == "History" {
            return Action::ShowHistory;
        }
        match label {
            "AC" => Action::ClearAll,
            "←" => Action::Backspace,
            "%" => Action::Percent,
            "=" => Action::Equals,
            "x^y" => Action::Power,
            "π" => Action::Pi,
            "√" => Action::Sqrt,
            "sin" => Action::Trig(TrigFn::Sin),
            "cos" => Action::Trig(TrigFn::Cos),
            "tan" => Action::Trig(TrigFn::Tan),
            "Tax" => Action::Tax,
            _ => Action::Literal(label.to_string()),
        }
    }

    /// Map a typed character to an action, mirroring the button dispatch.
    ///
    /// Returns `None` for characters the calculator does not bind. Enter,
    /// Backspace, and Escape are terminal keys, not characters, and are
    /// mapped by the front end.
    #[must_use]
    pub fn from_char(c: char) -> Option<Action> {
        match c {
            '0'..='9' | '.' => Some(Action::Literal(c.to_string())),
            '+' | '-' | '*' | '/' | '^' | '(' | ')' => Some(Action::Literal(c.to_string())),
            '%' => Some(Action::Percent),
            's' => Some(Action::Trig(TrigFn::Sin)),
            'c' => Some(Action::Trig(TrigFn::Cos)),
            't' => Some(Action::Trig(TrigFn::Tan)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_mapping() {
        assert_eq!(Action::from_label(Mode::General, "AC"), Action::ClearAll);
        assert_eq!(Action::from_label(Mode::General, "←"), Action::Backspace);
        assert_eq!(Action::from_label(Mode::General, "%"), Action::Percent);
        assert_eq!(Action::from_label(Mode::General, "="), Action::Equals);
        assert_eq!(Action::from_label(Mode::Scientific, "x^y"), Action::Power);
        assert_eq!(Action::from_label(Mode::Scientific, "π"), Action::Pi);
        assert_eq!(Action::from_label(Mode::Scientific, "√"), Action::Sqrt);
        assert_eq!(
            Action::from_label(Mode::Scientific, "sin"),
            Action::Trig(TrigFn::Sin)
        );
        assert_eq!(Action::from_label(Mode::Business, "Tax"), Action::Tax);
    }

    #[test]
    fn digits_and_operators_are_literal() {
        for label in ["7", "0", ".", "+", "-", "(", ")"] {
            assert_eq!(
                Action::from_label(Mode::General, label),
                Action::Literal(label.to_string())
            );
        }
    }

    #[test]
    fn history_label_is_business_only() {
        assert_eq!(
            Action::from_label(Mode::Business, "History"),
            Action::ShowHistory
        );
        // Outside business mode the label falls through to a literal,
        // matching the original dispatch.
        assert_eq!(
            Action::from_label(Mode::General, "History"),
            Action::Literal("History".to_string())
        );
    }

    #[test]
    fn char_mapping() {
        assert_eq!(Action::from_char('7'), Some(Action::Literal("7".into())));
        assert_eq!(Action::from_char('.'), Some(Action::Literal(".".into())));
        assert_eq!(Action::from_char('^'), Some(Action::Literal("^".into())));
        assert_eq!(Action::from_char('%'), Some(Action::Percent));
        assert_eq!(Action::from_char('s'), Some(Action::Trig(TrigFn::Sin)));
        assert_eq!(Action::from_char('c'), Some(Action::Trig(TrigFn::Cos)));
        assert_eq!(Action::from_char('t'), Some(Action::Trig(TrigFn::Tan)));
        assert_eq!(Action::from_char('z'), None);
        assert_eq!(Action::from_char('='), None);
    }
}
