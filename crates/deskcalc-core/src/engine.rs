//! Calculator state machine.
//!
//! Owns all mutable state: the expression buffer, the displayed text, the
//! previous-expression line, the angle-aware evaluator, the customer field,
//! and the business history log with its storage seam. Front ends dispatch
//! [`Action`]s and render from the accessors; they hold no state of their
//! own beyond presentation.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use crate::action::Action;
use crate::constants::{EMPTY_DISPLAY, ERROR_DISPLAY, TAX_TOKEN};
use crate::eval::{format_value, Evaluator};
use crate::history::{HistoryEntry, HistoryLog};
use crate::layout::Mode;
use crate::store::HistoryStore;

lazy_static! {
    /// Trailing `<number><op><number>` rewritten by the percent action.
    static ref PERCENT_TAIL: Regex = Regex::new(r"([0-9.]+)\s*([-+*/])\s*([0-9.]+)$").unwrap();
}

/// Side effect requested by a dispatched action, beyond the state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing beyond the updated display.
    None,
    /// Bring the business history list into view.
    ShowHistory,
    /// A business entry was recorded; acknowledge on the customer field.
    Recorded,
}

/// The calculator.
pub struct Calculator {
    mode: Mode,
    buffer: String,
    display: String,
    history_line: String,
    customer: String,
    evaluator: Evaluator,
    log: HistoryLog,
    store: Box<dyn HistoryStore>,
}

impl Calculator {
    /// Create a calculator, loading any persisted history from `store`.
    #[must_use]
    pub fn new(store: Box<dyn HistoryStore>) -> Self {
        let log = store.load();
        Self {
            mode: Mode::default(),
            buffer: String::new(),
            display: EMPTY_DISPLAY.to_string(),
            history_line: String::new(),
            customer: String::new(),
            evaluator: Evaluator::default(),
            log,
            store,
        }
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch mode. Clears the buffer and the previous-expression line.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.buffer.clear();
        self.history_line.clear();
        self.refresh_display();
    }

    /// The pending expression text.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The displayed text: the buffer, `0` when empty, or the error marker.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The previous-expression line (`<expr> =` after an evaluation).
    #[must_use]
    pub fn history_line(&self) -> &str {
        &self.history_line
    }

    /// Angle unit used for trig evaluation.
    #[must_use]
    pub fn angle_unit(&self) -> crate::angle::AngleUnit {
        self.evaluator.unit()
    }

    /// Change the angle unit. Affects subsequent evaluations only.
    pub fn set_angle_unit(&mut self, unit: crate::angle::AngleUnit) {
        self.evaluator.set_unit(unit);
    }

    /// Flip between radians and degrees.
    pub fn toggle_angle_unit(&mut self) {
        self.set_angle_unit(self.angle_unit().toggled());
    }

    /// Current customer-name field content.
    #[must_use]
    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// Replace the customer-name field content.
    pub fn set_customer(&mut self, name: impl Into<String>) {
        self.customer = name.into();
    }

    /// Type a character into the customer-name field.
    pub fn customer_push(&mut self, c: char) {
        self.customer.push(c);
    }

    /// Erase the last character of the customer-name field.
    pub fn customer_pop(&mut self) {
        self.customer.pop();
    }

    /// The business history log.
    #[must_use]
    pub fn history(&self) -> &HistoryLog {
        &self.log
    }

    /// Dispatch a button press by its label.
    pub fn press_label(&mut self, label: &str) -> Effect {
        self.apply(Action::from_label(self.mode, label))
    }

    /// Dispatch an action.
    pub fn apply(&mut self, action: Action) -> Effect {
        match action {
            Action::ClearAll => {
                self.buffer.clear();
                self.history_line.clear();
            }
            Action::Backspace => {
                self.buffer.pop();
            }
            Action::Percent => self.rewrite_percent(),
            Action::Power => self.buffer.push('^'),
            Action::Pi => self.buffer.push_str("pi"),
            Action::Sqrt => self.buffer.push_str("sqrt("),
            Action::Trig(func) => {
                self.buffer.push_str(func.name());
                self.buffer.push('(');
            }
            Action::Tax => self.buffer.push_str(TAX_TOKEN),
            Action::ShowHistory => return Effect::ShowHistory,
            Action::Equals => return self.evaluate(),
            Action::Literal(text) => self.buffer.push_str(&text),
        }
        self.refresh_display();
        Effect::None
    }

    /// Load the result of the history row at `row` (display order, 0 =
    /// newest) into the buffer. The original expression is not restored.
    pub fn recall(&mut self, row: usize) {
        if let Some(entry) = self.log.display_row(row) {
            self.buffer = entry.result.clone();
            self.refresh_display();
        }
    }

    /// Empty the log and remove the persisted record. Idempotent.
    pub fn clear_history(&mut self) {
        self.log.clear();
        if let Err(err) = self.store.clear() {
            warn!(%err, "failed to remove persisted history");
        }
    }

    /// Write the full log as CSV to `path`.
    pub fn export_csv(&self, path: &std::path::Path) -> std::io::Result<()> {
        std::fs::write(path, self.log.to_csv())
    }

    fn refresh_display(&mut self) {
        self.display = if self.buffer.is_empty() {
            EMPTY_DISPLAY.to_string()
        } else {
            self.buffer.clone()
        };
    }

    /// Rewrite a trailing `<number><op><number>` as
    /// `<base><op>(<base>*<operand>/100)`. No-op when the tail does not
    /// match.
    fn rewrite_percent(&mut self) {
        let Some(caps) = PERCENT_TAIL.captures(&self.buffer) else {
            return;
        };
        let start = caps.get(0).map_or(0, |m| m.start());
        let rewritten = format!("{}{}({}*{}/100)", &caps[1], &caps[2], &caps[1], &caps[3]);
        self.buffer.truncate(start);
        self.buffer.push_str(&rewritten);
    }

    fn evaluate(&mut self) -> Effect {
        let expression = self.buffer.clone();
        match self.evaluator.evaluate(&expression) {
            Ok(value) => {
                let result = format_value(value);
                self.history_line = format!("{expression} =");
                self.buffer = result.clone();
                self.refresh_display();
                if self.mode == Mode::Business {
                    self.record(expression, result);
                    return Effect::Recorded;
                }
                Effect::None
            }
            Err(err) => {
                debug!(expression = %expression, %err, "evaluation failed");
                self.buffer.clear();
                self.display = ERROR_DISPLAY.to_string();
                Effect::None
            }
        }
    }

    fn record(&mut self, expression: String, result: String) {
        let entry = HistoryEntry::new(expression, result, self.customer.trim());
        self.log.push(entry);
        if let Err(err) = self.store.save(&self.log) {
            warn!(%err, "failed to persist business history");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::AngleUnit;
    use crate::constants::HISTORY_CAPACITY;
    use crate::store::{JsonFileStore, MemoryStore};

    fn calc() -> Calculator {
        Calculator::new(Box::new(MemoryStore::new()))
    }

    fn business_calc() -> Calculator {
        let mut c = calc();
        c.set_mode(Mode::Business);
        c
    }

    fn press_all(c: &mut Calculator, labels: &[&str]) {
        for label in labels {
            c.press_label(label);
        }
    }

    #[test]
    fn empty_buffer_displays_zero() {
        let c = calc();
        assert_eq!(c.display(), "0");
        assert_eq!(c.buffer(), "");
    }

    #[test]
    fn presses_concatenate_in_order() {
        let mut c = calc();
        press_all(&mut c, &["7", "+", "8", "*", "2", ".", "5"]);
        assert_eq!(c.display(), "7+8*2.5");
    }

    #[test]
    fn backspace_removes_last_character() {
        let mut c = calc();
        press_all(&mut c, &["1", "2"]);
        c.press_label("←");
        assert_eq!(c.display(), "1");
        c.press_label("←");
        assert_eq!(c.display(), "0");
        // No-op when already empty.
        c.press_label("←");
        assert_eq!(c.display(), "0");
    }

    #[test]
    fn clear_all_resets_buffer_and_history_line() {
        let mut c = calc();
        press_all(&mut c, &["2", "+", "2", "="]);
        assert_eq!(c.history_line(), "2+2 =");
        c.press_label("AC");
        assert_eq!(c.display(), "0");
        assert_eq!(c.history_line(), "");
    }

    #[test]
    fn token_buttons_append_their_tokens() {
        let mut c = calc();
        c.set_mode(Mode::Scientific);
        c.press_label("x^y");
        c.press_label("π");
        c.press_label("√");
        c.press_label("sin");
        assert_eq!(c.buffer(), "^pisqrt(sin(");
    }

    #[test]
    fn tax_appends_fixed_factor() {
        let mut c = business_calc();
        press_all(&mut c, &["1", "0", "0", "Tax"]);
        assert_eq!(c.buffer(), "100*1.18");
    }

    #[test]
    fn percent_rewrites_trailing_pattern() {
        let mut c = calc();
        press_all(&mut c, &["5", "0", "+", "1", "0"]);
        c.press_label("%");
        assert_eq!(c.buffer(), "50+(50*10/100)");
        c.press_label("=");
        assert_eq!(c.display(), "55");
    }

    #[test]
    fn percent_rewrites_only_the_tail() {
        let mut c = calc();
        press_all(&mut c, &["1", "+", "2", "+", "3"]);
        c.press_label("%");
        assert_eq!(c.buffer(), "1+2+(2*3/100)");
    }

    #[test]
    fn percent_is_noop_without_tail_match() {
        let mut c = calc();
        press_all(&mut c, &["5", "0", "+"]);
        c.press_label("%");
        assert_eq!(c.buffer(), "50+");

        let mut empty = calc();
        empty.press_label("%");
        assert_eq!(empty.display(), "0");
    }

    #[test]
    fn equals_replaces_buffer_with_result() {
        let mut c = calc();
        press_all(&mut c, &["2", "+", "2", "="]);
        assert_eq!(c.display(), "4");
        assert_eq!(c.buffer(), "4");
        assert_eq!(c.history_line(), "2+2 =");
        // The result participates in the next expression.
        press_all(&mut c, &["*", "3", "="]);
        assert_eq!(c.display(), "12");
    }

    #[test]
    fn failed_evaluation_shows_error_and_clears_buffer() {
        let mut c = calc();
        press_all(&mut c, &["5", "+", "*"]);
        c.press_label("=");
        assert_eq!(c.display(), "Error");
        assert_eq!(c.buffer(), "");
        // A subsequent digit starts a fresh buffer.
        c.press_label("7");
        assert_eq!(c.display(), "7");
    }

    #[test]
    fn degrees_apply_through_the_full_pipeline() {
        let mut c = calc();
        c.set_mode(Mode::Scientific);
        c.set_angle_unit(AngleUnit::Degrees);
        press_all(&mut c, &["sin", "9", "0", ")", "="]);
        assert_eq!(c.display(), "1");
    }

    #[test]
    fn radians_apply_through_the_full_pipeline() {
        let mut c = calc();
        c.set_mode(Mode::Scientific);
        press_all(&mut c, &["sin", "π", "/", "2", ")", "="]);
        assert_eq!(c.display(), "1");
    }

    #[test]
    fn near_zero_result_displays_exact_zero() {
        let mut c = calc();
        c.set_mode(Mode::Scientific);
        press_all(&mut c, &["sin", "π", ")", "="]);
        assert_eq!(c.display(), "0");
    }

    #[test]
    fn business_equals_records_with_trimmed_customer() {
        let mut c = business_calc();
        c.set_customer("  Acme  ");
        press_all(&mut c, &["2", "+", "2"]);
        let effect = c.press_label("=");
        assert_eq!(effect, Effect::Recorded);
        assert_eq!(c.history().len(), 1);
        let entry = c.history().iter().next().unwrap();
        assert_eq!(entry.expression, "2+2");
        assert_eq!(entry.result, "4");
        assert_eq!(entry.customer, "Acme");
    }

    #[test]
    fn general_equals_does_not_record() {
        let mut c = calc();
        press_all(&mut c, &["2", "+", "2", "="]);
        assert!(c.history().is_empty());
    }

    #[test]
    fn failed_business_equals_does_not_record() {
        let mut c = business_calc();
        press_all(&mut c, &["5", "+", "*"]);
        let effect = c.press_label("=");
        assert_eq!(effect, Effect::None);
        assert!(c.history().is_empty());
    }

    #[test]
    fn history_capacity_evicts_oldest() {
        let mut c = business_calc();
        for n in 0..25 {
            c.set_customer(format!("C{n}"));
            press_all(&mut c, &["1", "+", &n.to_string(), "=", "AC"]);
        }
        assert_eq!(c.history().len(), HISTORY_CAPACITY);
        assert_eq!(c.history().iter().next().unwrap().customer, "C5");
    }

    #[test]
    fn history_button_shows_list_without_mutating_buffer() {
        let mut c = business_calc();
        press_all(&mut c, &["1", "2"]);
        let effect = c.press_label("History");
        assert_eq!(effect, Effect::ShowHistory);
        assert_eq!(c.buffer(), "12");
    }

    #[test]
    fn recall_loads_the_result_not_the_expression() {
        let mut c = business_calc();
        press_all(&mut c, &["2", "+", "3", "=", "AC"]);
        press_all(&mut c, &["1", "0", "*", "4", "=", "AC"]);
        // Row 0 is the newest entry (10*4 = 40).
        c.recall(0);
        assert_eq!(c.buffer(), "40");
        c.recall(1);
        assert_eq!(c.buffer(), "5");
        // Out-of-range rows leave the buffer untouched.
        c.recall(9);
        assert_eq!(c.buffer(), "5");
    }

    #[test]
    fn clear_history_twice_is_idempotent() {
        let mut c = business_calc();
        press_all(&mut c, &["2", "+", "2", "="]);
        assert_eq!(c.history().len(), 1);
        c.clear_history();
        assert!(c.history().is_empty());
        c.clear_history();
        assert!(c.history().is_empty());
    }

    #[test]
    fn mode_switch_clears_buffer_and_history_line() {
        let mut c = calc();
        press_all(&mut c, &["2", "+", "2", "="]);
        c.set_mode(Mode::Scientific);
        assert_eq!(c.display(), "0");
        assert_eq!(c.history_line(), "");
    }

    #[test]
    fn history_survives_restart_through_the_store() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("history.json");

        let mut c = Calculator::new(Box::new(JsonFileStore::new(&path)));
        c.set_mode(Mode::Business);
        c.set_customer("A");
        press_all(&mut c, &["1", "+", "1", "="]);
        drop(c);

        let restarted = Calculator::new(Box::new(JsonFileStore::new(&path)));
        assert_eq!(restarted.history().len(), 1);
        assert_eq!(restarted.history().iter().next().unwrap().result, "2");
    }

    #[test]
    fn clear_history_removes_the_persisted_record() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("history.json");

        let mut c = Calculator::new(Box::new(JsonFileStore::new(&path)));
        c.set_mode(Mode::Business);
        press_all(&mut c, &["1", "+", "1", "="]);
        assert!(path.exists());
        c.clear_history();
        assert!(!path.exists());
    }

    #[test]
    fn customer_field_editing() {
        let mut c = business_calc();
        c.customer_push('B');
        c.customer_push('o');
        c.customer_push('b');
        assert_eq!(c.customer(), "Bob");
        c.customer_pop();
        assert_eq!(c.customer(), "Bo");
    }

    #[test]
    fn keyboard_characters_flow_through_dispatch() {
        let mut c = calc();
        for ch in "3*3".chars() {
            if let Some(action) = Action::from_char(ch) {
                c.apply(action);
            }
        }
        c.apply(Action::Equals);
        assert_eq!(c.display(), "9");
    }
}
