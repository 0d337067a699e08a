//! # deskcalc-core
//!
//! Core library for the deskcalc terminal calculator. Implements the
//! mode-specific button layouts, the expression buffer state machine, the
//! angle-aware bridge to the external expression evaluator, and the
//! persisted business transaction history.

pub mod action;
pub mod angle;
pub mod constants;
pub mod engine;
pub mod eval;
pub mod history;
pub mod layout;
pub mod store;

// Re-exports
pub use action::Action;
pub use angle::{AngleUnit, TrigFn};
pub use constants::{exit_codes, CSV_EXPORT_FILENAME, HISTORY_CAPACITY};
pub use engine::{Calculator, Effect};
pub use eval::{format_value, EvalError, Evaluator};
pub use history::{HistoryEntry, HistoryLog};
pub use layout::Mode;
pub use store::{HistoryStore, JsonFileStore, MemoryStore};
