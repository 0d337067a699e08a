//! # deskcalc-tui
//!
//! Terminal front end for the deskcalc engine using ratatui with Elm
//! architecture: the [`model::App`] owns the state, `update` folds input
//! actions into it, and `render` draws the widget tree.

pub mod display;
pub mod footer;
pub mod grid;
pub mod header;
pub mod history_panel;
pub mod keymap;
pub mod model;
pub mod styles;

pub use grid::Grid;
pub use keymap::{map_key, Focus, KeyAction};
pub use model::App;
pub use styles::{ColorTheme, Theme};
