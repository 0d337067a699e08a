//! Button grid geometry.
//!
//! Places a mode's labels into a four-column grid, auto-wrapping rows the
//! way the original widget's grid flowed. Wide labels (`0`, `=`) take two
//! column units. Pure geometry: cursor movement and mouse hit testing both
//! resolve against the computed cells.

use ratatui::layout::Rect;

use deskcalc_core::layout::{self, Mode};

/// Column units per grid row.
pub const COLUMNS: u16 = 4;

/// A placed button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub label: &'static str,
    pub rect: Rect,
    row: u16,
    col: u16,
    span: u16,
}

impl Cell {
    fn overlaps_columns(&self, other: &Cell) -> bool {
        self.col < other.col + other.span && other.col < self.col + self.span
    }
}

/// Computed button grid for one mode within one area.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Grid {
    /// Place the mode's labels into `area`.
    #[must_use]
    pub fn new(mode: Mode, area: Rect) -> Self {
        let labels = layout::layout(mode);
        let cell_w = area.width / COLUMNS;
        if cell_w == 0 || area.height == 0 {
            return Self::default();
        }

        // First pass: unit placement with auto-wrap.
        let mut placed: Vec<(u16, u16, u16)> = Vec::with_capacity(labels.len());
        let (mut row, mut col) = (0u16, 0u16);
        for label in labels {
            let span = if layout::is_wide(label) { 2 } else { 1 };
            if col + span > COLUMNS {
                row += 1;
                col = 0;
            }
            placed.push((row, col, span));
            col += span;
        }
        let rows = row + 1;
        let cell_h = (area.height / rows).max(1);

        let cells = labels
            .iter()
            .zip(placed)
            .map(|(label, (row, col, span))| Cell {
                label,
                rect: Rect {
                    x: area.x + col * cell_w,
                    y: area.y + row * cell_h,
                    width: span * cell_w,
                    height: cell_h,
                },
                row,
                col,
                span,
            })
            .collect();
        Self { cells }
    }

    /// The placed buttons, in layout order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell index under a terminal coordinate, if any.
    #[must_use]
    pub fn hit_test(&self, x: u16, y: u16) -> Option<usize> {
        self.cells.iter().position(|cell| {
            let r = cell.rect;
            x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height
        })
    }

    /// Move the cursor one cell left in layout order.
    #[must_use]
    pub fn move_left(&self, index: usize) -> usize {
        index.saturating_sub(1)
    }

    /// Move the cursor one cell right in layout order.
    #[must_use]
    pub fn move_right(&self, index: usize) -> usize {
        if self.cells.is_empty() {
            0
        } else {
            (index + 1).min(self.cells.len() - 1)
        }
    }

    /// Move the cursor to the column-overlapping cell one row up.
    #[must_use]
    pub fn move_up(&self, index: usize) -> usize {
        self.vertical_neighbor(index, -1)
    }

    /// Move the cursor to the column-overlapping cell one row down.
    #[must_use]
    pub fn move_down(&self, index: usize) -> usize {
        self.vertical_neighbor(index, 1)
    }

    fn vertical_neighbor(&self, index: usize, direction: i32) -> usize {
        let Some(current) = self.cells.get(index) else {
            return index;
        };
        let target_row = i32::from(current.row) + direction;
        self.cells
            .iter()
            .position(|cell| i32::from(cell.row) == target_row && cell.overlaps_columns(current))
            .unwrap_or(index)
    }
}
