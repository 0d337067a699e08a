//! TUI application model (Elm architecture).

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, MouseButton, MouseEvent, MouseEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event::DisableMouseCapture, event::EnableMouseCapture, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Terminal;
use tracing::warn;

use deskcalc_core::constants::CSV_EXPORT_FILENAME;
use deskcalc_core::{layout, Action, Calculator, Effect, Mode};

use crate::display::render_display;
use crate::footer::render_footer;
use crate::grid::Grid;
use crate::header::render_header;
use crate::history_panel::{history_row_at, render_customer, render_history};
use crate::keymap::{map_key, Focus, KeyAction};
use crate::styles::{ColorTheme, Theme};

/// How long the customer-field acknowledgment stays lit.
const PULSE_DURATION: Duration = Duration::from_millis(800);

/// How long transient status messages stay in the footer.
const STATUS_DURATION: Duration = Duration::from_secs(3);

/// TUI application state (Elm Model).
pub struct App {
    calc: Calculator,
    theme: Theme,
    focus: Focus,
    /// Grid cursor, an index into the current grid's cells.
    cursor: usize,
    grid: Grid,
    grid_area: Rect,
    history_area: Option<Rect>,
    show_history: bool,
    history_sel: usize,
    pulse_until: Option<Instant>,
    status: Option<(String, Instant)>,
    export_path: PathBuf,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create the app around a calculator.
    #[must_use]
    pub fn new(calc: Calculator, theme: Theme) -> Self {
        // Provisional grid so cursor keys work before the first render.
        let grid_area = Rect::new(0, 7, 60, 18);
        let grid = Grid::new(calc.mode(), grid_area);
        let show_history = calc.mode() == Mode::Business;
        Self {
            calc,
            theme,
            focus: Focus::Buffer,
            cursor: 0,
            grid,
            grid_area,
            history_area: None,
            show_history,
            history_sel: 0,
            pulse_until: None,
            status: None,
            export_path: PathBuf::from(CSV_EXPORT_FILENAME),
            should_quit: false,
        }
    }

    /// The wrapped calculator.
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// Current theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Current focus.
    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Whether the history panel is shown.
    #[must_use]
    pub fn history_visible(&self) -> bool {
        self.show_history
    }

    /// Whether the customer field is currently pulsing.
    #[must_use]
    pub fn is_pulsing(&self) -> bool {
        self.pulse_until.is_some_and(|until| Instant::now() < until)
    }

    /// Override where the CSV export is written.
    pub fn set_export_path(&mut self, path: PathBuf) {
        self.export_path = path;
    }

    /// Fold one input action into the model (Elm Update).
    pub fn update(&mut self, action: KeyAction) {
        match action {
            KeyAction::Calculator(action) => self.dispatch(action),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::CycleMode => self.set_mode(self.calc.mode().next()),
            KeyAction::ToggleTheme => self.theme = self.theme.toggled(),
            KeyAction::ToggleAngleUnit => {
                // The selector is only visible in scientific mode.
                if self.calc.mode() == Mode::Scientific {
                    self.calc.toggle_angle_unit();
                }
            }
            KeyAction::ToggleHistory => {
                if self.calc.mode() == Mode::Business {
                    self.show_history = !self.show_history;
                }
            }
            KeyAction::ExportCsv => self.export_csv(),
            KeyAction::ClearHistory => {
                if self.calc.mode() == Mode::Business {
                    self.calc.clear_history();
                    self.history_sel = 0;
                    self.set_status("history cleared");
                }
            }
            KeyAction::SwitchFocus => self.cycle_focus(),
            KeyAction::CustomerChar(c) => self.calc.customer_push(c),
            KeyAction::CustomerBackspace => self.calc.customer_pop(),
            KeyAction::GridLeft => self.cursor = self.grid.move_left(self.cursor),
            KeyAction::GridRight => self.cursor = self.grid.move_right(self.cursor),
            KeyAction::GridUp => self.cursor = self.grid.move_up(self.cursor),
            KeyAction::GridDown => self.cursor = self.grid.move_down(self.cursor),
            KeyAction::GridPress => {
                if let Some(cell) = self.grid.cells().get(self.cursor) {
                    let label = cell.label;
                    let effect = self.calc.press_label(label);
                    self.handle_effect(effect);
                }
            }
            KeyAction::HistoryPrev => self.history_sel = self.history_sel.saturating_sub(1),
            KeyAction::HistoryNext => {
                let last = self.calc.history().len().saturating_sub(1);
                self.history_sel = (self.history_sel + 1).min(last);
            }
            KeyAction::Recall => {
                self.calc.recall(self.history_sel);
                self.focus = Focus::Buffer;
            }
            KeyAction::None => {}
        }
    }

    /// Handle a mouse event: grid presses and history-row recall.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(index) = self.grid.hit_test(mouse.column, mouse.row) {
            self.cursor = index;
            let label = self.grid.cells()[index].label;
            let effect = self.calc.press_label(label);
            self.handle_effect(effect);
            return;
        }
        if let Some(area) = self.history_area {
            if let Some(row) = history_row_at(area, self.calc.history(), mouse.column, mouse.row) {
                // Loads the row's result, not the original expression.
                self.calc.recall(row);
            }
        }
    }

    /// Expire the pulse and any stale status message.
    pub fn tick(&mut self) {
        let now = Instant::now();
        if self.pulse_until.is_some_and(|until| now >= until) {
            self.pulse_until = None;
        }
        if self
            .status
            .as_ref()
            .is_some_and(|(_, since)| now.duration_since(*since) >= STATUS_DURATION)
        {
            self.status = None;
        }
    }

    fn dispatch(&mut self, action: Action) {
        let effect = self.calc.apply(action);
        self.handle_effect(effect);
    }

    fn handle_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::ShowHistory => self.show_history = true,
            Effect::Recorded => {
                self.show_history = true;
                self.history_sel = 0;
                self.pulse_until = Some(Instant::now() + PULSE_DURATION);
            }
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        self.calc.set_mode(mode);
        self.focus = Focus::Buffer;
        self.cursor = 0;
        self.history_sel = 0;
        self.show_history = mode == Mode::Business;
        self.grid = Grid::new(mode, self.grid_area);
    }

    fn cycle_focus(&mut self) {
        if self.calc.mode() != Mode::Business {
            self.focus = Focus::Buffer;
            return;
        }
        self.focus = match self.focus {
            Focus::Buffer => Focus::Customer,
            Focus::Customer if self.show_history => Focus::History,
            Focus::Customer | Focus::History => Focus::Buffer,
        };
    }

    fn export_csv(&mut self) {
        if self.calc.mode() != Mode::Business {
            return;
        }
        match self.calc.export_csv(&self.export_path) {
            Ok(()) => {
                let message = format!(
                    "exported {} entries to {}",
                    self.calc.history().len(),
                    self.export_path.display()
                );
                self.set_status(message);
            }
            Err(err) => {
                warn!(%err, "CSV export failed");
                self.set_status("export failed");
            }
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some((message.into(), Instant::now()));
    }

    /// Render the full TUI view.
    pub fn render(&mut self, frame: &mut ratatui::Frame) {
        let theme = ColorTheme::for_theme(self.theme);
        let chunks = Layout::vertical([
            Constraint::Length(3), // header
            Constraint::Length(4), // display
            Constraint::Min(9),    // button grid / history
            Constraint::Length(2), // footer
        ])
        .split(frame.area());

        let mode = self.calc.mode();
        let unit = (mode == Mode::Scientific).then(|| self.calc.angle_unit());
        render_header(frame, chunks[0], mode, unit, &theme);
        render_display(
            frame,
            chunks[1],
            self.calc.history_line(),
            self.calc.display(),
            &theme,
        );

        if mode == Mode::Business && self.show_history {
            let main = Layout::horizontal([
                Constraint::Percentage(60),
                Constraint::Percentage(40),
            ])
            .split(chunks[2]);
            let side = Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).split(main[1]);

            self.layout_grid(main[0]);
            render_customer(
                frame,
                side[0],
                self.calc.customer(),
                self.focus == Focus::Customer,
                self.is_pulsing(),
                &theme,
            );
            let selected = (self.focus == Focus::History && !self.calc.history().is_empty())
                .then_some(self.history_sel);
            render_history(frame, side[1], self.calc.history(), selected, &theme);
            self.history_area = Some(side[1]);
        } else {
            self.layout_grid(chunks[2]);
            self.history_area = None;
        }
        self.render_grid(frame, &theme);

        let status = self.status.as_ref().map(|(text, _)| text.as_str());
        render_footer(frame, chunks[3], mode, status, &theme);
    }

    fn layout_grid(&mut self, area: Rect) {
        if area != self.grid_area || self.grid.is_empty() {
            self.grid_area = area;
            self.grid = Grid::new(self.calc.mode(), area);
        }
        if self.cursor >= self.grid.len() {
            self.cursor = 0;
        }
    }

    fn render_grid(&self, frame: &mut ratatui::Frame, theme: &ColorTheme) {
        for (index, cell) in self.grid.cells().iter().enumerate() {
            let style = if self.focus == Focus::Buffer && index == self.cursor {
                theme.cursor_style()
            } else if layout::is_wide(cell.label) {
                theme.wide_style()
            } else {
                theme.button_style(layout::is_operator(cell.label))
            };
            let button = Paragraph::new(cell.label)
                .alignment(ratatui::layout::Alignment::Center)
                .style(style)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(button, cell.rect);
        }
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop: render, poll input, update, tick.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                break;
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => {
                        let action = map_key(key, self.focus);
                        self.update(action);
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            self.tick();
        }

        Self::teardown_terminal(&mut terminal)?;
        Ok(())
    }
}
