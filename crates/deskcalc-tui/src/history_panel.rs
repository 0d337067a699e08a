//! Business panel: customer-name field and the history list.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use deskcalc_core::{HistoryLog, HISTORY_CAPACITY};

use crate::styles::ColorTheme;

/// Render the customer-name field. A recorded entry pulses the field as a
/// brief acknowledgment.
pub fn render_customer(
    frame: &mut Frame,
    area: Rect,
    name: &str,
    focused: bool,
    pulsing: bool,
    theme: &ColorTheme,
) {
    let style = if pulsing {
        theme.pulse_style()
    } else if focused {
        theme.header_style()
    } else {
        theme.text_style()
    };

    let mut spans = vec![Span::styled(name.to_string(), style)];
    if focused {
        spans.push(Span::styled("_", theme.header_style()));
    }

    let block = Block::default().borders(Borders::ALL).title(" Customer ");
    let paragraph = Paragraph::new(vec![Line::from(spans)]).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the history list, newest entry first.
pub fn render_history(
    frame: &mut Frame,
    area: Rect,
    log: &HistoryLog,
    selected: Option<usize>,
    theme: &ColorTheme,
) {
    let title = format!(" History {}/{HISTORY_CAPACITY} ", log.len());
    let block = Block::default().borders(Borders::ALL).title(title);

    if log.is_empty() {
        let paragraph = Paragraph::new(Line::styled("no entries yet", theme.muted_style()))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = log
        .newest_first()
        .map(|entry| ListItem::new(Line::styled(entry.display_line(), theme.text_style())))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selected_style())
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

/// The list row (display order) under a terminal coordinate, if any.
///
/// Accounts for the block border; rows map 1:1 to visible lines.
#[must_use]
pub fn history_row_at(area: Rect, log: &HistoryLog, x: u16, y: u16) -> Option<usize> {
    if area.width < 3 || area.height < 3 {
        return None;
    }
    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width - 2,
        height: area.height - 2,
    };
    if x < inner.x || x >= inner.x + inner.width || y < inner.y || y >= inner.y + inner.height {
        return None;
    }
    let row = usize::from(y - inner.y);
    (row < log.len()).then_some(row)
}
