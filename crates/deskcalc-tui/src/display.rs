//! Display panel: previous-expression line plus the current buffer.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use deskcalc_core::constants::ERROR_DISPLAY;

use crate::styles::ColorTheme;

/// Render the display panel.
pub fn render_display(
    frame: &mut Frame,
    area: Rect,
    history_line: &str,
    display: &str,
    theme: &ColorTheme,
) {
    let value_style = if display == ERROR_DISPLAY {
        theme.error_style()
    } else {
        theme.display_style()
    };

    let text = vec![
        Line::styled(history_line.to_string(), theme.muted_style()),
        Line::styled(display.to_string(), value_style),
    ];

    let block = Block::default().borders(Borders::ALL);
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Right)
        .block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::Theme;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(history_line: &str, display: &str) -> String {
        let backend = TestBackend::new(40, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = ColorTheme::for_theme(Theme::Dark);
        let frame = terminal
            .draw(|frame| {
                render_display(frame, frame.area(), history_line, display, &theme);
            })
            .unwrap();
        let buf = &frame.buffer;
        let mut content = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                content.push_str(buf.buffer[(x, y)].symbol());
            }
        }
        content
    }

    #[test]
    fn shows_zero_for_empty_buffer() {
        assert!(draw("", "0").contains('0'));
    }

    #[test]
    fn shows_history_line_and_value() {
        let content = draw("2+2 =", "4");
        assert!(content.contains("2+2 ="));
        assert!(content.contains('4'));
    }

    #[test]
    fn shows_error_marker() {
        assert!(draw("", "Error").contains("Error"));
    }
}
