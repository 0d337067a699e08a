//! Footer panel with keyboard shortcuts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use deskcalc_core::Mode;

use crate::styles::ColorTheme;

/// Render the footer panel. A transient status message replaces the key
/// hints while present.
pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    mode: Mode,
    status: Option<&str>,
    theme: &ColorTheme,
) {
    let block = Block::default().borders(Borders::TOP);

    if let Some(status) = status {
        let paragraph =
            Paragraph::new(Line::styled(status.to_string(), theme.header_style())).block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let mut spans = hint(theme, "q", "quit");
    spans.extend(hint(theme, "m", "mode"));
    spans.extend(hint(theme, "d", "theme"));
    spans.extend(hint(theme, "Enter", "="));
    spans.extend(hint(theme, "Esc", "clear"));
    match mode {
        Mode::General => {}
        Mode::Scientific => {
            spans.extend(hint(theme, "u", "rad/deg"));
        }
        Mode::Business => {
            spans.extend(hint(theme, "Tab", "focus"));
            spans.extend(hint(theme, "h", "history"));
            spans.extend(hint(theme, "x", "export"));
            spans.extend(hint(theme, "Del", "clear history"));
        }
    }
    // Drop the trailing separator.
    spans.pop();

    let paragraph = Paragraph::new(vec![Line::from(spans)]).block(block);
    frame.render_widget(paragraph, area);
}

fn hint(theme: &ColorTheme, key: &str, label: &str) -> Vec<Span<'static>> {
    vec![
        Span::styled(key.to_string(), theme.button_style(true)),
        Span::raw(format!(": {label}")),
        Span::raw(" | "),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::Theme;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(mode: Mode, status: Option<&str>) -> String {
        let backend = TestBackend::new(100, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = ColorTheme::for_theme(Theme::Dark);
        let frame = terminal
            .draw(|frame| {
                render_footer(frame, frame.area(), mode, status, &theme);
            })
            .unwrap();
        let buf = &frame.buffer;
        (0..buf.area.width)
            .map(|x| buf.buffer[(x, 1)].symbol().to_string())
            .collect()
    }

    #[test]
    fn general_mode_shows_base_hints() {
        let content = draw(Mode::General, None);
        assert!(content.contains("quit"));
        assert!(content.contains("mode"));
        assert!(content.contains("clear"));
        assert!(!content.contains("export"));
    }

    #[test]
    fn scientific_mode_adds_angle_hint() {
        assert!(draw(Mode::Scientific, None).contains("rad/deg"));
    }

    #[test]
    fn business_mode_adds_history_hints() {
        let content = draw(Mode::Business, None);
        assert!(content.contains("history"));
        assert!(content.contains("export"));
        assert!(content.contains("focus"));
    }

    #[test]
    fn status_replaces_hints() {
        let content = draw(Mode::General, Some("exported 3 entries"));
        assert!(content.contains("exported 3 entries"));
        assert!(!content.contains("quit"));
    }

    #[test]
    fn small_area_does_not_panic() {
        let backend = TestBackend::new(10, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = ColorTheme::for_theme(Theme::Dark);
        terminal
            .draw(|frame| {
                render_footer(frame, frame.area(), Mode::Business, None, &theme);
            })
            .unwrap();
    }
}
