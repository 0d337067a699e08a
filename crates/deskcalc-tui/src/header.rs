//! Header panel: title, mode tabs, angle unit, theme name.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use deskcalc_core::{AngleUnit, Mode};

use crate::styles::ColorTheme;

/// Render the header panel. The angle unit is shown only in scientific
/// mode, matching the original widget's selector visibility.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    mode: Mode,
    unit: Option<AngleUnit>,
    theme: &ColorTheme,
) {
    let mut spans = vec![
        Span::styled("deskcalc", theme.header_style()),
        Span::raw(" | "),
    ];
    for (i, m) in Mode::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        if m == mode {
            spans.push(Span::styled(format!("[{}]", m.label()), theme.header_style()));
        } else {
            spans.push(Span::styled(m.label(), theme.muted_style()));
        }
    }
    if let Some(unit) = unit {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(unit.label(), theme.text_style()));
    }

    let block = Block::default().borders(Borders::BOTTOM).title(" deskcalc ");
    let paragraph = Paragraph::new(vec![Line::from(spans)]).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::Theme;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(mode: Mode, unit: Option<AngleUnit>) -> String {
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = ColorTheme::for_theme(Theme::Dark);
        let frame = terminal
            .draw(|frame| {
                render_header(frame, frame.area(), mode, unit, &theme);
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
    fn shows_all_mode_tabs_with_active_marker() {
        let content = draw(Mode::General, None);
        assert!(content.contains("[General]"));
        assert!(content.contains("Scientific"));
        assert!(content.contains("Business"));
    }

    #[test]
    fn shows_angle_unit_only_when_given() {
        assert!(draw(Mode::Scientific, Some(AngleUnit::Degrees)).contains("deg"));
        assert!(!draw(Mode::General, None).contains("deg"));
    }
}
