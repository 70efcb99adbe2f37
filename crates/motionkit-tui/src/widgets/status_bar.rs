use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            match app.selected() {
                Some(entry) => format!(
                    " {} | {}ms | {} samples | overshoot {:.1}% | row {:.1}",
                    entry.name(),
                    entry.curve.duration_ms,
                    entry.curve.samples.len(),
                    entry.curve.overshoot() * 100.0,
                    app.scroll.position()
                ),
                None => format!(" row {:.1}", app.scroll.position()),
            }
        };

        let help_hint = " q:quit j/k:scroll g/G:jump Tab:preset s:smoothing e:spring scroll ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.chars().count() + help_hint.chars().count());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
