use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::app::App;

pub struct PresetListWidget;

impl PresetListWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let block = Block::default()
            .title(" Presets ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg0));

        let items: Vec<ListItem> = app
            .catalog
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let name_style = if i == app.selected_preset {
                    Style::default()
                        .fg(theme.fg0)
                        .bg(theme.selection)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.fg0)
                };

                let marker = if entry.curve.overshoot() > 0.0 { "~" } else { " " };

                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<10}", entry.name()), name_style),
                    Span::styled(
                        format!(
                            " {:>4.2}s b{:<4.2}",
                            entry.preset.duration, entry.preset.bounce
                        ),
                        Style::default().fg(theme.grey2),
                    ),
                    Span::styled(
                        format!(" {:>5}ms", entry.curve.duration_ms),
                        Style::default().fg(theme.blue),
                    ),
                    Span::styled(marker, Style::default().fg(theme.yellow)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(theme.selection));

        let mut state = ListState::default();
        state.select(Some(app.selected_preset));

        frame.render_stateful_widget(list, area, &mut state);
    }
}
