use ratatui::{
    layout::Rect,
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use motionkit_core::SpringCurve;

use crate::app::App;

pub struct CurveChartWidget;

impl CurveChartWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let Some(entry) = app.selected() else {
            let empty = Paragraph::new("No presets").block(
                Block::default()
                    .title(" Curve ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.grey0)),
            );
            frame.render_widget(empty, area);
            return;
        };

        let points = Self::points(&entry.curve);
        let duration = f64::from(entry.curve.duration_ms);
        let endpoint = [(0.0, 1.0), (duration, 1.0)];
        let (y_min, y_max) = Self::y_bounds(&entry.curve);

        let datasets = vec![
            Dataset::default()
                .name("rest")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.grey0))
                .data(&endpoint),
            Dataset::default()
                .name(entry.name().to_string())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.orange))
                .data(&points),
        ];

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(format!(" {} ", entry.name()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.grey0))
                    .style(Style::default().bg(theme.bg0)),
            )
            .x_axis(
                Axis::default()
                    .title(Span::styled("ms", Style::default().fg(theme.grey2)))
                    .style(Style::default().fg(theme.grey0))
                    .bounds([0.0, duration])
                    .labels(vec!["0".to_string(), format!("{}", entry.curve.duration_ms)]),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(theme.grey0))
                    .bounds([y_min, y_max])
                    .labels(vec![format!("{:.1}", y_min), format!("{:.1}", y_max)]),
            );

        frame.render_widget(chart, area);
    }

    /// (time in ms, progress) pairs
    fn points(curve: &SpringCurve) -> Vec<(f64, f64)> {
        let last = curve.samples.len().saturating_sub(1).max(1) as f64;
        let duration = f64::from(curve.duration_ms);
        curve
            .samples
            .iter()
            .enumerate()
            .map(|(i, &v)| (duration * i as f64 / last, v))
            .collect()
    }

    /// Room for the overshoot above 1 and any dip below 0
    fn y_bounds(curve: &SpringCurve) -> (f64, f64) {
        let min = curve.samples.iter().copied().fold(0.0_f64, f64::min);
        let max = curve.samples.iter().copied().fold(1.0_f64, f64::max);
        (min, max + 0.05)
    }
}
