use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::App;
use crate::widgets::{CurveChartWidget, ParallaxPageWidget, PresetListWidget, StatusBarWidget};

/// Width of the preset column
const SIDEBAR_WIDTH: u16 = 38;

/// Screen regions of the preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewLayout {
    pub presets: Rect,
    pub chart: Rect,
    pub page: Rect,
    pub status: Rect,
}

impl PreviewLayout {
    pub fn new(area: Rect, preset_count: usize) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)])
            .split(rows[0]);

        let list_height = (preset_count as u16).saturating_add(2);
        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(list_height), Constraint::Min(5)])
            .split(columns[0]);

        Self {
            presets: sidebar[0],
            chart: sidebar[1],
            page: columns[1],
            status: rows[1],
        }
    }

    /// Rows of the page visible inside its border
    pub fn viewport_height(&self) -> u16 {
        self.page.height.saturating_sub(2)
    }
}

/// Draw the whole preview
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = PreviewLayout::new(frame.area(), app.catalog.len());

    PresetListWidget::render(frame, layout.presets, app);
    CurveChartWidget::render(frame, layout.chart, app);
    ParallaxPageWidget::render(frame, layout.page, app);
    StatusBarWidget::render(frame, layout.status, app);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions() {
        let layout = PreviewLayout::new(Rect::new(0, 0, 120, 40), 6);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.status.y, 39);
        assert_eq!(layout.presets.height, 8);
        assert_eq!(layout.presets.width, SIDEBAR_WIDTH);
        assert_eq!(layout.page.x, SIDEBAR_WIDTH);
        assert_eq!(layout.viewport_height(), 37);
    }
}
