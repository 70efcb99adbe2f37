use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use motionkit_core::TransformOutput;

use crate::app::{App, Card};
use crate::theme::fade;

/// Fraction of the page width an unscaled card takes
const CARD_WIDTH_FRACTION: f64 = 0.8;

pub struct ParallaxPageWidget;

impl ParallaxPageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let smoothing = if app.smoothing_enabled { "on" } else { "off" };
        let easing = if app.spring_scroll { "spring" } else { "eased" };

        let block = Block::default()
            .title(format!(" Parallax  smoothing:{}  scroll:{} ", smoothing, easing))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let top = app.scroll.position();
        let palette = theme.card_palette();

        for (i, card) in app.cards.iter().enumerate() {
            let output = card.output();
            let Some(rect) = Self::card_rect(inner, card, top, output) else {
                continue;
            };

            let color = fade(palette[i % palette.len()], theme.bg0, output.opacity);
            let text = vec![
                Line::from(Span::styled(
                    card.title.clone(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("p {:.2}  y {:+.2}", card.progress, output.offset),
                    Style::default().fg(color),
                )),
                Line::from(Span::styled(
                    format!("s {:.3}  o {:.2}", output.scale, output.opacity),
                    Style::default().fg(color),
                )),
            ];

            let paragraph = Paragraph::new(text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                )
                .style(Style::default().bg(theme.bg1));

            frame.render_widget(Clear, rect);
            frame.render_widget(paragraph, rect);
        }
    }

    /// Screen rectangle of a card inside `inner`, clipped; None when off screen
    ///
    /// `top` is the page row at the top of the viewport. The offset shifts the
    /// card vertically and the scale narrows it around its center.
    pub fn card_rect(inner: Rect, card: &Card, top: f64, output: TransformOutput) -> Option<Rect> {
        let y = (f64::from(card.top) - top + output.offset).round() as i32;
        let y_start = y.max(0);
        let y_end = (y + i32::from(card.height)).min(i32::from(inner.height));
        if y_end <= y_start || inner.width == 0 {
            return None;
        }

        let width = (f64::from(inner.width) * CARD_WIDTH_FRACTION * output.scale)
            .round()
            .clamp(1.0, f64::from(inner.width)) as u16;
        let x = inner.x + (inner.width - width) / 2;

        Some(Rect::new(
            x,
            inner.y + y_start as u16,
            width,
            (y_end - y_start) as u16,
        ))
    }
}
