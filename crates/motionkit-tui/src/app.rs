use std::sync::Arc;
use std::time::Instant;

use motionkit_core::parallax::filter::FRAME_DT;
use motionkit_core::parallax::visibility_progress;
use motionkit_core::spring::{catalog_with, PresetCurve};
use motionkit_core::{AppConfig, ParallaxTransform, ScrollTransformConfig, TransformOutput};
use tracing::debug;

use crate::scroll::{Easing, ScrollAnimator};
use crate::theme::Theme;

/// Config distances are in pixels; one terminal row stands in for this many
pub const PIXELS_PER_ROW: f64 = 20.0;

const CARD_COUNT: u16 = 12;
const CARD_HEIGHT: u16 = 5;
const CARD_GAP: u16 = 6;

/// One scroll-linked element of the preview page
pub struct Card {
    pub title: String,
    /// Row of the card's top edge on the page
    pub top: u16,
    pub height: u16,
    /// Visibility progress from the last update
    pub progress: f64,
    pub transform: ParallaxTransform,
}

impl Card {
    /// Latest transform, or the neutral one before the first update
    pub fn output(&self) -> TransformOutput {
        self.transform.last().unwrap_or(TransformOutput {
            offset: 0.0,
            scale: 1.0,
            opacity: 1.0,
        })
    }
}

/// Preview application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    /// Built-in presets followed by the user's presets
    pub catalog: Vec<PresetCurve>,
    pub selected_preset: usize,
    pub scroll: ScrollAnimator,
    pub cards: Vec<Card>,
    pub smoothing_enabled: bool,
    /// Page scrolls with the selected preset instead of the configured easing
    pub spring_scroll: bool,
    pub viewport_height: u16,
    /// Time of the previous [`App::update`]
    last_frame: Option<Instant>,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme) -> motionkit_core::Result<Self> {
        let catalog = catalog_with(&config.presets.custom)?;
        let smoothing_enabled = config.parallax.smoothing.enabled;

        let mut app = Self {
            scroll: ScrollAnimator::new(config.ui.scroll.clone()),
            config,
            theme,
            catalog,
            selected_preset: 0,
            cards: Vec::new(),
            smoothing_enabled,
            spring_scroll: false,
            viewport_height: 0,
            last_frame: None,
            should_quit: false,
            status_message: None,
        };
        app.build_cards();
        Ok(app)
    }

    /// Parallax settings in rows for the current smoothing toggle
    fn card_config(&self) -> ScrollTransformConfig {
        let mut config = self.config.parallax.clone();
        config.distance /= PIXELS_PER_ROW;
        config.smoothing.enabled = self.smoothing_enabled;
        config
    }

    fn build_cards(&mut self) {
        let config = self.card_config();
        for card in self.cards.drain(..) {
            card.transform.dispose();
        }

        self.cards = (0..CARD_COUNT)
            .map(|i| Card {
                title: format!("Card {}", i + 1),
                top: CARD_GAP + i * (CARD_HEIGHT + CARD_GAP),
                height: CARD_HEIGHT,
                progress: 0.0,
                transform: ParallaxTransform::new(config.clone()),
            })
            .collect();
        debug!(
            "Built {} preview cards (distance {} rows, smoothing {})",
            self.cards.len(),
            config.distance,
            config.smoothing.enabled
        );
    }

    /// Total page height in rows
    pub fn page_height(&self) -> u16 {
        CARD_GAP + CARD_COUNT * (CARD_HEIGHT + CARD_GAP)
    }

    pub fn selected(&self) -> Option<&PresetCurve> {
        self.catalog.get(self.selected_preset)
    }

    pub fn set_viewport_height(&mut self, height: u16) {
        self.viewport_height = height;
        let max_scroll = self.page_height().saturating_sub(height);
        self.scroll.set_max_scroll(f64::from(max_scroll));
    }

    pub fn next_preset(&mut self) {
        if !self.catalog.is_empty() {
            self.selected_preset = (self.selected_preset + 1) % self.catalog.len();
            self.sync_easing();
        }
    }

    pub fn prev_preset(&mut self) {
        if !self.catalog.is_empty() {
            self.selected_preset =
                (self.selected_preset + self.catalog.len() - 1) % self.catalog.len();
            self.sync_easing();
        }
    }

    pub fn toggle_smoothing(&mut self) {
        self.smoothing_enabled = !self.smoothing_enabled;
        self.build_cards();
        let state = if self.smoothing_enabled { "on" } else { "off" };
        self.set_status(format!("Spring smoothing {}", state));
    }

    pub fn toggle_spring_scroll(&mut self) {
        self.spring_scroll = !self.spring_scroll;
        self.sync_easing();
        let message = match (self.spring_scroll, self.selected()) {
            (true, Some(preset)) => format!("Page scroll follows '{}'", preset.name()),
            _ => "Page scroll uses configured easing".to_string(),
        };
        self.set_status(message);
    }

    fn sync_easing(&mut self) {
        let easing = match (self.spring_scroll, self.selected()) {
            (true, Some(preset)) => Easing::Spring(preset.curve.clone()),
            _ => self.config.ui.scroll.easing.into(),
        };
        self.scroll.set_easing(easing);
    }

    pub fn scroll_down(&mut self) {
        self.scroll.scroll_down();
    }

    pub fn scroll_up(&mut self) {
        self.scroll.scroll_up();
    }

    pub fn scroll_half_page_down(&mut self) {
        self.scroll.scroll_half_page_down(self.viewport_height);
    }

    pub fn scroll_half_page_up(&mut self) {
        self.scroll.scroll_half_page_up(self.viewport_height);
    }

    pub fn jump_to_top(&mut self, now: Instant) {
        self.scroll.scroll_to(0.0, now);
    }

    /// Scroll target is clamped, so this lands on the last full viewport
    pub fn jump_to_bottom(&mut self, now: Instant) {
        self.scroll.scroll_to(f64::from(self.page_height()), now);
    }

    /// Advance page scroll and every card's transform to `now`
    ///
    /// Smoothing advances by the real time since the previous update, so
    /// early wakeups from key repeat do not speed up the springs.
    pub fn update(&mut self, now: Instant) {
        let dt = self
            .last_frame
            .map_or(FRAME_DT, |last| now.saturating_duration_since(last).as_secs_f64());
        self.last_frame = Some(now);

        let top = self.scroll.update(now);
        let viewport = f64::from(self.viewport_height);

        for card in &mut self.cards {
            card.progress =
                visibility_progress(f64::from(card.top), f64::from(card.height), top, viewport);
            card.transform.evaluate_by(card.progress, dt);
        }
    }

    /// Something is still moving; poll at animation rate
    pub fn needs_fast_update(&self) -> bool {
        self.scroll.needs_update() || self.cards.iter().any(|c| !c.transform.is_settled())
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app() -> App {
        let mut app = App::new(Arc::new(AppConfig::default()), Theme::default()).unwrap();
        app.set_viewport_height(30);
        app
    }

    #[test]
    fn test_cards_laid_out_down_the_page() {
        let app = app();
        assert_eq!(app.cards.len(), CARD_COUNT as usize);
        assert!(app.cards.windows(2).all(|w| w[1].top > w[0].top + w[0].height));
        let last = app.cards.last().unwrap();
        assert!(last.top + last.height <= app.page_height());
    }

    #[test]
    fn test_update_feeds_progress_to_cards() {
        let mut app = app();
        app.update(Instant::now());

        let first = &app.cards[0];
        assert!(first.progress > 0.0 && first.progress < 1.0);
        // far below the viewport
        assert_eq!(app.cards.last().unwrap().progress, 0.0);
        let distance = AppConfig::default().parallax.distance / PIXELS_PER_ROW;
        assert_eq!(app.cards.last().unwrap().output().offset, -distance);
    }

    #[test]
    fn test_scrolling_moves_progress() {
        let mut app = app();
        let now = Instant::now();
        app.update(now);
        let before = app.cards[1].progress;

        app.scroll_half_page_down();
        app.update(now);
        app.update(now + Duration::from_secs(1));
        assert!(app.cards[1].progress > before);
    }

    #[test]
    fn test_jump_to_bottom_and_back() {
        let mut app = app();
        let now = Instant::now();
        app.jump_to_bottom(now);
        let bottom = f64::from(app.page_height() - app.viewport_height);
        assert_eq!(app.scroll.target(), bottom);

        app.update(now + Duration::from_secs(1));
        assert_eq!(app.scroll.position(), bottom);
        assert_eq!(app.cards[0].progress, 1.0);

        app.jump_to_top(now + Duration::from_secs(1));
        app.update(now + Duration::from_secs(2));
        assert_eq!(app.scroll.position(), 0.0);
    }

    #[test]
    fn test_preset_cycling_wraps() {
        let mut app = app();
        let count = app.catalog.len();
        app.prev_preset();
        assert_eq!(app.selected_preset, count - 1);
        app.next_preset();
        assert_eq!(app.selected_preset, 0);
    }

    #[test]
    fn test_spring_scroll_uses_selected_curve() {
        let mut app = app();
        app.next_preset();
        app.toggle_spring_scroll();
        let expected = app.selected().unwrap().curve.clone();
        assert_eq!(app.scroll.easing(), &Easing::Spring(expected));

        app.toggle_spring_scroll();
        assert!(matches!(app.scroll.easing(), Easing::Builtin(_)));
    }

    #[test]
    fn test_toggle_smoothing_rebuilds_transforms() {
        let mut app = app();
        assert!(app.cards.iter().all(|c| c.transform.is_smoothed()));
        app.toggle_smoothing();
        assert!(app.cards.iter().all(|c| !c.transform.is_smoothed()));
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_smoothing_follows_wall_clock() {
        let start = Instant::now();
        let later = start + Duration::from_millis(300);
        let scrolled = || {
            let mut app = app();
            app.update(start);
            app.scroll_half_page_down();
            app.update(start);
            app.update(later);
            app
        };

        let paced = scrolled();
        let mut burst = scrolled();
        // repeated wakeups at the same instant add no spring time
        for _ in 0..20 {
            burst.update(later);
        }

        assert!(!paced.cards[1].transform.is_settled());
        for (a, b) in paced.cards.iter().zip(&burst.cards) {
            assert_eq!(a.output(), b.output());
        }
    }
}
