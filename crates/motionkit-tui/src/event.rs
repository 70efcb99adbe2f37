use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Event handler for terminal events
///
/// Polls at the idle tick rate, or at the animation frame rate while
/// something on screen is still moving.
pub struct EventHandler {
    tick_rate: Duration,
    frame_interval: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, frame_interval: Duration) -> Self {
        Self {
            tick_rate,
            frame_interval: frame_interval.min(tick_rate),
        }
    }

    pub fn poll_interval(&self, animating: bool) -> Duration {
        if animating {
            self.frame_interval
        } else {
            self.tick_rate
        }
    }

    /// Poll for the next event
    pub fn next(&self, animating: bool) -> Result<Option<AppEvent>> {
        if event::poll(self.poll_interval(animating))? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_interval() {
        let handler = EventHandler::new(Duration::from_millis(100), Duration::from_millis(16));
        assert_eq!(handler.poll_interval(false), Duration::from_millis(100));
        assert_eq!(handler.poll_interval(true), Duration::from_millis(16));
    }

    #[test]
    fn test_frame_interval_never_slower_than_tick() {
        let handler = EventHandler::new(Duration::from_millis(10), Duration::from_millis(16));
        assert_eq!(handler.poll_interval(true), Duration::from_millis(10));
    }
}
