use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use motionkit_core::AppConfig;
use motionkit_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    theme::Theme,
    ui::{self, PreviewLayout},
};

type PreviewTerminal = Terminal<CrosstermBackend<Stdout>>;

pub fn run(config: Arc<AppConfig>) -> Result<()> {
    // Build state before touching the terminal so config errors print normally
    let mut app = App::new(config.clone(), Theme::default())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("motionkit"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app, &config);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn resize(app: &mut App, width: u16, height: u16) {
    let layout = PreviewLayout::new(Rect::new(0, 0, width, height), app.catalog.len());
    app.set_viewport_height(layout.viewport_height());
}

fn apply(app: &mut App, action: Action) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::ScrollDown => app.scroll_down(),
        Action::ScrollUp => app.scroll_up(),
        Action::ScrollHalfPageDown => app.scroll_half_page_down(),
        Action::ScrollHalfPageUp => app.scroll_half_page_up(),
        Action::JumpToTop => app.jump_to_top(Instant::now()),
        Action::JumpToBottom => app.jump_to_bottom(Instant::now()),
        Action::NextPreset => app.next_preset(),
        Action::PrevPreset => app.prev_preset(),
        Action::ToggleSmoothing => app.toggle_smoothing(),
        Action::ToggleSpringScroll => app.toggle_spring_scroll(),
        Action::None => {}
    }
}

fn run_loop(terminal: &mut PreviewTerminal, app: &mut App, config: &AppConfig) -> Result<()> {
    let event_handler = EventHandler::new(
        Duration::from_millis(config.ui.tick_rate_ms),
        config.ui.scroll.frame_interval(),
    );

    let size = terminal.size()?;
    resize(app, size.width, size.height);

    loop {
        app.update(Instant::now());
        terminal.draw(|frame| ui::draw(frame, app))?;

        match event_handler.next(app.needs_fast_update())? {
            Some(AppEvent::Key(key)) => {
                app.clear_status();
                apply(app, handle_key_event(key));
            }
            Some(AppEvent::Resize(width, height)) => resize(app, width, height),
            Some(AppEvent::Tick) | None => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
