pub mod action;
pub mod app;
mod render;
pub mod timer;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::ExecutableCommand;
use playbook::{ActiveFilter, Catalog, EntryId, Osc52Clipboard, PageLocation};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::time::{Duration, interval};

use crate::action::{Action, AppCommand};
use crate::app::App;
use crate::timer::ResetTimer;

/// Startup options for the browser.
#[derive(Debug, Clone)]
pub struct BrowserOptions {
    /// Page the share links point at.
    pub location: PageLocation,
    /// Filter applied before the first render.
    pub initial_filter: ActiveFilter,
    /// Entry to place the cursor on, if visible.
    pub select: Option<EntryId>,
}

/// Launch the interactive browser. Returns when the user quits.
pub async fn run(catalog: Catalog, options: BrowserOptions) -> anyhow::Result<()> {
    let mut app = App::new(
        catalog,
        options.location,
        Box::new(Osc52Clipboard::stdout()),
    );
    app.set_filter(options.initial_filter);
    if let Some(id) = &options.select
        && !app.select(id)
    {
        app.set_feedback(playbook::Feedback::warning(format!("{id} is not in the current view")));
    }

    // Terminal setup.
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, app).await;

    // Terminal teardown (always runs).
    disable_raw_mode()?;
    std::io::stdout().execute(DisableMouseCapture)?;
    std::io::stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    mut app: App,
) -> anyhow::Result<()> {
    use futures::StreamExt;

    let (action_tx, mut action_rx) = mpsc::channel::<Action>(32);
    let mut event_stream = EventStream::new();
    let mut tick_interval = interval(Duration::from_millis(250));
    let mut reset_timer = ResetTimer::new();

    loop {
        // Compute layout geometry for mouse hit testing before render.
        let size = terminal.size()?;
        let frame_rect = ratatui::layout::Rect::new(0, 0, size.width, size.height);
        app.apply_layout(render::compute_layout(frame_rect, &app));

        terminal.draw(|frame| render::render(frame, &app))?;

        let command = tokio::select! {
            Some(event_result) = event_stream.next() => {
                match event_result {
                    Ok(event) => {
                        // Only key presses (not release/repeat) and mouse events.
                        match &event {
                            Event::Key(key) if key.kind != KeyEventKind::Press => continue,
                            Event::Key(_) | Event::Mouse(_) => {}
                            _ => continue,
                        }
                        app.handle_event(event)
                    }
                    Err(_) => continue,
                }
            }
            Some(action) = action_rx.recv() => {
                app.handle_action(action)
            }
            _ = tick_interval.tick() => {
                app.tick();
                AppCommand::None
            }
        };

        match command {
            AppCommand::None => {}
            AppCommand::Quit => break,
            AppCommand::ScheduleReset { token, after } => {
                reset_timer.arm(token, after, action_tx.clone());
            }
        }
    }

    Ok(())
}
