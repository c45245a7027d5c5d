use anyhow::Context;
use pr_review_client::{HttpReviewApi, ReviewApi};
use pr_review_config::AppConfig;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

mod actions;
mod command_id;
mod dispatcher;
mod keymap;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
#[cfg(test)]
mod test_support;
mod theme;
mod view_models;
mod views;

use actions::{Action, BootstrapAction, GlobalAction};
use middleware::{
    keyboard_middleware::KeyboardMiddleware, logging_middleware::LoggingMiddleware,
    notification_middleware::NotificationMiddleware, poll_middleware::PollMiddleware,
    pull_request_middleware::PullRequestMiddleware, review_middleware::ReviewMiddleware,
};
use state::AppState;
use store::Store;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init().context("failed to initialize logging")?;
    log::info!("Starting PR Review Dashboard (log: {})", log_file.display());

    let config = AppConfig::load();
    let client = HttpReviewApi::new(&config.base_url, config.request_timeout())
        .with_context(|| format!("invalid backend URL: {}", config.base_url))?;
    log::info!("Using backend at {}", client.base_url());
    let api: Arc<dyn ReviewApi> = Arc::new(client);

    let runtime = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
    let handle = runtime.handle().clone();

    // Initialize store with middleware (they execute in this order)
    let mut store = Store::new(AppState::new(config));
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(PollMiddleware::new(api.clone(), handle.clone())));
    store.add_middleware(Box::new(PullRequestMiddleware::new(api.clone(), handle.clone())));
    store.add_middleware(Box::new(ReviewMiddleware::new(api, handle.clone())));
    store.add_middleware(Box::new(NotificationMiddleware::new(handle)));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Pollers and timers go before the runtime they run on
    store.shutdown();
    runtime.shutdown_timeout(Duration::from_millis(500));

    if let Err(err) = &result {
        log::error!("Dashboard failed: {:#}", err);
    }
    log::info!("Exiting PR Review Dashboard");
    result
}

/// Maximum time budget for processing actions before rendering
const ACTION_BUDGET: Duration = Duration::from_millis(16); // ~60fps frame budget

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> anyhow::Result<()> {
    // Queue bootstrap to be processed by the main loop
    store
        .dispatcher()
        .dispatch(Action::Bootstrap(BootstrapAction::Start));

    loop {
        // Process pending actions with a time budget to avoid blocking renders
        let start = Instant::now();

        while let Some(action) = store.dispatcher().pop() {
            store.dispatch(action);

            // Remaining actions stay in the queue for the next frame
            if start.elapsed() >= ACTION_BUDGET {
                break;
            }
        }

        terminal.draw(|frame| views::render(store.state(), frame.area(), frame))?;

        if !store.state().running {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    Ok(())
}
