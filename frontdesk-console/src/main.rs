use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use frontdesk_client::{ApiClient, ClientConfig};
use frontdesk_console::app::{App, Effect, Update};
use frontdesk_console::config::Config;
use frontdesk_console::{draw, tasks};
use ratatui::prelude::*;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Logs render inside the TUI log pane
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter)
        .init();
    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);

    let config = Config::from_env();
    let client = ClientConfig::new(config.api_url.clone())
        .with_timeout(config.request_timeout_secs)
        .build_client();

    tracing::info!("Frontdesk console starting, API at {}", config.api_url);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, client, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    client: ApiClient,
    config: &Config,
) -> io::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let tick = Duration::from_millis(config.tick_ms);

    let (mut app, startup) = App::new();
    dispatch(startup, &client, &tx);

    loop {
        terminal.draw(|f| draw::ui(f, &app))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    let effects = app.handle_key(key);
                    if dispatch(effects, &client, &tx) {
                        return Ok(());
                    }
                }
            }
        }

        // Apply whatever completions arrived since the last frame
        while let Ok(update) = rx.try_recv() {
            let effects = app.apply_update(update);
            if dispatch(effects, &client, &tx) {
                return Ok(());
            }
        }

        app.tick(Instant::now());
    }
}

/// Hands effects to the runtime; returns true when a quit was requested
fn dispatch(
    effects: Vec<Effect>,
    client: &ApiClient,
    tx: &mpsc::UnboundedSender<Update>,
) -> bool {
    let mut quit = false;
    for effect in effects {
        if matches!(effect, Effect::Quit) {
            quit = true;
            continue;
        }
        tasks::run(effect, client.clone(), tx.clone());
    }
    quit
}
