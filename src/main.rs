use anyhow::Result;
use clap::Parser;
use cli_log::*;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use dotenv::dotenv;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::{
    io,
    time::{Duration, Instant},
};

// Import from our local library modules
use sidex_wallet::{App, Cli, render_ui};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    init_cli_log!();
    info!("Starting SidEx Wallet Terminal...");

    let cli = Cli::parse();

    // Leave raw mode before the panic message prints, so it stays readable
    // and the shell comes back usable.
    let default_panic_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        disable_raw_mode().ok();
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).ok();
        default_panic_hook(panic_info);
    }));

    let result = run_tui_app(cli).await;

    // Restore terminal state even when setup failed partway through
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).ok();

    result
}

async fn run_tui_app(cli: Cli) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(&cli)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal before returning
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        info!("App error: {err:?}");
    }

    res
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(sidex_wallet::config::TICK_RATE_MS);
    let mut last_update = Instant::now();
    let update_rate = Duration::from_millis(sidex_wallet::config::UPDATE_RATE_MS);
    let mut last_ui_update = Instant::now();
    let ui_update_rate = Duration::from_millis(sidex_wallet::config::UI_UPDATE_RATE_MS);

    loop {
        let timeout = tick_rate;

        if crossterm::event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if !app.handle_key_input(key.code)? {
                    return Ok(()); // Exit requested
                }
            }
        }

        // Force UI update at least once per second for the typing indicator
        // and transient badges
        let force_redraw = last_ui_update.elapsed() >= ui_update_rate;

        // Redraw immediately if needed for instant feedback or if it's been a second
        if app.needs_redraw || force_redraw {
            terminal.draw(|f| render_ui(f, app))?;
            app.needs_redraw = false;
            if force_redraw {
                last_ui_update = Instant::now();
            }
        }

        // Resolve simulated latency deadlines periodically, not every loop
        if last_update.elapsed() >= update_rate {
            app.update();
            last_update = Instant::now();
        }
    }
}
