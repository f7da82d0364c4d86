mod app;
mod charts;
mod domain;
mod input;
mod notifications;
mod quotes;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::FocusTimer;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "grove")]
#[command(about = "A calm, terminal-based focus timer that grows a forest while you work", long_about = None)]
struct Cli {
    /// Initial session length in minutes
    #[arg(short, long)]
    minutes: Option<u32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one motivational quote and exit
    Quote,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Quote) => {
            println!("{}", quotes::pick_quote(&mut rand::thread_rng()));
            Ok(())
        }
        None => {
            let minutes = match cli.minutes {
                Some(0) => {
                    anyhow::bail!("--minutes must be at least 1");
                }
                Some(m) => m,
                None => domain::timer::DEFAULT_DURATION_SECS / 60,
            };
            run_tui(minutes)
        }
    }
}

fn run_tui(minutes: u32) -> Result<()> {
    let mut app = AppState::new(FocusTimer::new(minutes));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print a small farewell summary
    if app.stats.sessions_completed > 0 {
        let view = app.stats.view();
        println!(
            "🌳 {} session(s), {} focused minutes, level: {}",
            app.stats.sessions_completed,
            app.stats.focused_minutes,
            view.level.name()
        );
    }

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let poll_rate = ticker::poll_duration();

    loop {
        // Check for midnight crossing - force restart
        if app.has_day_changed() && app.ui_mode != domain::UiMode::DayChanged {
            app.ui_mode = domain::UiMode::DayChanged;
        }

        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(poll_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    // If day changed, only allow quit
                    if app.ui_mode == domain::UiMode::DayChanged {
                        if key.code == event::KeyCode::Char('q') || key.code == event::KeyCode::Esc {
                            return Ok(());
                        }
                        continue; // Ignore all other keys
                    }

                    if input::handle_key(app, key) {
                        return Ok(());
                    }
                }
            }
        }

        // Advance the countdown and quote rotation
        app.tick();
    }
}
