//! BLOCKFALL - falling blocks in the terminal

use blockfall::game::{Game, GameState};
use blockfall::input::{Input, InputHandler};
use blockfall::settings::Settings;
use blockfall::ui::{self, ControlLabels};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self, stdout},
    path::PathBuf,
    time::{Duration, Instant},
};
use tracing_subscriber::EnvFilter;

/// Target frame rate
const TARGET_FPS: u64 = 60;
const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / TARGET_FPS);

/// Get the blockfall temp directory, creating it if needed
fn blockfall_temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join("blockfall");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

fn main() -> io::Result<()> {
    // Generate session ID for this instance
    let session_id: u32 = rand::random();

    let log_dir = blockfall_temp_dir();
    let log_file = format!("{:08x}.log", session_id);

    // Setup tracing to log file so the terminal UI stays clean
    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("blockfall=debug")),
        )
        .with_ansi(false)
        .init();

    tracing::info!(
        "BLOCKFALL starting up, session={:08x}, log={}",
        session_id,
        log_dir.join(&log_file).display()
    );

    let settings = Settings::load_or_create();
    let config = settings.gameplay.session_config();
    let game = match settings.gameplay.seed {
        Some(seed) => Game::with_seed(config, seed),
        None => Game::new(config),
    }
    .map_err(|e| {
        tracing::error!("invalid gameplay settings: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;
    let input = InputHandler::from_settings(&settings);
    let controls = ControlLabels::from_bindings(&settings.keys);

    // Setup terminal
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run app and capture result
    let result = run_app(&mut terminal, game, input, &controls);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;

    if let Ok(game) = &result {
        let score = game.score();
        println!("\nThanks for playing BLOCKFALL!");
        println!("Final Score: {}", score.points);
        println!("Lines: {} | Pieces: {}", score.lines, score.pieces);
        tracing::info!(points = score.points, "session ended");
    }

    result.map(|_| ())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut game: Game,
    mut input: InputHandler,
    controls: &ControlLabels,
) -> io::Result<Game> {
    loop {
        // Render
        terminal.draw(|frame| ui::render_game(frame, &game.snapshot(), controls))?;

        // Handle input
        if event::poll(FRAME_DURATION)? {
            if let Event::Key(key) = event::read()? {
                match input.handle_key(key, Instant::now()) {
                    Some(Input::Quit) => return Ok(game),
                    Some(Input::Command(command)) => {
                        game.process_command(command);
                    }
                    None => {}
                }
            }
        }

        let now = Instant::now();
        if let Some(Input::Command(command)) = input.update(now) {
            game.process_command(command);
        }

        if game.state() == GameState::Playing {
            game.update(now);
        }
    }
}
