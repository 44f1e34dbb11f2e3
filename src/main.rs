use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use trivia::audio::{AudioFeedback, SilentAudio, TerminalAudio};
use trivia::categories::find_category;
use trivia::config::{Command, Config, USAGE};
use trivia::core::constants::{LOG_DIR_NAME, LOG_FILE_NAME, TICK_INTERVAL_MS};
use trivia::build_info::version_line;
use trivia::utils::persistence::FileStore;
use trivia::{App, AppInput, GameState, GameStore};

fn main() -> anyhow::Result<()> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'trivia --help' for usage.");
            std::process::exit(1);
        }
    };

    match &config.command {
        Command::Version => {
            println!("{}", version_line());
            return Ok(());
        }
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        Command::Play(id) => {
            // Fail before logging or the terminal are set up
            if let Err(e) = find_category(id) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        _ => {}
    }

    let _log_guard = setup_logging(&config.data_dir)?;
    tracing::info!(data_dir = %config.data_dir.display(), "Starting {}", version_line());

    let backend = FileStore::new(&config.data_dir)
        .with_context(|| format!("cannot open data directory {}", config.data_dir.display()))?;
    let mut store = GameStore::open(Box::new(backend));

    match &config.command {
        Command::Stats => {
            print_stats(store.state());
            return Ok(());
        }
        Command::Reset => {
            store.reset();
            println!("Progress erased.");
            return Ok(());
        }
        _ => {}
    }

    let audio: Box<dyn AudioFeedback> = if config.muted {
        Box::new(SilentAudio::default())
    } else {
        Box::new(TerminalAudio::stdout())
    };
    let mut app = App::new(store, audio);

    if let Command::Play(id) = &config.command {
        app.open_category(id)?;
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    tracing::info!("Goodbye");
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    let tick = Duration::from_millis(TICK_INTERVAL_MS);

    while !app.should_quit {
        terminal.draw(|frame| trivia::ui::draw_app(frame, app))?;

        if event::poll(tick)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    app.handle_input(AppInput::from_key(key_event.code), Instant::now());
                }
            }
        }

        app.tick(Instant::now());
    }

    Ok(())
}

/// Log to `<data_dir>/logs/trivia.log`. The terminal belongs to the UI.
fn setup_logging(data_dir: &Path) -> anyhow::Result<WorkerGuard> {
    let log_dir = data_dir.join(LOG_DIR_NAME);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("cannot create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Ok(guard)
}

fn print_stats(state: &GameState) {
    let (unlocked, total) = trivia::achievements::unlock_progress(state);
    println!("Trivia Mania progress");
    println!("  Score:        {}", state.total_score);
    println!(
        "  Correct:      {}/{} ({}%)",
        state.correct_answers,
        state.questions_answered,
        state.accuracy_percent()
    );
    println!("  Streak:       {}", state.current_streak);
    println!(
        "  Mastered:     {}",
        if state.categories_completed.is_empty() {
            "none yet".to_string()
        } else {
            state.categories_completed.join(", ")
        }
    );
    println!("  Achievements: {}/{}", unlocked, total);
    for def in trivia::achievements::unlocked_defs(state) {
        println!("    {} {}", def.icon, def.name);
    }
}
