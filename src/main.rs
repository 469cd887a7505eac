use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::{Path, PathBuf};

use scrollarea::app::App;
use scrollarea::config;
use scrollarea::error::ViewerError;
use scrollarea::input::LineLoader;

/// Scrollable terminal viewer for files and streams
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Scrollable terminal viewer for files and streams"
)]
struct Args {
    /// Input file (if not provided, reads from stdin)
    input: Option<PathBuf>,

    /// Keep reading as the file grows, like `tail -f`
    #[arg(short, long)]
    follow: bool,

    /// Keep the newest line in view as content arrives
    #[arg(long)]
    autoscroll: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/scrollarea-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/scrollarea-debug.log")
            .expect("Failed to open /tmp/scrollarea-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== SCROLLAREA DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let mut config_result = config::load_config();

    let args = Args::parse();

    if let Some(path) = &args.input {
        validate_input_exists(path)?;
    }
    if args.autoscroll {
        config_result.config.viewport.autoscroll = true;
    }

    let terminal = init_terminal()?;

    // Deferred loading prevents blocking on large files/stdin
    let (loader, source, follow) = match args.input {
        Some(path) => {
            let source = path.display().to_string();
            (LineLoader::spawn_file(path, args.follow), source, args.follow)
        }
        // Following only makes sense for files; stdin is read until EOF anyway
        None => (LineLoader::spawn_stdin(), "-".to_string(), false),
    };

    let app = App::new(loader, source, config_result, follow);
    let result = run(terminal, app);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== SCROLLAREA DEBUG SESSION ENDED ===");

    Ok(())
}

/// Fail before touching the terminal so the message stays readable
fn validate_input_exists(path: &Path) -> Result<(), ViewerError> {
    if !path.exists() {
        return Err(ViewerError::InputNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        // Poll before render to load data from background thread
        app.poll_loader();

        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
