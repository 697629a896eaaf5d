use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use scrollframe::app::{App, HOST_HEIGHT, HOST_WIDTH};
use scrollframe::config;
use scrollframe::error::ScrollFrameError;

/// Two scrollable frames side by side with hover-gated wheel scrolling
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Scrollable frame demo: two frames, wheel scrolling follows the pointer"
)]
struct Args {
    /// Number of labels in the left frame
    #[arg(long, default_value_t = 20)]
    labels: usize,

    /// Number of buttons in the right frame
    #[arg(long, default_value_t = 30)]
    buttons: usize,

    /// Config file (defaults to ~/.config/scrollframe/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Writes to /tmp/scrollframe-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/scrollframe-debug.log")?;

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

        log::debug!("=== SCROLLFRAME DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    let config_result = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };

    validate_terminal_size()?;

    let terminal = init_terminal()?;

    let mut app = App::new(&config_result.config, args.labels, args.buttons);
    app.status = config_result.warning;

    let result = run(terminal, app);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== SCROLLFRAME DEBUG SESSION ENDED ===");

    Ok(())
}

/// The host window has a fixed size; refuse to start in a smaller terminal
fn validate_terminal_size() -> Result<(), ScrollFrameError> {
    let (width, height) = terminal::size()?;
    if width < HOST_WIDTH || height < HOST_HEIGHT {
        return Err(ScrollFrameError::TerminalTooSmall {
            width,
            height,
            required_width: HOST_WIDTH,
            required_height: HOST_HEIGHT,
        });
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
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
