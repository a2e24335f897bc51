// src/main.rs
use std::{io, path::PathBuf, process::ExitCode};

use clap::{error::ErrorKind, Parser, ValueEnum};
use crossterm::{event::Event, style::ContentStyle};

mod config;
mod editor;
mod error;
mod input;
mod ui;

use config::{ColorDef, Theme, ViewerConfig};
use editor::{Flow, Viewer};
use error::{Result, ViewerError};
use input::translate_key;
use ui::{compose, install_panic_hook, CrosstermScreen, Screen};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to view
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Write logs to this file [env: LOGBROWSER_LOG]
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Verbosity of the log file
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Text color, a name such as `green` or `#rrggbb`
    #[arg(long, value_name = "COLOR", default_value = "default")]
    fg: ColorDef,

    /// Background color, a name such as `black` or `#rrggbb`
    #[arg(long, value_name = "COLOR", default_value = "default")]
    bg: ColorDef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Args {
    fn into_config(self) -> ViewerConfig {
        let mut config = ViewerConfig::new(self.file);
        config.theme = Theme {
            foreground: self.fg,
            background: self.bg,
        };
        config.log_file = self.log_file;
        config.log_level = self.log_level.into();
        config
    }
}

fn main() -> ExitCode {
    // Parse command line arguments
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            println!("{}", err);
            return ExitCode::from(1);
        }
    };

    let config = args.into_config().with_env(|key| std::env::var(key).ok());

    // Initialize logging
    if let Err(e) = config.init_logging() {
        eprintln!("Error: {}", ViewerError::from(e));
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ ViewerError::Load { .. }) => {
            log::error!("{}", err);
            eprintln!("Couldn't read file: {}", err);
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &ViewerConfig) -> Result<()> {
    // The file is read before the terminal is touched so a bad path
    // leaves the screen alone.
    let mut viewer = Viewer::open_file(&config.file)?;
    log::info!("viewing {}", viewer.file_info());

    install_panic_hook();
    let mut screen = CrosstermScreen::enter()?;

    let result = run_event_loop(&mut viewer, &mut screen, config.theme.style());
    let restored = screen.leave();

    result?;
    restored?;
    if !viewer.marks.is_empty() {
        log::info!("exiting with {} mark(s) set", viewer.marks.len());
    }
    Ok(())
}

/// Draw, wait for one event, apply it, repeat until a quit command.
fn run_event_loop<S: Screen>(viewer: &mut Viewer, screen: &mut S, style: ContentStyle) -> io::Result<()> {
    let mut resync = true;

    loop {
        let frame = compose(&viewer.buffer, viewer.offset(), screen.size()?, style);
        screen.present(&frame, resync)?;
        resync = false;

        match screen.read_event()? {
            Event::Key(key) => {
                let Some(command) = translate_key(key) else {
                    continue;
                };
                match viewer.dispatch(command, screen.size()?) {
                    Flow::Quit => break,
                    Flow::Redraw => resync = true,
                    Flow::Continue => {}
                }
            }
            // Offsets are left as they are; only the next motion re-clamps
            Event::Resize(width, height) => {
                log::debug!("resized to {}x{}", width, height);
                resync = true;
            }
            _ => {}
        }
    }

    Ok(())
}
