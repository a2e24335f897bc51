// src/config/mod.rs
use std::path::PathBuf;
use std::str::FromStr;

use crossterm::style::{Color, ContentStyle};

/// Environment variable naming a log file, used when `--log-file` is absent.
pub const LOG_ENV: &str = "LOGBROWSER_LOG";

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub file: PathBuf,
    pub theme: Theme,
    pub log_file: Option<PathBuf>,
    pub log_level: log::LevelFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub foreground: ColorDef,
    pub background: ColorDef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDef {
    Named(NamedColor),
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            foreground: ColorDef::Named(NamedColor::Default),
            background: ColorDef::Named(NamedColor::Default),
        }
    }
}

impl Theme {
    /// Style applied to every cell of the text area
    pub fn style(&self) -> ContentStyle {
        ContentStyle {
            foreground_color: Some(self.foreground.to_crossterm_color()),
            background_color: Some(self.background.to_crossterm_color()),
            ..ContentStyle::default()
        }
    }
}

impl ColorDef {
    pub fn to_crossterm_color(&self) -> Color {
        match self {
            ColorDef::Named(named) => named.to_crossterm_color(),
            ColorDef::Rgb { r, g, b } => Color::Rgb { r: *r, g: *g, b: *b },
        }
    }
}

impl NamedColor {
    pub fn to_crossterm_color(&self) -> Color {
        match self {
            NamedColor::Default => Color::Reset,
            NamedColor::Black => Color::Black,
            NamedColor::Red => Color::DarkRed,
            NamedColor::Green => Color::DarkGreen,
            NamedColor::Yellow => Color::DarkYellow,
            NamedColor::Blue => Color::DarkBlue,
            NamedColor::Magenta => Color::DarkMagenta,
            NamedColor::Cyan => Color::DarkCyan,
            NamedColor::White => Color::Grey,
            NamedColor::BrightBlack => Color::DarkGrey,
            NamedColor::BrightRed => Color::Red,
            NamedColor::BrightGreen => Color::Green,
            NamedColor::BrightYellow => Color::Yellow,
            NamedColor::BrightBlue => Color::Blue,
            NamedColor::BrightMagenta => Color::Magenta,
            NamedColor::BrightCyan => Color::Cyan,
            NamedColor::BrightWhite => Color::White,
        }
    }
}

impl FromStr for NamedColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let named = match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "default" | "reset" => NamedColor::Default,
            "black" => NamedColor::Black,
            "red" => NamedColor::Red,
            "green" => NamedColor::Green,
            "yellow" => NamedColor::Yellow,
            "blue" => NamedColor::Blue,
            "magenta" => NamedColor::Magenta,
            "cyan" => NamedColor::Cyan,
            "white" => NamedColor::White,
            "brightblack" | "grey" | "gray" => NamedColor::BrightBlack,
            "brightred" => NamedColor::BrightRed,
            "brightgreen" => NamedColor::BrightGreen,
            "brightyellow" => NamedColor::BrightYellow,
            "brightblue" => NamedColor::BrightBlue,
            "brightmagenta" => NamedColor::BrightMagenta,
            "brightcyan" => NamedColor::BrightCyan,
            "brightwhite" => NamedColor::BrightWhite,
            _ => return Err(ConfigError::InvalidColor(s.to_string())),
        };
        Ok(named)
    }
}

/// Accepts a color name (`red`, `bright-blue`, `default`) or `#rrggbb`.
impl FromStr for ColorDef {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(hex) = s.strip_prefix('#') else {
            return s.parse().map(ColorDef::Named);
        };

        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ConfigError::InvalidColor(s.to_string()))
        };

        Ok(ColorDef::Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl ViewerConfig {
    pub fn new(file: PathBuf) -> Self {
        Self {
            file,
            theme: Theme::default(),
            log_file: None,
            log_level: log::LevelFilter::Info,
        }
    }

    /// Fill unset options from the environment through `lookup`.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.log_file.is_none() {
            self.log_file = lookup(LOG_ENV)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from);
        }
        self
    }

    /// Install the file logger when a destination is configured.
    ///
    /// Nothing is installed otherwise since the terminal owns the screen
    /// and log lines on stderr would corrupt the frame.
    pub fn init_logging(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.log_file {
            simple_logging::log_to_file(path, self.log_level).map_err(|source| {
                ConfigError::Logging {
                    path: path.clone(),
                    source,
                }
            })?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid color '{0}' (expected a color name or #rrggbb)")]
    InvalidColor(String),

    #[error("could not open log file {path}: {source}")]
    Logging {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
