use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Filter a syslog-style file by regular expression and time window,
/// optionally exporting the matches as .csv and .html
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the log file [default: /var/log/syslog]
    #[arg(short = 'l', long, env = "SYSLOG_FILTER_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Regular expression with 3 capture groups: timestamp, user, message
    /// [default: (.*:..:..) (\S*) (.*(ERROR|error).*)]
    #[arg(short = 'r', long, env = "SYSLOG_FILTER_REGEXP")]
    pub regexp: Option<String>,

    /// Path to the output file without extension; writes <path>.csv and <path>.html
    #[arg(short = 'o', long, env = "SYSLOG_FILTER_OUTPUT_FILE")]
    pub output_file: Option<PathBuf>,

    /// Time window in format Mon.D.Time-Mon.D.Time (Jun.4.07:25:59-Jun.5.15:18:00)
    #[arg(short = 't', long, env = "SYSLOG_FILTER_TIME_WINDOW")]
    pub time_window: Option<String>,

    /// TOML file providing defaults for the options above
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Control color output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Don't echo matched lines; only print the summary
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

/// Color mode for console output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn apply(self) {
        match self {
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
            ColorMode::Auto => {}
        }
    }
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
