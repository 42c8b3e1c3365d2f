pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod intersection;
pub mod logging;
pub mod matcher;
pub mod report;
pub mod window;

use tracing::{info, warn};

pub use cli::{Cli, ColorMode, cli_parse};
pub use config::{FilterConfig, Settings, load_config};
pub use error::SyslogFilterError;
pub use export::{ExportError, ExportedFiles, export_records};
pub use intersection::IntersectionSummary;
pub use matcher::{DEFAULT_PATTERN, LogRecord, Matcher, scan_log_file};
pub use window::{TimePoint, TimeWindow, TimeWindowError};

/// Result of the matching and aggregation stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub records: Vec<LogRecord>,
    pub summary: IntersectionSummary,
}

/// Run the matcher, time-window gate and aggregation over the configured
/// log file.
///
/// The pattern and window are validated before the file is opened.
pub fn filter_log(settings: &Settings) -> Result<FilterOutcome, SyslogFilterError> {
    let matcher = Matcher::new(&settings.regexp)?;
    let window = settings
        .time_window
        .as_deref()
        .map(str::parse::<TimeWindow>)
        .transpose()?;

    if let Some(window) = &window {
        if window.is_cross_month() {
            warn!(
                %window,
                "Time window spans two months; no timestamp can match it"
            );
        }
    }

    info!(
        path = %settings.log_file.display(),
        pattern = matcher.as_str(),
        "Filtering log file"
    );
    let records = scan_log_file(&settings.log_file, &matcher, window.as_ref())?;
    let summary = IntersectionSummary::from_records(&records);

    Ok(FilterOutcome { records, summary })
}

pub fn run() -> Result<(), SyslogFilterError> {
    let cli = cli_parse();
    cli.color.apply();
    logging::init(cli.verbose, cli.quiet);

    let config = load_config(cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, config);

    let outcome = filter_log(&settings)?;

    if !cli.quiet {
        print!("{}", report::format_records(&outcome.records));
    }
    print!(
        "{}",
        report::format_summary(&outcome.records, &outcome.summary)
    );

    if let Some(base) = &settings.output_file {
        let files = export_records(base, &outcome.records)?;
        print!("{}", report::format_export(&files));
    }

    Ok(())
}
