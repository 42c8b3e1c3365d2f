//! Diagnostic logging on stderr
//!
//! `RUST_LOG` wins when set. Otherwise the level follows the command line:
//! warn by default, info with `-v`, debug with `-vv`, trace beyond that,
//! and error only with `-q`.

use tracing_subscriber::EnvFilter;

fn level_for(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init(verbosity: u8, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level_for(verbosity, quiet))
    };

    // try_init: a subscriber may already be installed (tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
