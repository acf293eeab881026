//! Diagnostic logging to stderr.
//!
//! Off unless `IMPLGEN_LOG` holds a filter (e.g. `debug` or
//! `implgen_lib=trace`). `IMPLGEN_LOG_STYLE=full` also logs span
//! creation and close.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::format::FmtSpan;

const FILTER_VAR: &str = "IMPLGEN_LOG";

pub fn init() {
    let value = std::env::var(FILTER_VAR).ok();
    let filter = match parse_filter(value.as_deref()) {
        Ok(Some(filter)) => filter,
        Ok(None) => return,
        Err(err) => {
            eprintln!("warning: ignoring invalid {FILTER_VAR} filter: {err}");
            return;
        }
    };

    let style = std::env::var("IMPLGEN_LOG_STYLE").unwrap_or_default();
    let spans = if style == "full" {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_span_events(spans)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("tracing initialized");
}

/// `None` when the variable is unset.
pub(crate) fn parse_filter(value: Option<&str>) -> Result<Option<EnvFilter>, ParseError> {
    value.map(EnvFilter::try_new).transpose()
}
