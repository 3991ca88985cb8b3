//! tracing subscriber setup.
//!
//! Diagnostics go to stderr so stdout stays reserved for the export report.
//! `PATCH_EXPORT_LOG` takes `EnvFilter` directives (default: warn) and
//! `PATCH_EXPORT_LOG_FORMAT=json` switches to one JSON object per event.

use tracing_subscriber::EnvFilter;

const LOG: &str = "PATCH_EXPORT_LOG";
const LOG_FORMAT: &str = "PATCH_EXPORT_LOG_FORMAT";
const DEFAULT_DIRECTIVES: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

/// Install the global subscriber. A second call is a no-op.
pub fn init() {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false);

    // try_init fails only when a subscriber is already installed.
    let _ = match log_format() {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_new(directives()).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

fn directives() -> String {
    non_empty_var(LOG).unwrap_or_else(|| DEFAULT_DIRECTIVES.to_string())
}

fn log_format() -> LogFormat {
    match non_empty_var(LOG_FORMAT).as_deref() {
        Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
        _ => LogFormat::Text,
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn directives_default_to_warn() {
        temp_env::with_var(LOG, None::<&str>, || {
            assert_eq!(directives(), "warn");
        });
    }

    #[test]
    fn directives_treat_empty_as_unset() {
        temp_env::with_var(LOG, Some(""), || {
            assert_eq!(directives(), "warn");
        });
    }

    #[test]
    fn directives_read_env() {
        temp_env::with_var(LOG, Some("patch_export=debug"), || {
            assert_eq!(directives(), "patch_export=debug");
        });
    }

    #[rstest]
    #[case::unset(None, LogFormat::Text)]
    #[case::json(Some("json"), LogFormat::Json)]
    #[case::json_uppercase(Some("JSON"), LogFormat::Json)]
    #[case::unknown(Some("pretty"), LogFormat::Text)]
    fn test_log_format(#[case] value: Option<&str>, #[case] expected: LogFormat) {
        temp_env::with_var(LOG_FORMAT, value, || {
            assert_eq!(log_format(), expected);
        });
    }

    #[test]
    fn init_twice_does_not_panic() {
        init();
        init();
    }
}
