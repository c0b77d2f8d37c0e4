use std::{env, str::FromStr};

use tracing::Level;
use tracing_subscriber::{
    fmt::writer::MakeWriterExt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Configure tracing with tracing_subscriber.
pub fn configure_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout.with_max_level(parse_level(log_level))),
        )
        .init();
}

/// Parses a log level, falling back to `INFO` for unknown values.
pub fn parse_level(log_level: &str) -> Level {
    Level::from_str(log_level).unwrap_or(Level::INFO)
}

/// Value of env variable `s`, or `default` when unset or not unicode.
pub fn get_env_var_or(s: &str, default: &str) -> String {
    env::var(s).unwrap_or_else(|_| default.to_owned())
}
