use std::io::Write;

use env_logger::{Builder, Env, Target};
use log::SetLoggerError;

use crate::config::Config;

/// Installs the stderr logger. Stdout carries the MCP stream, so diagnostics
/// never go there.
pub fn init_logging(config: &Config) -> Result<(), SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or(config.log_filter.as_str()))
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {} - {}",
                buf.timestamp(),
                record.target(),
                record.level(),
                record.args()
            )
        })
        .try_init()
}
