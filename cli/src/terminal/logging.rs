use std::io;

use colored::*;
use hello_common::config::Config;
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

pub struct HelloFormatter;

impl<S, N> FormatEvent<S, N> for HelloFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "{} ", level_symbol(*event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_symbol(level: Level) -> ColoredString {
    match level {
        Level::TRACE => "[ ]".dimmed(),
        Level::DEBUG => "[?]".blue(),
        Level::INFO => "[+]".green().bold(),
        Level::WARN => "[*]".yellow().bold(),
        Level::ERROR => "[-]".red().bold(),
    }
}

/// Installs the stderr logger. The filter comes from `cfg` only; the
/// environment is never consulted.
pub fn init_logging(cfg: &Config) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(cfg.log_level).into())
        .parse_lossy("");

    // A subscriber installed by an embedding program wins.
    let _ = tracing_subscriber::fmt()
        .event_format(HelloFormatter)
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
