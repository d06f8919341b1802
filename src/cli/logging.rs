//! Logger construction
//!
//! Builds immutable `tracing::Dispatch` logger values from logging
//! configuration. The process swaps between exactly two instances: a
//! bootstrap logger built from `LogConfig::bootstrap()` and the one built
//! from the resolved configuration. Construction never fails; invalid
//! inputs degrade to safe defaults so logging can never block startup.

use std::fmt;
use std::io;
use std::str::FromStr;

use chrono::{SecondsFormat, Utc};
use tracing::field::{Field, Visit};
use tracing::{Dispatch, Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;

use crate::cli::version;
use crate::config::{APP_NAME, LogConfig};

/// Build the process logger from logging configuration, writing to stdout.
pub fn build_logger(cfg: &LogConfig) -> Dispatch {
    logger_with_writer(cfg, io::stdout)
}

/// Build a logger writing to the supplied writer. Split out from
/// [`build_logger`] so tests can capture records.
pub fn logger_with_writer<W>(cfg: &LogConfig, writer: W) -> Dispatch
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::fmt()
        .event_format(RecordFormat {
            console: cfg.console,
            version: version::VERSION,
            app: APP_NAME,
        })
        .with_writer(writer)
        .with_max_level(effective_level(cfg))
        .finish();
    Dispatch::new(subscriber)
}

/// Resolve the effective severity threshold.
///
/// Unrecognized level names fall back to info rather than erroring, and
/// `verbose` forces debug regardless of the configured level.
pub fn effective_level(cfg: &LogConfig) -> Level {
    let level = Level::from_str(&cfg.level).unwrap_or(Level::INFO);
    if cfg.verbose { Level::DEBUG } else { level }
}

fn severity_name(level: Level) -> &'static str {
    if level == Level::TRACE {
        "trace"
    } else if level == Level::DEBUG {
        "debug"
    } else if level == Level::INFO {
        "info"
    } else if level == Level::WARN {
        "warn"
    } else {
        "error"
    }
}

/// Event formatter producing either a human-readable console line or a
/// line-oriented JSON record. The level key is named `severity` for the
/// downstream log aggregator, and every record carries the build version
/// and application name.
struct RecordFormat {
    console: bool,
    version: &'static str,
    app: &'static str,
}

impl<S, N> FormatEvent<S, N> for RecordFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut fields = FieldCollector::default();
        event.record(&mut fields);

        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let severity = severity_name(*event.metadata().level());

        if self.console {
            write!(
                writer,
                "{} {:>5} {}",
                timestamp,
                severity.to_uppercase(),
                fields.message
            )?;
            for (key, value) in &fields.extra {
                write!(writer, " {}={}", key, value)?;
            }
            writeln!(writer, " version={} app={}", self.version, self.app)
        } else {
            let mut record = serde_json::Map::new();
            record.insert("timestamp".to_string(), timestamp.into());
            record.insert("severity".to_string(), severity.into());
            record.insert("version".to_string(), self.version.into());
            record.insert("app".to_string(), self.app.into());
            record.insert("message".to_string(), fields.message.clone().into());
            for (key, value) in fields.extra {
                record.insert(key, value);
            }
            writeln!(writer, "{}", serde_json::Value::Object(record))
        }
    }
}

/// Collects event fields, separating the message from the rest.
#[derive(Default)]
struct FieldCollector {
    message: String,
    extra: Vec<(String, serde_json::Value)>,
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.extra.push((field.name().to_string(), value.into()));
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.extra.push((field.name().to_string(), value.into()));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.extra.push((field.name().to_string(), value.into()));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.extra.push((field.name().to_string(), value.into()));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.extra.push((field.name().to_string(), value.into()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.extra.push((
                field.name().to_string(),
                serde_json::Value::String(format!("{:?}", value)),
            ));
        }
    }
}
