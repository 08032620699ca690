//! Print sinks: where admitted messages end up.

use std::io::{self, Write};
use std::sync::Mutex;

use colored::{Color, Colorize};

use crate::core::facade::DEFAULT_ASSERT_MESSAGE;
use crate::core::record::{SceneObject, Severity};

pub trait PrintSink: Send + Sync {
    fn print(&self, severity: Severity, message: &str, context: Option<&dyn SceneObject>);
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::TrueColor { r: 190, g: 190, b: 200 },
        Severity::Warning => Color::TrueColor { r: 255, g: 240, b: 0 },
        Severity::Error => Color::TrueColor { r: 255, g: 60, b: 60 },
        Severity::Assert => Color::TrueColor { r: 225, g: 0, b: 180 },
    }
}

/// Timestamped lines on stderr.
#[derive(Clone, Debug)]
pub struct ConsoleSink {
    color: bool,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self { color: true }
    }
}

impl ConsoleSink {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn render(&self, severity: Severity, message: &str, context: Option<&dyn SceneObject>) -> String {
        let stamp = chrono::Local::now().format("%H:%M:%S");
        let tag = format!("{:<7}", severity.as_str());
        let suffix = context.map(|c| format!(" ({})", c.name())).unwrap_or_default();
        if self.color {
            format!(
                "{} {} {}{}",
                stamp.to_string().dimmed(),
                tag.color(severity_color(severity)).bold(),
                message,
                suffix.dimmed()
            )
        } else {
            format!("{stamp} {tag} {message}{suffix}")
        }
    }
}

impl PrintSink for ConsoleSink {
    fn print(&self, severity: Severity, message: &str, context: Option<&dyn SceneObject>) {
        let line = self.render(severity, message, context);
        // Output errors are ignored; logging must not disturb the caller.
        let _ = writeln!(io::stderr().lock(), "{line}");
    }
}

/// Forwards to whatever `log` implementation the host installed.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl LogSink {
    pub fn level(severity: Severity) -> log::Level {
        match severity {
            Severity::Info => log::Level::Info,
            Severity::Warning => log::Level::Warn,
            Severity::Error | Severity::Assert => log::Level::Error,
        }
    }

    /// Asserts get an `assertion failed:` prefix unless the message already says so.
    pub fn line(severity: Severity, message: &str, context: Option<&dyn SceneObject>) -> String {
        let mut line = match severity {
            Severity::Assert if !message.ends_with(DEFAULT_ASSERT_MESSAGE) => {
                format!("{DEFAULT_ASSERT_MESSAGE}: {message}")
            }
            _ => message.to_string(),
        };
        if let Some(ctx) = context {
            line.push_str(&format!(" ({})", ctx.name()));
        }
        line
    }
}

impl PrintSink for LogSink {
    fn print(&self, severity: Severity, message: &str, context: Option<&dyn SceneObject>) {
        let line = Self::line(severity, message, context);
        log::log!(target: "cutedebug", Self::level(severity), "{line}");
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub severity: Severity,
    pub message: String,
    pub context: Option<String>,
}

/// Keeps everything it receives; used by tests and tooling.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.message).collect()
    }

    pub fn take(&self) -> Vec<Record> {
        std::mem::take(&mut *self.records.lock().unwrap_or_else(|p| p.into_inner()))
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap_or_else(|p| p.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PrintSink for MemorySink {
    fn print(&self, severity: Severity, message: &str, context: Option<&dyn SceneObject>) {
        let record = Record {
            severity,
            message: message.to_string(),
            context: context.map(|c| c.name().to_string()),
        };
        self.records.lock().unwrap_or_else(|p| p.into_inner()).push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::Named;

    #[test]
    fn plain_console_line_has_tag_message_and_context() {
        let sink = ConsoleSink::new(false);
        let player = Named::new("Player");
        let line = sink.render(Severity::Warning, "[alice] low hp", Some(&player));
        assert!(line.ends_with(" warning [alice] low hp (Player)"), "{line}");
    }

    #[test]
    fn memory_sink_records_in_order() {
        let sink = MemorySink::new();
        sink.print(Severity::Info, "one", None);
        sink.print(Severity::Error, "two", Some(&Named::new("Door")));
        let recs = sink.take();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[1].context.as_deref(), Some("Door"));
        assert!(sink.is_empty());
    }

    #[test]
    fn log_line_does_not_repeat_default_assert_message() {
        assert_eq!(LogSink::line(Severity::Assert, "assertion failed", None), "assertion failed");
        assert_eq!(LogSink::line(Severity::Assert, "[alice] assertion failed", None), "[alice] assertion failed");
        assert_eq!(LogSink::line(Severity::Assert, "hp was -1", None), "assertion failed: hp was -1");
        let door = Named::new("Door");
        assert_eq!(LogSink::line(Severity::Info, "stuck", Some(&door)), "stuck (Door)");
    }

    #[test]
    fn assert_maps_to_error_level() {
        assert_eq!(LogSink::level(Severity::Assert), log::Level::Error);
        assert_eq!(LogSink::level(Severity::Warning), log::Level::Warn);
    }
}
