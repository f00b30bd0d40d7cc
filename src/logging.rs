//! Tracing layer that writes to the browser console.
//!
//! Events are flattened into one line each,
//! `HH:MM:SS.mmm LEVEL target: message key=value ...`, and routed to the
//! console method matching their level so the devtools filters work.

use std::fmt::Write as FmtWrite;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};
use wasm_bindgen::JsValue;

/// A tracing Layer that forwards events to `console.*`.
pub struct ConsoleLayer;

impl<S> Layer<S> for ConsoleLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = ConsoleVisitor::default();
        event.record(&mut visitor);

        let spans = ctx
            .event_scope(event)
            .map(|scope| {
                scope
                    .from_root()
                    .map(|span| span.name())
                    .collect::<Vec<_>>()
                    .join(" > ")
            })
            .unwrap_or_default();

        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(
            &timestamp,
            metadata.level(),
            metadata.target(),
            &spans,
            &visitor,
        );
        let line = JsValue::from_str(&line);

        match *metadata.level() {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }
}

/// Visitor that extracts fields from tracing events.
#[derive(Default)]
struct ConsoleVisitor {
    message: String,
    fields: Vec<(&'static str, String)>,
}

impl Visit for ConsoleVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);

        if field.name() == "message" {
            self.message = buf;
        } else {
            self.fields.push((field.name(), buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push((field.name(), value.to_string()));
        }
    }
}

fn format_line(
    timestamp: &str,
    level: &Level,
    target: &str,
    spans: &str,
    visitor: &ConsoleVisitor,
) -> String {
    let mut line = format!("{} {:>5} {}", timestamp, level, target);
    if !spans.is_empty() {
        let _ = write!(&mut line, " [{}]", spans);
    }
    let _ = write!(&mut line, ": {}", visitor.message);
    for (name, value) in &visitor.fields {
        let _ = write!(&mut line, " {}={}", name, value);
    }
    line
}

/// Install the console subscriber. An unparsable filter falls back to
/// `info`; a second call is a no-op.
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(ConsoleLayer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_includes_fields_and_spans() {
        let visitor = ConsoleVisitor {
            message: "theme activated".to_string(),
            fields: vec![("index", "2".to_string()), ("name", "Emerald Green".to_string())],
        };
        let line = format_line(
            "12:00:00.000",
            &Level::DEBUG,
            "folio_core::theme",
            "mount",
            &visitor,
        );
        assert_eq!(
            line,
            "12:00:00.000 DEBUG folio_core::theme [mount]: theme activated index=2 name=Emerald Green"
        );
    }

    #[test]
    fn line_without_spans() {
        let visitor = ConsoleVisitor {
            message: "disabled".to_string(),
            fields: Vec::new(),
        };
        let line = format_line("t", &Level::WARN, "folio_web", "", &visitor);
        assert_eq!(line, "t  WARN folio_web: disabled");
    }
}
