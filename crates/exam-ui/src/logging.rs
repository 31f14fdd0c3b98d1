//! Forwarding of `tracing` events to the browser console
//!
//! [`install`] registers a [`ConsoleLayer`] as the global subscriber so every
//! `tracing` event at or above the configured level ends up in the devtools
//! console, on the console method matching its level.

use std::fmt;

use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;
use wasm_bindgen::JsValue;

use crate::config::LogLevel;

/// Destination for formatted log lines
pub trait ConsoleSink: Send + Sync + 'static {
    fn write(&self, level: Level, line: &str);
}

/// The devtools console
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConsole;

impl ConsoleSink for BrowserConsole {
    fn write(&self, level: Level, line: &str) {
        let line = JsValue::from_str(line);
        match level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            Level::DEBUG => web_sys::console::debug_1(&line),
            Level::TRACE => web_sys::console::log_1(&line),
        }
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: Vec<String>,
}

impl LineVisitor {
    fn finish(self, target: &str) -> String {
        let mut line = format!("{target}: {}", self.message);
        for field in self.fields {
            line.push(' ');
            line.push_str(&field);
        }
        line
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={value}", field.name()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push(format!("{}={value:?}", field.name()));
        }
    }
}

/// `tracing` layer writing one line per event to a [`ConsoleSink`]
#[derive(Debug, Clone)]
pub struct ConsoleLayer<W = BrowserConsole> {
    sink: W,
    max_level: LevelFilter,
}

impl<W: ConsoleSink> ConsoleLayer<W> {
    pub fn new(sink: W, max_level: impl Into<LevelFilter>) -> Self {
        Self {
            sink,
            max_level: max_level.into(),
        }
    }
}

impl<S, W> Layer<S> for ConsoleLayer<W>
where
    S: Subscriber,
    W: ConsoleSink,
{
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        *metadata.level() <= self.max_level
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);
        self.sink
            .write(*metadata.level(), &visitor.finish(metadata.target()));
    }
}

/// Route `tracing` output to the browser console
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one is kept.
pub fn install(level: LogLevel) -> bool {
    let subscriber = Registry::default().with(ConsoleLayer::new(BrowserConsole, level));
    tracing::subscriber::set_global_default(subscriber).is_ok()
}
