//! Recording layer for capturing spans and events in tests.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Layer installed during tests to capture closed spans and emitted events.
///
/// Clones share one buffer, so a test keeps a clone and hands the other to
/// the subscriber.
///
/// # Examples
/// ```
/// use tracing_subscriber::layer::SubscriberExt;
/// use tubegraph_test_support::recording::RecordingLayer;
///
/// let layer = RecordingLayer::default();
/// let subscriber = tracing_subscriber::registry().with(layer.clone());
/// tracing::subscriber::with_default(subscriber, || {
///     let _span = tracing::info_span!("demo", answer = 42).entered();
///     tracing::info!(step = "one", "working");
/// });
/// assert_eq!(layer.span_named("demo").expect("span closed").field("answer"), Some("42"));
/// assert_eq!(layer.events().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct RecordingLayer {
    records: Arc<Mutex<Records>>,
}

#[derive(Default)]
struct Records {
    spans: Vec<SpanRecord>,
    events: Vec<EventRecord>,
}

impl RecordingLayer {
    fn records(&self) -> MutexGuard<'_, Records> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the closed spans in completion order.
    #[must_use]
    pub fn spans(&self) -> Vec<SpanRecord> {
        self.records().spans.clone()
    }

    /// Returns the first closed span called `name`.
    #[must_use]
    pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
        self.records()
            .spans
            .iter()
            .find(|span| span.name == name)
            .cloned()
    }

    /// Returns the emitted events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<EventRecord> {
        self.records().events.clone()
    }

    /// Returns the events emitted at exactly `level`.
    #[must_use]
    pub fn events_at(&self, level: Level) -> Vec<EventRecord> {
        self.records()
            .events
            .iter()
            .filter(|event| event.level == level)
            .cloned()
            .collect()
    }
}

/// A closed span with the fields recorded against it over its lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanRecord {
    /// Span name from the callsite metadata.
    pub name: String,
    /// Field values rendered as strings.
    pub fields: HashMap<String, String>,
}

impl SpanRecord {
    /// Returns the rendered value of `field`, if it was recorded.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

/// An emitted event with its level, target, and fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Event level.
    pub level: Level,
    /// Event target, normally the emitting module path.
    pub target: String,
    /// Field values rendered as strings; the message lives under `message`.
    pub fields: HashMap<String, String>,
}

impl EventRecord {
    /// Returns the rendered value of `field`, if it was recorded.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Returns the event message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.field("message")
    }
}

struct PendingSpan(SpanRecord);

impl<S> Layer<S> for RecordingLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut record = SpanRecord {
            name: attrs.metadata().name().to_owned(),
            fields: HashMap::new(),
        };
        attrs.record(&mut FieldRecorder(&mut record.fields));
        span.extensions_mut().insert(PendingSpan(record));
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        if let Some(PendingSpan(record)) = span.extensions_mut().get_mut::<PendingSpan>() {
            values.record(&mut FieldRecorder(&mut record.fields));
        }
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        if let Some(PendingSpan(record)) = span.extensions_mut().remove::<PendingSpan>() {
            self.records().spans.push(record);
        }
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut FieldRecorder(&mut fields));
        self.records().events.push(EventRecord {
            level: *event.metadata().level(),
            target: event.metadata().target().to_owned(),
            fields,
        });
    }
}

struct FieldRecorder<'a>(&'a mut HashMap<String, String>);

impl Visit for FieldRecorder<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_owned(), format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.0.insert(field.name().to_owned(), value.to_string());
    }
}
