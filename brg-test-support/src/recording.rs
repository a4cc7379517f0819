//! Recording layer for capturing spans and events in tests.
//!
//! Install [`RecordingLayer`] on a registry (or call [`record`]) and assert
//! on the span names, event messages, and structured fields afterwards.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;

/// Closed span with its recorded fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanRecord {
    /// Span name from the metadata.
    pub name: String,
    /// Fields recorded at creation or later through `Span::record`.
    pub fields: BTreeMap<String, String>,
}

/// Emitted event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Event level.
    pub level: Level,
    /// Event target.
    pub target: String,
    /// Rendered `message` field, when present.
    pub message: Option<String>,
    /// Every other field.
    pub fields: BTreeMap<String, String>,
}

#[derive(Default)]
struct Recorded {
    spans: Vec<SpanRecord>,
    events: Vec<EventRecord>,
}

/// Layer that keeps closed spans in completion order and events in emission
/// order.
///
/// # Examples
/// ```
/// use brg_test_support::recording::record;
///
/// let ((), layer) = record(|| {
///     let _span = tracing::info_span!("demo", answer = 42).entered();
///     tracing::info!(items = 3, "done");
/// });
/// assert_eq!(layer.span_names(), vec!["demo".to_owned()]);
/// assert_eq!(layer.messages(), vec!["done".to_owned()]);
/// ```
#[derive(Clone, Default)]
pub struct RecordingLayer {
    recorded: Arc<Mutex<Recorded>>,
}

impl RecordingLayer {
    fn lock(&self) -> MutexGuard<'_, Recorded> {
        self.recorded.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the closed spans.
    #[must_use]
    pub fn spans(&self) -> Vec<SpanRecord> {
        self.lock().spans.clone()
    }

    /// Snapshot of the emitted events.
    #[must_use]
    pub fn events(&self) -> Vec<EventRecord> {
        self.lock().events.clone()
    }

    /// Names of the closed spans, in completion order.
    #[must_use]
    pub fn span_names(&self) -> Vec<String> {
        self.lock().spans.iter().map(|span| span.name.clone()).collect()
    }

    /// First closed span named `name`.
    #[must_use]
    pub fn span(&self, name: &str) -> Option<SpanRecord> {
        self.lock().spans.iter().find(|span| span.name == name).cloned()
    }

    /// Messages of the emitted events, skipping events without one.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.lock()
            .events
            .iter()
            .filter_map(|event| event.message.clone())
            .collect()
    }

    /// First event whose message equals `message`.
    #[must_use]
    pub fn event(&self, message: &str) -> Option<EventRecord> {
        self.lock()
            .events
            .iter()
            .find(|event| event.message.as_deref() == Some(message))
            .cloned()
    }
}

/// Runs `operation` with a fresh [`RecordingLayer`] installed as the
/// thread-local default subscriber.
pub fn record<T>(operation: impl FnOnce() -> T) -> (T, RecordingLayer) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let output = tracing::subscriber::with_default(subscriber, operation);
    (output, layer)
}

struct OpenSpan {
    name: String,
    fields: BTreeMap<String, String>,
}

impl<S> Layer<S> for RecordingLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut visitor = FieldVisitor::default();
        attrs.record(&mut visitor);
        span.extensions_mut().insert(OpenSpan {
            name: attrs.metadata().name().to_owned(),
            fields: visitor.into_fields(),
        });
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut visitor = FieldVisitor::default();
        values.record(&mut visitor);
        if let Some(open) = span.extensions_mut().get_mut::<OpenSpan>() {
            open.fields.extend(visitor.into_fields());
        }
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        let Some(open) = span.extensions_mut().remove::<OpenSpan>() else {
            return;
        };
        self.lock().spans.push(SpanRecord {
            name: open.name,
            fields: open.fields,
        });
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        let metadata = event.metadata();
        self.lock().events.push(EventRecord {
            level: *metadata.level(),
            target: metadata.target().to_owned(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: BTreeMap<String, String>,
}

impl FieldVisitor {
    fn into_fields(mut self) -> BTreeMap<String, String> {
        if let Some(message) = self.message.take() {
            self.fields.insert("message".to_owned(), message);
        }
        self.fields
    }

    fn store(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.fields.insert(field.name().to_owned(), value);
        }
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.store(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.store(field, value.to_owned());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.store(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.store(field, value.to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.store(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.store(field, value.to_string());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.store(field, value.to_string());
    }
}
