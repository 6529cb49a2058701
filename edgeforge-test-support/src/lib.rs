//! Shared test utilities for the edgeforge crates.
//!
//! The capture layer records spans and events emitted through `tracing` so
//! tests can assert instrumentation deterministically instead of scraping
//! formatted log output.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Layer installed during tests to capture spans and events for later
/// assertions.
#[derive(Clone, Default)]
pub struct CaptureLayer {
    spans: Arc<Mutex<Vec<SpanCapture>>>,
    events: Arc<Mutex<Vec<EventCapture>>>,
}

impl CaptureLayer {
    /// Snapshot of the closed spans, in completion order.
    ///
    /// # Examples
    /// ```
    /// use edgeforge_test_support::CaptureLayer;
    ///
    /// let layer = CaptureLayer::default();
    /// assert!(layer.spans().is_empty());
    /// ```
    #[must_use]
    pub fn spans(&self) -> Vec<SpanCapture> {
        self.spans.lock().expect("lock poisoned").clone()
    }

    /// Snapshot of the emitted events, in emission order.
    ///
    /// # Examples
    /// ```
    /// use edgeforge_test_support::CaptureLayer;
    ///
    /// let layer = CaptureLayer::default();
    /// assert!(layer.events().is_empty());
    /// ```
    #[must_use]
    pub fn events(&self) -> Vec<EventCapture> {
        self.events.lock().expect("lock poisoned").clone()
    }
}

/// A closed span with its name and every field recorded against it,
/// including values filled in after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanCapture {
    /// Span name from the tracing metadata.
    pub name: String,
    /// Structured fields recorded on the span.
    pub fields: HashMap<String, String>,
}

/// An emitted event with its level, target, and structured fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCapture {
    /// Level the event was emitted at.
    pub level: Level,
    /// Event target from the metadata.
    pub target: String,
    /// Structured fields, with the format message under `message`.
    pub fields: HashMap<String, String>,
}

#[derive(Default)]
struct SpanData {
    name: String,
    fields: HashMap<String, String>,
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        id: &tracing::span::Id,
        ctx: Context<'_, S>,
    ) {
        if let Some(span) = ctx.span(id) {
            let mut data = SpanData {
                name: attrs.metadata().name().to_owned(),
                fields: HashMap::new(),
            };
            attrs.record(&mut FieldCollector {
                fields: &mut data.fields,
            });
            span.extensions_mut().insert(data);
        }
    }

    fn on_record(
        &self,
        id: &tracing::span::Id,
        values: &tracing::span::Record<'_>,
        ctx: Context<'_, S>,
    ) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut extensions = span.extensions_mut();
        let Some(data) = extensions.get_mut::<SpanData>() else {
            return;
        };
        values.record(&mut FieldCollector {
            fields: &mut data.fields,
        });
    }

    fn on_close(&self, id: tracing::span::Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        let Some(data) = span.extensions_mut().remove::<SpanData>() else {
            return;
        };
        self.spans.lock().expect("lock poisoned").push(SpanCapture {
            name: data.name,
            fields: data.fields,
        });
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut FieldCollector {
            fields: &mut fields,
        });
        self.events
            .lock()
            .expect("lock poisoned")
            .push(EventCapture {
                level: *event.metadata().level(),
                target: event.metadata().target().to_owned(),
                fields,
            });
    }
}

struct FieldCollector<'a> {
    fields: &'a mut HashMap<String, String>,
}

impl Visit for FieldCollector<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.fields
            .insert(field.name().to_owned(), format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields
            .insert(field.name().to_owned(), value.to_owned());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.fields
            .insert(field.name().to_owned(), value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_owned(), value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_owned(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_owned(), value.to_string());
    }
}
