#![forbid(unsafe_code)]

//! Logging integration tests.
//!
//! Spans and events with the feature enabled:
//!   cargo test -p frankenterm-charset --features tracing --test tracing_capture
//!
//! Zero-overhead verification (no feature):
//!   cargo test -p frankenterm-charset --test tracing_capture -- zero_overhead

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use frankenterm_charset::{Charset, ConvertOptions, decode, encode, multibyte_to_utf16};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A captured span or event with its fields.
#[derive(Debug, Clone)]
#[allow(dead_code)]
struct Captured {
    name: String,
    fields: HashMap<String, String>,
    parent_name: Option<String>,
}

#[derive(Default)]
struct Records {
    spans: Vec<Captured>,
    events: Vec<Captured>,
}

/// A tracing Layer that records span attributes and event fields.
struct Capture {
    records: Arc<Mutex<Records>>,
}

/// Visitor that extracts fields as strings.
struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        let parent_name = ctx
            .current_span()
            .id()
            .and_then(|id| ctx.span(id))
            .map(|span_ref| span_ref.name().to_string());
        self.records.lock().unwrap().spans.push(Captured {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
            parent_name,
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        let parent_name = ctx
            .event_span(event)
            .map(|span_ref| span_ref.name().to_string());
        self.records.lock().unwrap().events.push(Captured {
            name: event.metadata().level().to_string(),
            fields: visitor.0.into_iter().collect(),
            parent_name,
        });
    }
}

/// Run `f` under a subscriber that records everything it logs.
fn with_capture<F>(f: F) -> Records
where
    F: FnOnce(),
{
    let records = Arc::new(Mutex::new(Records::default()));
    let layer = Capture {
        records: Arc::clone(&records),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let mut guard = records.lock().unwrap();
    std::mem::take(&mut *guard)
}

// ============================================================================
// Tests
// ============================================================================

#[test]
#[cfg(feature = "tracing")]
fn bulk_calls_open_one_span_each() {
    let records = with_capture(|| {
        decode(Charset::Utf8, b"abc", &ConvertOptions::STRICT).unwrap();
        encode(Charset::Cp932, "abc", &ConvertOptions::STRICT).unwrap();
        multibyte_to_utf16(Charset::Cp932, b"abc", &ConvertOptions::STRICT).unwrap();
    });

    let names: Vec<_> = records.spans.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["decode", "encode", "multibyte_to_utf16"]);
    assert_eq!(records.spans[0].fields.get("len").map(String::as_str), Some("3"));
    assert_eq!(records.spans[0].fields.get("mode").map(String::as_str), Some("strict"));
    assert_eq!(records.spans[2].fields.get("charset").map(String::as_str), Some("CP932"));
    assert!(records.spans.iter().all(|s| s.parent_name.is_none()));
    assert!(records.events.is_empty(), "clean input must not log");
}

#[test]
#[cfg(feature = "tracing")]
fn strict_failure_logs_one_debug_event() {
    let records = with_capture(|| {
        decode(Charset::Utf8, b"ab\xFF", &ConvertOptions::STRICT).unwrap_err();
    });

    assert_eq!(records.events.len(), 1);
    let event = &records.events[0];
    assert_eq!(event.name, "DEBUG");
    assert_eq!(event.fields.get("position").map(String::as_str), Some("2"));
    assert_eq!(event.fields.get("error").map(String::as_str), Some("malformed sequence"));
    assert_eq!(event.parent_name.as_deref(), Some("decode"));
}

#[test]
#[cfg(feature = "tracing")]
fn lenient_substitutions_log_trace_events() {
    let records = with_capture(|| {
        let text = decode(Charset::Utf8, b"\xFFa\xFF", &ConvertOptions::LENIENT).unwrap();
        assert_eq!(text, "\u{FFFD}a\u{FFFD}");
    });

    let positions: Vec<_> = records
        .events
        .iter()
        .filter(|e| e.name == "TRACE")
        .filter_map(|e| e.fields.get("position").cloned())
        .collect();
    assert_eq!(positions, ["0", "2"]);
}

#[test]
fn zero_overhead_without_feature() {
    let records = with_capture(|| {
        decode(Charset::Utf8, b"\xFF", &ConvertOptions::LENIENT).unwrap();
        decode(Charset::Utf8, b"\xFF", &ConvertOptions::STRICT).unwrap_err();
    });
    if cfg!(feature = "tracing") {
        assert_eq!(records.spans.len(), 2);
    } else {
        assert!(records.spans.is_empty());
        assert!(records.events.is_empty());
    }
}
