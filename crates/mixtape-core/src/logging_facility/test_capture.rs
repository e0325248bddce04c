//! In-memory event capture for logging assertions
//!
//! Records every event with the fields the pipeline cares about pulled out
//! as typed members: stage boundaries, skip reports and their error codes.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_SKIP, FIELD_ERR_CODE, FIELD_EVENT, FIELD_INGESTED,
    FIELD_OP, FIELD_SKIPPED,
};

/// One recorded event
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub op: Option<String>,
    pub event: Option<String>,
    /// Stable error code on `end_error` and `skip` events
    pub err_code: Option<String>,
    /// Stage counters on `end` events
    pub ingested: Option<u64>,
    pub skipped: Option<u64>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    fn from_fields(level: Level, fields: HashMap<String, String>) -> Self {
        let text = |key: &str| fields.get(key).cloned();
        let number = |key: &str| fields.get(key).and_then(|v| v.parse().ok());
        Self {
            level,
            op: text(FIELD_OP),
            event: text(FIELD_EVENT),
            err_code: text(FIELD_ERR_CODE),
            ingested: number(FIELD_INGESTED),
            skipped: number(FIELD_SKIPPED),
            fields,
        }
    }

    /// Any other recorded field, rendered as text
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn is(&self, op: &str, event: &str) -> bool {
        self.op.as_deref() == Some(op) && self.event.as_deref() == Some(event)
    }
}

/// Strings keep their raw text; everything else goes through `Debug`,
/// which renders integers without decoration
#[derive(Default)]
struct FieldText(HashMap<String, String>);

impl Visit for FieldText {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

type Events = Arc<Mutex<Vec<CapturedEvent>>>;

struct CaptureLayer {
    events: Events,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut text = FieldText::default();
        event.record(&mut text);
        let captured = CapturedEvent::from_fields(*event.metadata().level(), text.0);

        if let Ok(mut events) = self.events.lock() {
            events.push(captured);
        }
    }
}

/// Shared handle onto captured events
#[derive(Clone)]
pub struct TestCapture {
    events: Events,
}

impl TestCapture {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    /// Events for `op` with the given `event` name, in emission order
    pub fn find(&self, op: &str, event: &str) -> Vec<CapturedEvent> {
        self.events().into_iter().filter(|e| e.is(op, event)).collect()
    }

    /// The most recent successful end event for a stage
    pub fn stage_end(&self, op: &str) -> Option<CapturedEvent> {
        self.find(op, EVENT_END).pop()
    }

    /// The most recent failed end event for a stage
    pub fn stage_error(&self, op: &str) -> Option<CapturedEvent> {
        self.find(op, EVENT_END_ERROR).pop()
    }

    /// Every skipped-change report
    pub fn skips(&self) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.event.as_deref() == Some(EVENT_SKIP))
            .collect()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber
///
/// Only the first call installs; later calls return the same handle, so
/// tests in one binary share events and should filter by a unique `op`.
///
/// # Example
///
/// ```
/// use mixtape_core::logging_facility::test_capture::init_test_capture;
/// use mixtape_core::log_op_end;
///
/// let capture = init_test_capture();
/// log_op_end!("doc_stage", duration_ms = 1, ingested = 2u64, skipped = 0u64);
/// assert_eq!(capture.stage_end("doc_stage").and_then(|e| e.ingested), Some(2));
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let events = Events::default();
            tracing_subscriber::registry()
                .with(CaptureLayer {
                    events: events.clone(),
                })
                .init();
            TestCapture { events }
        })
        .clone()
}
