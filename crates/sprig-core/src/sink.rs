//! Diagnostic sink for attribute resource failures.
//!
//! A sink is notified once for every reportable [`AttrError`]. What it
//! does with the report (log, count, abort) is entirely its own
//! business; the attribute operation itself always returns the error.
//!
//! Resolution order for a report: the sink attached to the node, then
//! the process-wide sink installed with [`install_error_sink`], then
//! [`TracingSink`].

use std::sync::{Arc, RwLock};

use crate::error::AttrError;

/// Receives reports of attribute resource failures.
pub trait ErrorSink: Send + Sync {
    /// Called once per reportable failure.
    fn report(&self, error: &AttrError);
}

/// Default sink: emits one `tracing` error event per report.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn report(&self, error: &AttrError) {
        tracing::error!(
            attribute = error.attribute().unwrap_or_default(),
            element = error.element().unwrap_or_default(),
            "{error}"
        );
    }
}

static GLOBAL_SINK: RwLock<Option<Arc<dyn ErrorSink>>> = RwLock::new(None);

/// Install the process-wide error sink, returning the previous one.
pub fn install_error_sink(sink: Arc<dyn ErrorSink>) -> Option<Arc<dyn ErrorSink>> {
    let mut slot = GLOBAL_SINK.write().unwrap_or_else(|e| e.into_inner());
    slot.replace(sink)
}

/// Remove the process-wide error sink, returning it.
///
/// Subsequent reports without a node-local sink go to [`TracingSink`].
pub fn clear_error_sink() -> Option<Arc<dyn ErrorSink>> {
    let mut slot = GLOBAL_SINK.write().unwrap_or_else(|e| e.into_inner());
    slot.take()
}

/// The process-wide error sink, or [`TracingSink`] if none is installed.
pub fn global_error_sink() -> Arc<dyn ErrorSink> {
    let slot = GLOBAL_SINK.read().unwrap_or_else(|e| e.into_inner());
    match slot.as_ref() {
        Some(sink) => Arc::clone(sink),
        None => Arc::new(TracingSink),
    }
}

/// Deliver `error` to `local` if given, otherwise to the global sink.
///
/// Errors for which [`AttrError::is_reportable`] is false are dropped.
pub fn report(local: Option<&Arc<dyn ErrorSink>>, error: &AttrError) {
    if !error.is_reportable() {
        return;
    }
    match local {
        Some(sink) => sink.report(error),
        None => global_error_sink().report(error),
    }
}
