//! Test utilities and mock types for Sprig development.
//!
//! Provides mock implementations of the core seams ([`ErrorSink`],
//! [`Allocator`](sprig_core::Allocator)) so that failure paths can be
//! driven deterministically.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{CountingAllocator, FailingAllocator};

use std::sync::{Arc, Mutex};

use sprig_core::{AttrError, ErrorSink};

/// Mock [`ErrorSink`] that records every report.
///
/// Clones share the same log, so one handle can be given to the code
/// under test and another kept for assertions.
#[derive(Clone, Default)]
pub struct RecordingSink {
    reports: Arc<Mutex<Vec<AttrError>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// This sink as a shareable trait object.
    pub fn as_sink(&self) -> Arc<dyn ErrorSink> {
        Arc::new(self.clone())
    }

    /// All reports so far, in order.
    pub fn reports(&self) -> Vec<AttrError> {
        self.reports.lock().unwrap().clone()
    }

    /// Number of reports so far.
    pub fn count(&self) -> usize {
        self.reports.lock().unwrap().len()
    }

    /// Rendered messages of all reports.
    pub fn messages(&self) -> Vec<String> {
        self.reports
            .lock()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

impl ErrorSink for RecordingSink {
    fn report(&self, error: &AttrError) {
        self.reports.lock().unwrap().push(error.clone());
    }
}
