//! Reusable allocator fixtures.
//!
//! - [`FailingAllocator`]: refuses requests deterministically after N admissions.
//! - [`CountingAllocator`]: admits everything and records what was asked for.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use sprig_core::{AllocError, AllocKind, AllocRequest, Allocator};

/// Refuses allocations after a configurable number of admissions.
///
/// When constructed with a kind filter, only requests of that kind are
/// counted and refused; all others pass straight through. Uses atomics
/// so it satisfies the `Send + Sync` bound on [`Allocator`].
pub struct FailingAllocator {
    pub kind: Option<AllocKind>,
    pub succeed_count: usize,
    call_count: AtomicUsize,
    refused: AtomicUsize,
}

impl FailingAllocator {
    /// Admit `succeed_count` requests of any kind, then refuse all.
    pub fn after(succeed_count: usize) -> Self {
        Self {
            kind: None,
            succeed_count,
            call_count: AtomicUsize::new(0),
            refused: AtomicUsize::new(0),
        }
    }

    /// Refuse every request of `kind`.
    pub fn for_kind(kind: AllocKind) -> Self {
        Self::for_kind_after(kind, 0)
    }

    /// Admit `succeed_count` requests of `kind`, then refuse that kind.
    pub fn for_kind_after(kind: AllocKind, succeed_count: usize) -> Self {
        Self {
            kind: Some(kind),
            ..Self::after(succeed_count)
        }
    }

    /// How many matching requests have been seen.
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    /// How many requests have been refused.
    pub fn refusals(&self) -> usize {
        self.refused.load(Ordering::Relaxed)
    }

    /// Reset both counters.
    pub fn reset(&self) {
        self.call_count.store(0, Ordering::Relaxed);
        self.refused.store(0, Ordering::Relaxed);
    }
}

impl Allocator for FailingAllocator {
    fn allocate(&self, request: AllocRequest) -> Result<(), AllocError> {
        if self.kind.is_some_and(|k| k != request.kind) {
            return Ok(());
        }
        let n = self.call_count.fetch_add(1, Ordering::Relaxed);
        if n < self.succeed_count {
            Ok(())
        } else {
            self.refused.fetch_add(1, Ordering::Relaxed);
            Err(AllocError { request })
        }
    }
}

/// Admits every request and keeps a log of them.
#[derive(Default)]
pub struct CountingAllocator {
    requests: Mutex<Vec<AllocRequest>>,
}

impl CountingAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// All requests seen so far, in order.
    pub fn requests(&self) -> Vec<AllocRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests of `kind`.
    pub fn count(&self, kind: AllocKind) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.kind == kind)
            .count()
    }
}

impl Allocator for CountingAllocator {
    fn allocate(&self, request: AllocRequest) -> Result<(), AllocError> {
        self.requests.lock().unwrap().push(request);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn after_refuses_once_exhausted() {
        let alloc = FailingAllocator::after(1);
        let req = AllocRequest::new(AllocKind::Value, 4);
        assert!(alloc.allocate(req).is_ok());
        assert_eq!(alloc.allocate(req), Err(AllocError { request: req }));
        assert_eq!(alloc.calls(), 2);
        assert_eq!(alloc.refusals(), 1);
        alloc.reset();
        assert!(alloc.allocate(req).is_ok());
    }

    #[test]
    fn kind_filter_passes_other_kinds() {
        let alloc = FailingAllocator::for_kind(AllocKind::Name);
        assert!(alloc
            .allocate(AllocRequest::new(AllocKind::Value, 1))
            .is_ok());
        assert!(alloc
            .allocate(AllocRequest::new(AllocKind::Name, 1))
            .is_err());
        assert_eq!(alloc.calls(), 1);
    }

    #[test]
    fn counting_records_in_order() {
        let alloc = CountingAllocator::new();
        alloc
            .allocate(AllocRequest::new(AllocKind::Name, 2))
            .unwrap();
        alloc
            .allocate(AllocRequest::new(AllocKind::Value, 3))
            .unwrap();
        assert_eq!(alloc.requests().len(), 2);
        assert_eq!(alloc.count(AllocKind::Name), 1);
        assert_eq!(alloc.count(AllocKind::PairSlots), 0);
    }
}
