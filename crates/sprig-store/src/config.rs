//! Attribute store configuration.

use std::fmt;
use std::sync::Arc;

use sprig_core::{Allocator, SystemAllocator};

/// How the pair sequence grows when it runs out of slots.
///
/// The choice affects only allocation count and spare capacity; the
/// content, order and ownership of pairs are identical under both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// Grow by exactly one slot per insertion.
    #[default]
    Exact,
    /// Double the capacity (amortized O(1) insertion).
    Doubling,
}

/// Configuration for an [`AttributeStore`](crate::AttributeStore).
///
/// Fixed at construction; a store never changes its policy.
#[derive(Clone)]
pub struct StoreConfig {
    /// Growth strategy for the pair sequence.
    ///
    /// Default: [`GrowthPolicy::Exact`].
    pub growth: GrowthPolicy,

    /// Maximum number of distinct attributes.
    ///
    /// Default: `None` (unbounded). Inserting a new name beyond the
    /// limit fails with `CapacityExceeded`; replacing an existing
    /// attribute's value is always allowed.
    pub max_attributes: Option<usize>,

    /// Admission policy consulted before every allocation.
    ///
    /// Default: [`SystemAllocator`].
    pub allocator: Arc<dyn Allocator>,
}

impl StoreConfig {
    /// Default configuration: exact growth, no limit, system allocator.
    pub fn new() -> Self {
        Self {
            growth: GrowthPolicy::default(),
            max_attributes: None,
            allocator: Arc::new(SystemAllocator),
        }
    }

    /// Use `growth` for the pair sequence.
    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Cap the number of distinct attributes at `limit`.
    pub fn with_max_attributes(mut self, limit: usize) -> Self {
        self.max_attributes = Some(limit);
        self
    }

    /// Route allocation admission through `allocator`.
    pub fn with_allocator(mut self, allocator: Arc<dyn Allocator>) -> Self {
        self.allocator = allocator;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("growth", &self.growth)
            .field("max_attributes", &self.max_attributes)
            .finish_non_exhaustive()
    }
}
