//! Allocation admission for attribute storage.
//!
//! Every buffer the attribute store creates (pair slots, name copies,
//! value copies, formatted values) is first described as an
//! [`AllocRequest`] and offered to an [`Allocator`]. A refusal is a
//! recoverable error, never an abort. Once admitted, the store performs
//! the real reservation with `try_reserve_exact`, so genuine exhaustion
//! of the global allocator surfaces through the same error path.

use std::error::Error;
use std::fmt;

/// What an allocation is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AllocKind {
    /// Growth of the pair sequence.
    PairSlots,
    /// Private copy of an attribute name.
    Name,
    /// Private copy of an attribute value.
    Value,
    /// Buffer holding a formatted attribute value.
    Formatted,
}

impl fmt::Display for AllocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PairSlots => "pair slots",
            Self::Name => "name",
            Self::Value => "value",
            Self::Formatted => "formatted value",
        };
        f.write_str(s)
    }
}

/// A single allocation about to be made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocRequest {
    /// Purpose of the allocation.
    pub kind: AllocKind,
    /// Total size of the resulting buffer in bytes.
    pub bytes: usize,
}

impl AllocRequest {
    /// Describe an allocation of `bytes` bytes for `kind`.
    pub fn new(kind: AllocKind, bytes: usize) -> Self {
        Self { kind, bytes }
    }
}

/// An allocation was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocError {
    /// The refused request.
    pub request: AllocRequest,
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "allocation of {} bytes for {} refused",
            self.request.bytes, self.request.kind
        )
    }
}

impl Error for AllocError {}

/// Admission policy for attribute-store allocations.
///
/// Implementations must be cheap and must not panic; returning `Err`
/// makes the calling operation fail without mutating the store.
pub trait Allocator: Send + Sync {
    /// Decide whether `request` may proceed.
    fn allocate(&self, request: AllocRequest) -> Result<(), AllocError>;
}

/// Admits every request and leaves failure to the global allocator.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemAllocator;

impl Allocator for SystemAllocator {
    fn allocate(&self, _request: AllocRequest) -> Result<(), AllocError> {
        Ok(())
    }
}
