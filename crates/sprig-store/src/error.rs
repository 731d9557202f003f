//! Store-level error types.

use std::error::Error;
use std::fmt;

use sprig_core::{AllocError, AllocKind, AttrError};

/// Errors from attribute store mutation.
///
/// These carry no element context; the owning node attaches the
/// attribute and element names with [`StoreError::into_attr_error`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// A buffer could not be allocated, either because the configured
    /// allocator refused it or because the global allocator is exhausted.
    AllocationFailed {
        /// Which buffer failed.
        kind: AllocKind,
        /// Size of the failed request in bytes.
        bytes: usize,
    },
    /// The store already holds `limit` attributes.
    CapacityExceeded {
        /// The configured attribute limit.
        limit: usize,
    },
    /// A `Display` implementation failed while building a formatted value.
    FormatFailed,
}

impl StoreError {
    /// Attach the attribute and element names.
    pub fn into_attr_error(self, attribute: &str, element: &str) -> AttrError {
        let attribute = attribute.to_owned();
        let element = element.to_owned();
        match self {
            Self::AllocationFailed { kind, bytes } => AttrError::AllocationFailed {
                attribute,
                element,
                kind,
                bytes,
            },
            Self::CapacityExceeded { limit } => AttrError::CapacityExceeded {
                attribute,
                element,
                limit,
            },
            Self::FormatFailed => AttrError::FormatFailed { attribute, element },
        }
    }
}

impl From<AllocError> for StoreError {
    fn from(e: AllocError) -> Self {
        Self::AllocationFailed {
            kind: e.request.kind,
            bytes: e.request.bytes,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { kind, bytes } => {
                write!(f, "allocation failed: {bytes} bytes for {kind}")
            }
            Self::CapacityExceeded { limit } => {
                write!(f, "attribute limit of {limit} reached")
            }
            Self::FormatFailed => write!(f, "value formatting failed"),
        }
    }
}

impl Error for StoreError {}
