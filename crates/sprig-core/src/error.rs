//! Error types for element attribute operations.
//!
//! Two classes of failure exist. Precondition violations
//! ([`AttrError::NotAnElement`]) are returned to the caller but never
//! reported to the error sink. Resource failures (every other variant)
//! are reported to the sink once and then returned; the element's
//! attributes are left exactly as they were before the call.

use std::error::Error;
use std::fmt;

use crate::alloc::AllocKind;
use crate::kind::NodeKind;

/// Errors from attribute operations on a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrError {
    /// The node is not an element and carries no attributes.
    NotAnElement {
        /// Kind of the node the operation was applied to.
        kind: NodeKind,
    },
    /// A buffer for the attribute could not be allocated.
    AllocationFailed {
        /// Name of the attribute being set.
        attribute: String,
        /// Name of the owning element.
        element: String,
        /// Which buffer failed.
        kind: AllocKind,
        /// Size of the failed request in bytes.
        bytes: usize,
    },
    /// The element already holds its configured maximum number of
    /// attributes and the name is not among them.
    CapacityExceeded {
        /// Name of the attribute being inserted.
        attribute: String,
        /// Name of the owning element.
        element: String,
        /// The configured attribute limit.
        limit: usize,
    },
    /// The formatted value could not be produced because a `Display`
    /// implementation returned an error.
    FormatFailed {
        /// Name of the attribute being set.
        attribute: String,
        /// Name of the owning element.
        element: String,
    },
}

impl AttrError {
    /// Whether this error is reported to the error sink.
    ///
    /// Precondition violations are silent; resource failures are not.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, Self::NotAnElement { .. })
    }

    /// Name of the attribute involved, if any.
    pub fn attribute(&self) -> Option<&str> {
        match self {
            Self::NotAnElement { .. } => None,
            Self::AllocationFailed { attribute, .. }
            | Self::CapacityExceeded { attribute, .. }
            | Self::FormatFailed { attribute, .. } => Some(attribute),
        }
    }

    /// Name of the owning element, if any.
    pub fn element(&self) -> Option<&str> {
        match self {
            Self::NotAnElement { .. } => None,
            Self::AllocationFailed { element, .. }
            | Self::CapacityExceeded { element, .. }
            | Self::FormatFailed { element, .. } => Some(element),
        }
    }
}

impl fmt::Display for AttrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnElement { kind } => {
                write!(f, "{kind} node has no attributes")
            }
            Self::AllocationFailed {
                attribute,
                element,
                kind,
                bytes,
            } => {
                write!(
                    f,
                    "unable to allocate memory for attribute '{attribute}' in element {element} \
                     ({kind}, {bytes} bytes)"
                )
            }
            Self::CapacityExceeded {
                attribute,
                element,
                limit,
            } => {
                write!(
                    f,
                    "unable to add attribute '{attribute}' to element {element}: \
                     limit of {limit} attributes reached"
                )
            }
            Self::FormatFailed { attribute, element } => {
                write!(
                    f,
                    "unable to format value for attribute '{attribute}' in element {element}"
                )
            }
        }
    }
}

impl Error for AttrError {}
