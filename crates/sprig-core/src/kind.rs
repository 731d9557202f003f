//! Node kind classification.

use std::fmt;

/// The kind of a tree node.
///
/// Only [`NodeKind::Element`] nodes carry attributes. Every attribute
/// operation on a node of any other kind is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A markup element with a name and attributes.
    Element,
    /// An integer value.
    Integer,
    /// An opaque string carried through unparsed.
    Opaque,
    /// A floating-point value.
    Real,
    /// A text fragment, optionally preceded by whitespace.
    Text,
    /// Application-defined data.
    Custom,
}

impl NodeKind {
    /// Returns `true` for [`NodeKind::Element`].
    pub fn is_element(self) -> bool {
        matches!(self, Self::Element)
    }

    /// Lowercase name of the kind, used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Integer => "integer",
            Self::Opaque => "opaque",
            Self::Real => "real",
            Self::Text => "text",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
