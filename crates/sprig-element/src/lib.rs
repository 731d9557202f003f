//! Element nodes and attribute operations for the Sprig markup tree.
//!
//! A [`Node`] owns its kind-specific payload; element nodes own an
//! [`AttributeStore`](sprig_store::AttributeStore). The attribute
//! operations on [`Node`] attach the element's name to store errors and
//! report resource failures to the node's error sink (or the
//! process-wide one) before returning them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod attr;
pub mod filter;
pub mod node;

pub use filter::{find_element, AttrFilter};
pub use node::{Element, Node, NodeData};

/// Set an attribute to a formatted value.
///
/// ```rust
/// use sprig_element::{set_attrf, Node};
///
/// let mut rect = Node::element("rect");
/// set_attrf!(rect, "width", "{}px", 40).unwrap();
/// assert_eq!(rect.attr_value("width"), Some(Some("40px")));
/// ```
#[macro_export]
macro_rules! set_attrf {
    ($node:expr, $name:expr, $($arg:tt)+) => {
        $node.set_attr_fmt($name, ::core::format_args!($($arg)+))
    };
}
