//! Sprig: an in-memory markup tree with per-element attribute storage.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Sprig sub-crates. For most users, adding `sprig` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sprig::prelude::*;
//!
//! let mut div = Node::element("div");
//! div.set_attr("id", Some("1")).unwrap();
//! div.set_attr("class", Some("box")).unwrap();
//! div.set_attr("id", Some("2")).unwrap();
//! set_attrf!(div, "data-width", "{}px", 320).unwrap();
//!
//! assert_eq!(div.attr_count(), 3);
//! assert_eq!(div.attr_value("id"), Some(Some("2")));
//! assert_eq!(div.attr_name_by_value("box"), Some("class"));
//!
//! div.delete_attr("class");
//! assert_eq!(div.attr_value("class"), None);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sprig-core` | Node kinds, errors, allocator and sink traits |
//! | [`store`] | `sprig-store` | `AttributeStore`, configuration, store errors |
//! | [`element`] | `sprig-element` | `Node`, element attribute operations, filters |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`sprig-core`).
///
/// Contains [`types::NodeKind`], [`types::AttrError`], the
/// [`types::Allocator`] admission trait and the [`types::ErrorSink`]
/// diagnostic hook.
pub use sprig_core as types;

/// Attribute storage (`sprig-store`).
///
/// Most users go through [`element::Node`]; use the store directly when
/// attributes are needed without a node.
pub use sprig_store as store;

/// Element nodes and attribute operations (`sprig-element`).
pub use sprig_element as element;

pub use sprig_element::set_attrf;

/// Common imports for typical Sprig usage.
///
/// ```rust
/// use sprig::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use sprig_core::{
        AllocKind, Allocator, AttrError, AttributeReader, ErrorSink, NodeKind, SystemAllocator,
        TracingSink,
    };

    // Store
    pub use sprig_store::{AttributePair, AttributeStore, GrowthPolicy, StoreConfig, StoreError};

    // Element
    pub use sprig_element::{find_element, set_attrf, AttrFilter, Node};
}
