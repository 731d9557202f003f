//! Core types and traits for the Sprig markup tree.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the node kind classification, attribute error types, the allocation
//! admission trait and the diagnostic error sink shared by the rest of
//! the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alloc;
pub mod error;
pub mod kind;
pub mod sink;
pub mod traits;

pub use alloc::{AllocError, AllocKind, AllocRequest, Allocator, SystemAllocator};
pub use error::AttrError;
pub use kind::NodeKind;
pub use sink::{
    clear_error_sink, global_error_sink, install_error_sink, report, ErrorSink, TracingSink,
};
pub use traits::AttributeReader;
