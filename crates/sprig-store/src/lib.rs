//! Per-element attribute storage for the Sprig markup tree.
//!
//! An [`AttributeStore`] holds the name/value pairs of one element.
//! Names are unique, values are optional, and pairs stay in insertion
//! order with in-place compaction on removal.
//!
//! # Architecture
//!
//! ```text
//! AttributeStore
//! ├── SmallVec<[AttributePair; 4]> (inline until the fifth attribute)
//! └── StoreConfig
//!     ├── GrowthPolicy (Exact | Doubling)
//!     ├── max_attributes
//!     └── Arc<dyn Allocator> (admission for every buffer)
//! ```
//!
//! All allocation goes through [`copy::copy_str`],
//! [`copy::format_exact`] or the store's slot reservation, each of which
//! asks the configured allocator first and then reserves with
//! `try_reserve_exact`. Allocation failure is an ordinary
//! [`StoreError`], never an abort.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod copy;
pub mod error;
pub mod pair;
pub mod store;

pub use config::{GrowthPolicy, StoreConfig};
pub use error::StoreError;
pub use pair::AttributePair;
pub use store::{AttributeStore, INLINE_ATTRS};
