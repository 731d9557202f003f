//! The per-element attribute store.
//!
//! An [`AttributeStore`] is a small sequence of [`AttributePair`]s with
//! unique names, kept in insertion order. Every lookup is a linear scan;
//! elements rarely carry more than a handful of attributes, and the
//! reverse lookup by value depends on storage order.
//!
//! # Failure isolation
//!
//! Every mutation acquires all the buffers it needs (value copy, name
//! copy, pair slot) before touching the sequence. A failure at any step
//! drops whatever was already acquired and leaves length, contents and
//! capacity exactly as they were.

use std::fmt;
use std::mem;

use smallvec::SmallVec;
use sprig_core::{AllocKind, AllocRequest, AttributeReader};

use crate::config::{GrowthPolicy, StoreConfig};
use crate::copy::{copy_str, format_exact};
use crate::error::StoreError;
use crate::pair::AttributePair;

/// Number of pairs stored inline before spilling to the heap.
pub const INLINE_ATTRS: usize = 4;

/// Attribute storage for one element.
#[derive(Debug)]
pub struct AttributeStore {
    pairs: SmallVec<[AttributePair; INLINE_ATTRS]>,
    config: StoreConfig,
}

impl AttributeStore {
    /// Create an empty store with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty store with `config`.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            pairs: SmallVec::new(),
            config,
        }
    }

    /// The store's configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Set `name` to a private copy of `value`.
    ///
    /// Replaces the value if `name` exists, otherwise appends a new pair.
    /// The caller's strings are never retained.
    pub fn set(&mut self, name: &str, value: Option<&str>) -> Result<(), StoreError> {
        let value = match value {
            Some(v) => Some(copy_str(&*self.config.allocator, AllocKind::Value, v)?),
            None => None,
        };
        self.set_owned(name, value)
    }

    /// Set `name` to the result of formatting `args`.
    ///
    /// The value is rendered into an exactly-sized buffer before the store
    /// is touched; if rendering fails nothing changes.
    pub fn set_fmt(&mut self, name: &str, args: fmt::Arguments<'_>) -> Result<(), StoreError> {
        let value = format_exact(&*self.config.allocator, args)?;
        self.set_owned(name, Some(value))
    }

    /// Find-or-replace / find-or-append with an already owned value.
    ///
    /// On failure `value` is dropped here.
    fn set_owned(&mut self, name: &str, value: Option<String>) -> Result<(), StoreError> {
        if let Some(pair) = self.pairs.iter_mut().find(|p| p.name == name) {
            pair.value = value;
            return Ok(());
        }

        if let Some(limit) = self.config.max_attributes {
            if self.pairs.len() >= limit {
                return Err(StoreError::CapacityExceeded { limit });
            }
        }

        let name = copy_str(&*self.config.allocator, AllocKind::Name, name)?;
        self.reserve_slot()?;
        self.pairs.push(AttributePair { name, value });
        Ok(())
    }

    /// Ensure there is room for one more pair without infallible growth.
    fn reserve_slot(&mut self) -> Result<(), StoreError> {
        let capacity = self.pairs.capacity();
        if self.pairs.len() < capacity {
            return Ok(());
        }
        let additional = match self.config.growth {
            GrowthPolicy::Exact => 1,
            GrowthPolicy::Doubling => capacity.max(1),
        };
        let bytes = capacity
            .saturating_add(additional)
            .saturating_mul(mem::size_of::<AttributePair>());

        self.config
            .allocator
            .allocate(AllocRequest::new(AllocKind::PairSlots, bytes))?;
        self.pairs
            .try_reserve_exact(additional)
            .map_err(|_| StoreError::AllocationFailed {
                kind: AllocKind::PairSlots,
                bytes,
            })?;

        tracing::trace!(
            from = capacity,
            to = self.pairs.capacity(),
            "attribute slots grown"
        );
        Ok(())
    }

    /// Remove the attribute called `name`.
    ///
    /// Later pairs shift down one slot, keeping their relative order.
    /// Capacity is never released. Returns the removed pair, or `None`
    /// if no attribute has that name.
    pub fn remove(&mut self, name: &str) -> Option<AttributePair> {
        let index = self.position(name)?;
        let pair = self.pairs.remove(index);
        tracing::trace!(index, remaining = self.pairs.len(), "attribute removed");
        Some(pair)
    }

    /// The pair called `name`.
    pub fn get(&self, name: &str) -> Option<&AttributePair> {
        self.pairs.iter().find(|p| p.name == name)
    }

    /// The pair at storage position `index`.
    pub fn get_index(&self, index: usize) -> Option<&AttributePair> {
        self.pairs.get(index)
    }

    /// Value of `name`: `None` if absent, `Some(None)` if present
    /// without a value.
    pub fn value(&self, name: &str) -> Option<Option<&str>> {
        self.get(name).map(AttributePair::value)
    }

    /// Name of the first pair, in storage order, whose value equals
    /// `value`.
    ///
    /// Values are not unique, so with duplicates the earliest surviving
    /// insertion wins. Pairs without a value never match.
    pub fn name_by_value(&self, value: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|p| p.value.as_deref() == Some(value))
            .map(AttributePair::name)
    }

    /// Whether an attribute called `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.pairs.iter().position(|p| p.name == name)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the store has no attributes.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of pair slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.pairs.capacity()
    }

    /// Whether the pairs have moved from inline storage to the heap.
    pub fn spilled(&self) -> bool {
        self.pairs.spilled()
    }

    /// Pairs in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, AttributePair> {
        self.pairs.iter()
    }

    /// Attribute names in storage order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.pairs.iter().map(AttributePair::name)
    }
}

impl Default for AttributeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a AttributeStore {
    type Item = &'a AttributePair;
    type IntoIter = std::slice::Iter<'a, AttributePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AttributeReader for AttributeStore {
    fn attr_value(&self, name: &str) -> Option<Option<&str>> {
        self.value(name)
    }

    fn attr_name_by_value(&self, value: &str) -> Option<&str> {
        self.name_by_value(value)
    }

    fn attr_count(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sprig_test_utils::FailingAllocator;
    use std::sync::Arc;

    fn names(store: &AttributeStore) -> Vec<&str> {
        store.names().collect()
    }

    fn filled(n: usize) -> AttributeStore {
        let mut store = AttributeStore::new();
        for i in 0..n {
            store.set(&format!("a{i}"), Some("v")).unwrap();
        }
        store
    }

    #[test]
    fn set_same_value_twice_is_idempotent() {
        let mut store = AttributeStore::new();
        store.set("id", Some("1")).unwrap();
        store.set("id", Some("1")).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.value("id"), Some(Some("1")));
    }

    #[test]
    fn overwrite_keeps_single_entry() {
        let mut store = AttributeStore::new();
        store.set("id", Some("1")).unwrap();
        store.set("id", Some("2")).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.value("id"), Some(Some("2")));
        assert_eq!(names(&store), ["id"]);
    }

    #[test]
    fn distinct_names_each_retrievable() {
        let store = filled(10);
        assert_eq!(store.len(), 10);
        for i in 0..10 {
            assert_eq!(store.value(&format!("a{i}")), Some(Some("v")));
        }
    }

    #[test]
    fn delete_compacts_in_order() {
        let mut store = AttributeStore::new();
        store.set("a", Some("1")).unwrap();
        store.set("b", Some("2")).unwrap();
        store.set("c", Some("3")).unwrap();
        let removed = store.remove("b").unwrap();
        assert_eq!(removed.into_parts(), ("b".to_owned(), Some("2".to_owned())));
        assert_eq!(names(&store), ["a", "c"]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.value("b"), None);
    }

    #[test]
    fn delete_never_shrinks_capacity() {
        let mut store = filled(6);
        let capacity = store.capacity();
        store.remove("a0");
        store.remove("a5");
        assert_eq!(store.capacity(), capacity);
        assert_eq!(names(&store), ["a1", "a2", "a3", "a4"]);
    }

    #[test]
    fn delete_missing_name_is_noop() {
        let mut store = filled(3);
        assert!(store.remove("nope").is_none());
        assert_eq!(names(&store), ["a0", "a1", "a2"]);
    }

    #[test]
    fn absent_value_distinct_from_missing_and_empty() {
        let mut store = AttributeStore::new();
        store.set("disabled", None).unwrap();
        store.set("value", Some("")).unwrap();
        assert_eq!(store.value("disabled"), Some(None));
        assert_eq!(store.value("value"), Some(Some("")));
        assert_eq!(store.value("checked"), None);
        assert!(store.contains("disabled"));
    }

    #[test]
    fn value_can_be_cleared_and_restored() {
        let mut store = AttributeStore::new();
        store.set("open", Some("yes")).unwrap();
        store.set("open", None).unwrap();
        assert_eq!(store.value("open"), Some(None));
        store.set("open", Some("no")).unwrap();
        assert_eq!(store.value("open"), Some(Some("no")));
    }

    #[test]
    fn reverse_lookup_returns_first_inserted() {
        let mut store = AttributeStore::new();
        store.set("zeta", Some("same")).unwrap();
        store.set("alpha", Some("same")).unwrap();
        assert_eq!(store.name_by_value("same"), Some("zeta"));
        store.remove("zeta");
        assert_eq!(store.name_by_value("same"), Some("alpha"));
    }

    #[test]
    fn reverse_lookup_skips_valueless_pairs() {
        let mut store = AttributeStore::new();
        store.set("hidden", None).unwrap();
        store.set("title", Some("")).unwrap();
        assert_eq!(store.name_by_value(""), Some("title"));
        assert_eq!(store.name_by_value("hidden"), None);
    }

    #[test]
    fn names_are_exact_byte_matches() {
        let mut store = AttributeStore::new();
        store.set("ID", Some("upper")).unwrap();
        store.set("id", Some("lower")).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.value("Id"), None);
    }

    #[test]
    fn set_fmt_stores_rendered_value() {
        let mut store = AttributeStore::new();
        store.set_fmt("width", format_args!("{}px", 40)).unwrap();
        assert_eq!(store.value("width"), Some(Some("40px")));
        store.set_fmt("width", format_args!("{:.1}em", 2.5)).unwrap();
        assert_eq!(store.value("width"), Some(Some("2.5em")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn exact_growth_adds_one_slot_after_spill() {
        let mut store = filled(INLINE_ATTRS);
        assert!(!store.spilled());
        store.set("extra", None).unwrap();
        assert!(store.spilled());
        assert_eq!(store.capacity(), INLINE_ATTRS + 1);
        store.set("extra2", None).unwrap();
        assert_eq!(store.capacity(), INLINE_ATTRS + 2);
    }

    #[test]
    fn doubling_growth_doubles() {
        let config = StoreConfig::new().with_growth(GrowthPolicy::Doubling);
        let mut store = AttributeStore::with_config(config);
        for i in 0..=INLINE_ATTRS {
            store.set(&format!("a{i}"), None).unwrap();
        }
        assert_eq!(store.capacity(), INLINE_ATTRS * 2);
    }

    #[test]
    fn limit_rejects_new_names_but_allows_replacement() {
        let config = StoreConfig::new().with_max_attributes(2);
        let mut store = AttributeStore::with_config(config);
        store.set("a", Some("1")).unwrap();
        store.set("b", Some("2")).unwrap();
        let err = store.set("c", Some("3")).unwrap_err();
        assert_eq!(err, StoreError::CapacityExceeded { limit: 2 });
        store.set("a", Some("9")).unwrap();
        assert_eq!(names(&store), ["a", "b"]);
        assert_eq!(store.value("a"), Some(Some("9")));
    }

    fn failing_store(alloc: FailingAllocator) -> AttributeStore {
        AttributeStore::with_config(StoreConfig::new().with_allocator(Arc::new(alloc)))
    }

    #[test]
    fn failed_slot_growth_leaves_store_intact() {
        let mut store = failing_store(FailingAllocator::for_kind(AllocKind::PairSlots));
        for i in 0..INLINE_ATTRS {
            store.set(&format!("a{i}"), Some("v")).unwrap();
        }
        let capacity = store.capacity();
        let before: Vec<AttributePair> = store.iter().cloned().collect();

        let err = store.set("overflow", Some("x")).unwrap_err();
        assert!(matches!(
            err,
            StoreError::AllocationFailed {
                kind: AllocKind::PairSlots,
                ..
            }
        ));
        assert_eq!(store.capacity(), capacity);
        assert_eq!(store.iter().cloned().collect::<Vec<_>>(), before);
        assert!(!store.contains("overflow"));
    }

    #[test]
    fn failed_name_copy_inserts_nothing() {
        let mut store = failing_store(FailingAllocator::for_kind(AllocKind::Name));
        let err = store.set("id", Some("1")).unwrap_err();
        assert!(matches!(
            err,
            StoreError::AllocationFailed {
                kind: AllocKind::Name,
                bytes: 2
            }
        ));
        assert!(store.is_empty());
        assert_eq!(store.capacity(), INLINE_ATTRS);
    }

    #[test]
    fn failed_value_copy_keeps_old_value() {
        let alloc = FailingAllocator::after(2);
        let mut store = failing_store(alloc);
        // value + name admitted, then every further request refused.
        store.set("id", Some("1")).unwrap();
        assert!(store.set("id", Some("2")).is_err());
        assert_eq!(store.value("id"), Some(Some("1")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn failed_format_changes_nothing() {
        let mut store = failing_store(FailingAllocator::for_kind(AllocKind::Formatted));
        store.set("n", Some("0")).unwrap();
        let err = store.set_fmt("n", format_args!("{}", 5)).unwrap_err();
        assert!(matches!(
            err,
            StoreError::AllocationFailed {
                kind: AllocKind::Formatted,
                ..
            }
        ));
        assert_eq!(store.value("n"), Some(Some("0")));
    }

    #[test]
    fn reader_trait_matches_inherent_methods() {
        let mut store = AttributeStore::new();
        store.set("href", Some("#top")).unwrap();
        let reader: &dyn AttributeReader = &store;
        assert_eq!(reader.attr_value("href"), Some(Some("#top")));
        assert_eq!(reader.attr_name_by_value("#top"), Some("href"));
        assert_eq!(reader.attr_count(), 1);
        assert!(reader.has_attr("href"));
        assert!(!reader.has_attr("src"));
    }

    // ── Property tests ──────────────────────────────────────────

    #[derive(Clone, Debug)]
    enum Op {
        Set(u8, Option<u8>),
        Remove(u8),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..8, proptest::option::of(0u8..4)).prop_map(|(n, v)| Op::Set(n, v)),
            (0u8..8).prop_map(Op::Remove),
        ]
    }

    fn arb_growth() -> impl Strategy<Value = GrowthPolicy> {
        prop_oneof![Just(GrowthPolicy::Exact), Just(GrowthPolicy::Doubling)]
    }

    proptest! {
        #[test]
        fn matches_vec_model(
            growth in arb_growth(),
            ops in proptest::collection::vec(arb_op(), 0..64),
        ) {
            let mut store = AttributeStore::with_config(StoreConfig::new().with_growth(growth));
            let mut model: Vec<(String, Option<String>)> = Vec::new();

            for op in ops {
                match op {
                    Op::Set(n, v) => {
                        let name = format!("n{n}");
                        let value = v.map(|v| format!("v{v}"));
                        store.set(&name, value.as_deref()).unwrap();
                        match model.iter_mut().find(|(k, _)| *k == name) {
                            Some(entry) => entry.1 = value,
                            None => model.push((name, value)),
                        }
                    }
                    Op::Remove(n) => {
                        let name = format!("n{n}");
                        let removed = store.remove(&name);
                        let idx = model.iter().position(|(k, _)| *k == name);
                        prop_assert_eq!(removed.is_some(), idx.is_some());
                        if let Some(idx) = idx {
                            model.remove(idx);
                        }
                    }
                }
            }

            prop_assert_eq!(store.len(), model.len());
            prop_assert!(store.len() <= store.capacity());
            for (pair, (name, value)) in store.iter().zip(&model) {
                prop_assert_eq!(pair.name(), name.as_str());
                prop_assert_eq!(pair.value(), value.as_deref());
            }
            for v in 0u8..4 {
                let value = format!("v{v}");
                let expected = model
                    .iter()
                    .find(|(_, val)| val.as_deref() == Some(value.as_str()))
                    .map(|(k, _)| k.as_str());
                prop_assert_eq!(store.name_by_value(&value), expected);
            }
        }
    }
}
