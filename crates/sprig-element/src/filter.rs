//! Attribute predicates for locating elements.
//!
//! An [`AttrFilter`] names an attribute that must be present and,
//! optionally, the exact value it must have. [`Node::matches`] combines
//! it with an element-name wildcard; [`find_element`] applies both over
//! a sequence of nodes.

use sprig_core::AttributeReader;

use crate::node::Node;

/// Requirement on one attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttrFilter<'a> {
    /// Attribute that must be present.
    pub name: &'a str,
    /// Exact value required, or `None` to accept any value (including
    /// no value at all).
    pub value: Option<&'a str>,
}

impl<'a> AttrFilter<'a> {
    /// Match any node that has attribute `name`.
    pub fn present(name: &'a str) -> Self {
        Self { name, value: None }
    }

    /// Match nodes whose attribute `name` has exactly `value`.
    pub fn equals(name: &'a str, value: &'a str) -> Self {
        Self {
            name,
            value: Some(value),
        }
    }

    /// Whether `reader` satisfies this filter.
    pub fn matches<R: AttributeReader + ?Sized>(&self, reader: &R) -> bool {
        match (reader.attr_value(self.name), self.value) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(actual), Some(wanted)) => actual == Some(wanted),
        }
    }
}

impl Node {
    /// Whether this node is an element named `name` (any name if `None`)
    /// that satisfies `filter` (no attribute requirement if `None`).
    pub fn matches(&self, name: Option<&str>, filter: Option<AttrFilter<'_>>) -> bool {
        let Some(element_name) = self.element_name() else {
            return false;
        };
        if name.is_some_and(|n| n != element_name) {
            return false;
        }
        filter.map_or(true, |f| f.matches(self))
    }
}

/// First node in `nodes` that [`Node::matches`] `name` and `filter`.
pub fn find_element<'n, I>(nodes: I, name: Option<&str>, filter: Option<AttrFilter<'_>>) -> Option<&'n Node>
where
    I: IntoIterator<Item = &'n Node>,
{
    nodes.into_iter().find(|n| n.matches(name, filter))
}
