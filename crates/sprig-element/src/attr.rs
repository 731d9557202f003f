//! Element attribute operations.
//!
//! These are the entry points the parser and writer use. Setters return
//! `Result` so callers can react, and additionally notify the error sink
//! of resource failures; callers that only want best-effort behaviour
//! can ignore the result and rely on the sink.
//!
//! Applied to a node that is not an element, setters return
//! [`AttrError::NotAnElement`] without reporting it, getters return
//! `None` and [`Node::delete_attr`] does nothing.

use std::fmt;

use sprig_core::{sink, AttrError, AttributeReader};
use sprig_store::{AttributePair, AttributeStore, StoreError};

use crate::node::{Node, NodeData};

impl Node {
    /// Set attribute `name` to a copy of `value`, replacing any existing
    /// value. `None` sets the attribute without a value.
    pub fn set_attr(&mut self, name: &str, value: Option<&str>) -> Result<(), AttrError> {
        self.mutate_attrs(name, |attrs| attrs.set(name, value))
    }

    /// Set attribute `name` to the formatted `args`.
    ///
    /// Usually called through [`set_attrf!`](crate::set_attrf).
    pub fn set_attr_fmt(&mut self, name: &str, args: fmt::Arguments<'_>) -> Result<(), AttrError> {
        self.mutate_attrs(name, |attrs| attrs.set_fmt(name, args))
    }

    fn mutate_attrs<F>(&mut self, name: &str, op: F) -> Result<(), AttrError>
    where
        F: FnOnce(&mut AttributeStore) -> Result<(), StoreError>,
    {
        let element = match &mut self.data {
            NodeData::Element(e) => e,
            other => {
                let kind = other.kind();
                tracing::trace!(%kind, attribute = name, "attribute set on non-element ignored");
                return Err(AttrError::NotAnElement { kind });
            }
        };
        op(&mut element.attrs).map_err(|e| {
            let err = e.into_attr_error(name, &element.name);
            sink::report(self.sink.as_ref(), &err);
            err
        })
    }

    /// Value of attribute `name`.
    ///
    /// `None` if the node is not an element or has no such attribute;
    /// `Some(None)` if the attribute is present without a value.
    pub fn attr_value(&self, name: &str) -> Option<Option<&str>> {
        self.as_element()?.attrs.value(name)
    }

    /// Name of the first attribute, in storage order, whose value is
    /// exactly `value`.
    pub fn attr_name_by_value(&self, value: &str) -> Option<&str> {
        self.as_element()?.attrs.name_by_value(value)
    }

    /// Remove attribute `name`, returning it.
    pub fn delete_attr(&mut self, name: &str) -> Option<AttributePair> {
        match &mut self.data {
            NodeData::Element(e) => e.attrs.remove(name),
            _ => None,
        }
    }

    /// Number of attributes; zero for non-elements.
    pub fn attr_count(&self) -> usize {
        self.as_element().map_or(0, |e| e.attrs.len())
    }

    /// Name and value of the attribute at storage position `index`.
    pub fn attr_at(&self, index: usize) -> Option<(&str, Option<&str>)> {
        let pair = self.as_element()?.attrs.get_index(index)?;
        Some((pair.name(), pair.value()))
    }

    /// Attributes in storage order; empty for non-elements.
    pub fn attrs_iter(&self) -> impl Iterator<Item = &AttributePair> + '_ {
        self.as_element().into_iter().flat_map(|e| e.attrs.iter())
    }

    /// The attribute store, if this is an element.
    pub fn attrs(&self) -> Option<&AttributeStore> {
        self.as_element().map(|e| e.attrs())
    }
}

impl AttributeReader for Node {
    fn attr_value(&self, name: &str) -> Option<Option<&str>> {
        Node::attr_value(self, name)
    }

    fn attr_name_by_value(&self, value: &str) -> Option<&str> {
        Node::attr_name_by_value(self, value)
    }

    fn attr_count(&self) -> usize {
        Node::attr_count(self)
    }
}
