//! Benchmark profiles and utilities for the Sprig markup tree.
//!
//! - [`typical_attributes`]: a realistic attribute set for an HTML element
//! - [`populated_element`]: an element pre-filled with `n` attributes

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sprig_element::Node;
use sprig_store::{GrowthPolicy, StoreConfig};

/// Eight name/value pairs of the kind a parser sees on a form input.
pub fn typical_attributes() -> [(&'static str, Option<&'static str>); 8] {
    [
        ("id", Some("email")),
        ("name", Some("email")),
        ("type", Some("email")),
        ("class", Some("form-control input-lg")),
        ("placeholder", Some("you@example.com")),
        ("autocomplete", Some("email")),
        ("required", None),
        ("aria-describedby", Some("email-help")),
    ]
}

/// An element named `div` holding `n` attributes `attr0..attr{n-1}`,
/// each with value `value{i}`.
///
/// # Panics
///
/// Panics if an insertion fails, which the default allocator never causes.
pub fn populated_element(n: usize, growth: GrowthPolicy) -> Node {
    let mut node = Node::element_with("div", StoreConfig::new().with_growth(growth));
    for i in 0..n {
        node.set_attr(&format!("attr{i}"), Some(&format!("value{i}")))
            .expect("system allocator admits every request");
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populated_element_has_n_attributes() {
        let node = populated_element(12, GrowthPolicy::Doubling);
        assert_eq!(node.attr_count(), 12);
        assert_eq!(node.attr_value("attr11"), Some(Some("value11")));
    }

    #[test]
    fn typical_attributes_have_unique_names() {
        let attrs = typical_attributes();
        for (i, (a, _)) in attrs.iter().enumerate() {
            assert!(attrs[i + 1..].iter().all(|(b, _)| a != b));
        }
    }
}
