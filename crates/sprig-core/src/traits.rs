//! Read-only attribute access.

/// Read access to the attributes of one element.
///
/// Implemented by the attribute store itself and by tree nodes, so
/// that matching and serialization code can work against either.
pub trait AttributeReader {
    /// Value of the attribute called `name`.
    ///
    /// `None` means no such attribute. `Some(None)` means the attribute
    /// is present without a value, which is distinct from `Some(Some(""))`.
    fn attr_value(&self, name: &str) -> Option<Option<&str>>;

    /// Name of the first attribute, in storage order, whose value is
    /// exactly `value`. Attributes without a value never match.
    fn attr_name_by_value(&self, value: &str) -> Option<&str>;

    /// Number of attributes.
    fn attr_count(&self) -> usize;

    /// Whether an attribute called `name` exists.
    fn has_attr(&self, name: &str) -> bool {
        self.attr_value(name).is_some()
    }
}
