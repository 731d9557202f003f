//! A single attribute name/value pair.

/// One attribute of an element.
///
/// The name is always present. The value is optional: `None` is an
/// attribute written without a value (`<input disabled>`), which is
/// distinct from an empty value (`<input value="">`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributePair {
    pub(crate) name: String,
    pub(crate) value: Option<String>,
}

impl AttributePair {
    /// The attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attribute value, if it has one.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Consume the pair, returning its owned name and value.
    pub fn into_parts(self) -> (String, Option<String>) {
        (self.name, self.value)
    }
}
