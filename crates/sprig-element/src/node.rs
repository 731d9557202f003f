//! Tree nodes and the element payload.
//!
//! Only the parts of a node that attribute handling needs live here:
//! the kind-specific payload and an optional node-local error sink.
//! Parent/child linkage belongs to the tree layer.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use sprig_core::{ErrorSink, NodeKind};
use sprig_store::{AttributeStore, StoreConfig};

/// A markup element: a name plus its attributes.
#[derive(Debug)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) attrs: AttributeStore,
}

impl Element {
    /// The element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read access to the element's attributes.
    pub fn attrs(&self) -> &AttributeStore {
        &self.attrs
    }
}

/// Kind-specific node payload.
pub enum NodeData {
    /// Element with attributes.
    Element(Element),
    /// Integer value.
    Integer(i64),
    /// Opaque string.
    Opaque(String),
    /// Floating-point value.
    Real(f64),
    /// Text fragment; `whitespace` is true when it was preceded by whitespace.
    Text {
        /// Leading whitespace flag.
        whitespace: bool,
        /// The text itself.
        text: String,
    },
    /// Application-defined data.
    Custom(Box<dyn Any + Send>),
}

impl NodeData {
    /// The kind of this payload.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Element(_) => NodeKind::Element,
            Self::Integer(_) => NodeKind::Integer,
            Self::Opaque(_) => NodeKind::Opaque,
            Self::Real(_) => NodeKind::Real,
            Self::Text { .. } => NodeKind::Text,
            Self::Custom(_) => NodeKind::Custom,
        }
    }
}

impl fmt::Debug for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(e) => f.debug_tuple("Element").field(e).finish(),
            Self::Integer(v) => f.debug_tuple("Integer").field(v).finish(),
            Self::Opaque(s) => f.debug_tuple("Opaque").field(s).finish(),
            Self::Real(v) => f.debug_tuple("Real").field(v).finish(),
            Self::Text { whitespace, text } => f
                .debug_struct("Text")
                .field("whitespace", whitespace)
                .field("text", text)
                .finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A tree node.
///
/// Attribute operations live in [`crate::attr`]; on any node other than
/// an element they do nothing.
pub struct Node {
    pub(crate) data: NodeData,
    pub(crate) sink: Option<Arc<dyn ErrorSink>>,
}

impl Node {
    fn from_data(data: NodeData) -> Self {
        Self { data, sink: None }
    }

    /// New element with no attributes and the default store configuration.
    pub fn element(name: impl Into<String>) -> Self {
        Self::element_with(name, StoreConfig::default())
    }

    /// New element whose attribute store uses `config`.
    pub fn element_with(name: impl Into<String>, config: StoreConfig) -> Self {
        Self::from_data(NodeData::Element(Element {
            name: name.into(),
            attrs: AttributeStore::with_config(config),
        }))
    }

    /// New text node.
    pub fn text(whitespace: bool, text: impl Into<String>) -> Self {
        Self::from_data(NodeData::Text {
            whitespace,
            text: text.into(),
        })
    }

    /// New integer node.
    pub fn integer(value: i64) -> Self {
        Self::from_data(NodeData::Integer(value))
    }

    /// New real-number node.
    pub fn real(value: f64) -> Self {
        Self::from_data(NodeData::Real(value))
    }

    /// New opaque node.
    pub fn opaque(value: impl Into<String>) -> Self {
        Self::from_data(NodeData::Opaque(value.into()))
    }

    /// New node carrying application data.
    pub fn custom<T: Any + Send>(value: T) -> Self {
        Self::from_data(NodeData::Custom(Box::new(value)))
    }

    /// Route this node's failure reports to `sink` instead of the
    /// process-wide sink.
    pub fn with_error_sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Replace or clear the node-local error sink.
    pub fn set_error_sink(&mut self, sink: Option<Arc<dyn ErrorSink>>) {
        self.sink = sink;
    }

    /// The node kind.
    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }

    /// The payload.
    pub fn data(&self) -> &NodeData {
        &self.data
    }

    /// The element payload, if this is an element.
    pub fn as_element(&self) -> Option<&Element> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// The element name, if this is an element.
    pub fn element_name(&self) -> Option<&str> {
        self.as_element().map(Element::name)
    }

    /// The application data, if this is a custom node holding a `T`.
    pub fn custom_ref<T: Any>(&self) -> Option<&T> {
        match &self.data {
            NodeData::Custom(b) => b.downcast_ref(),
            _ => None,
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}
