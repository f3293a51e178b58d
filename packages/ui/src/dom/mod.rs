//! The slice of the page the interaction controller reads and writes.
//!
//! Everything the controller does goes through [`Document`], so the same
//! behavior runs against the live browser DOM ([`web::WebDocument`], wasm32
//! only) and against [`memory::MemoryDocument`] in tests.

pub mod memory;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Element lookups the controller needs. Results come back in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query<'a> {
    /// Elements carrying the class.
    Class(&'a str),
    /// Elements carrying at least one of the attributes.
    AnyAttr(&'a [&'a str]),
    /// Hyperlinks whose `href` starts with the prefix.
    LinksWithPrefix(&'a str),
}

impl Query<'_> {
    /// CSS selector equivalent, for backends that query with selectors.
    pub fn to_selector(&self) -> String {
        match self {
            Query::Class(class) => format!(".{class}"),
            Query::AnyAttr(attrs) => attrs
                .iter()
                .map(|attr| format!("[{attr}]"))
                .collect::<Vec<_>>()
                .join(", "),
            Query::LinksWithPrefix(prefix) => format!("a[href^=\"{prefix}\"]"),
        }
    }
}

/// How an element's children look right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentShape {
    /// Exactly one child, and it is a text node.
    SingleText,
    /// No children, several children, or element children.
    Mixed,
}

/// Viewport-relative element box, vertical axis only.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// A vertical scroll the host should perform. Fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    pub fn smooth(top: f64) -> Self {
        Self {
            top,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

/// Host document access.
///
/// Methods take `&self` like the DOM does; backends use interior mutability.
/// Writes to missing or detached nodes are silently dropped.
pub trait Document {
    type Node: Clone + PartialEq;

    /// Set the document-wide `lang` attribute on the root element.
    fn set_document_lang(&self, code: &str);

    fn query(&self, query: Query<'_>) -> Vec<Self::Node>;
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    fn attr(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attr(&self, node: &Self::Node, name: &str, value: &str);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn set_class(&self, node: &Self::Node, class: &str, on: bool);

    fn content_shape(&self, node: &Self::Node) -> ContentShape;
    /// Replace the children with a single text node.
    fn set_text(&self, node: &Self::Node, text: &str);
    /// Replace the children by parsing `markup` as HTML.
    fn set_markup(&self, node: &Self::Node, markup: &str);

    fn rect(&self, node: &Self::Node) -> Rect;
    fn scroll_offset(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn scroll_to(&self, request: ScrollRequest);
}
