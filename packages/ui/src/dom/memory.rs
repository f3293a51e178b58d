//! In-memory [`Document`] for tests and headless checks.
//!
//! Elements live in a flat arena in insertion (document) order. Geometry is
//! stored page-relative and reported viewport-relative, so scrolling moves
//! every element the way a browser would.

use std::cell::RefCell;

use super::{ContentShape, Document, Query, Rect, ScrollRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Children of a memory element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// A single text node.
    Text(String),
    /// Anything else, kept as serialized HTML. Empty means no children.
    Markup(String),
}

impl Content {
    fn from_markup(markup: &str) -> Self {
        // Markup without tags parses to exactly one text node, entities decoded.
        if !markup.is_empty() && !markup.contains('<') {
            Content::Text(decode_entities(markup))
        } else {
            Content::Markup(markup.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Content::Text(text) | Content::Markup(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryElement {
    tag: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    content: Content,
    page_top: f64,
    height: f64,
}

impl MemoryElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            classes: Vec::new(),
            attrs: Vec::new(),
            content: Content::Markup(String::new()),
            page_top: 0.0,
            height: 0.0,
        }
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn class(mut self, class: &str) -> Self {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        write_attr(&mut self.attrs, name, value);
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.content = Content::Text(text.to_string());
        self
    }

    pub fn markup(mut self, markup: &str) -> Self {
        self.content = Content::from_markup(markup);
        self
    }

    /// Page-relative box: distance from the top of the document and height.
    pub fn at(mut self, page_top: f64, height: f64) -> Self {
        self.page_top = page_top;
        self.height = height;
        self
    }
}

/// Decodes the character references a tagless string can carry. Unknown ones stay literal.
fn decode_entities(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let decoded = tail.find(';').and_then(|end| {
            let ch = match &tail[1..end] {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some('\u{a0}'),
                code => code.strip_prefix('#').and_then(|num| {
                    let value = match num.strip_prefix(['x', 'X']) {
                        Some(hex) => u32::from_str_radix(hex, 16).ok(),
                        None => num.parse().ok(),
                    };
                    value.and_then(char::from_u32)
                }),
            };
            ch.map(|ch| (ch, end))
        });
        match decoded {
            Some((ch, end)) => {
                out.push(ch);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn write_attr(attrs: &mut Vec<(String, String)>, name: &str, value: &str) {
    let name = name.to_ascii_lowercase();
    match attrs.iter_mut().find(|(n, _)| *n == name) {
        Some((_, v)) => *v = value.to_string(),
        None => attrs.push((name, value.to_string())),
    }
}

#[derive(Debug, Default)]
struct Inner {
    elements: Vec<MemoryElement>,
    lang: Option<String>,
    scroll_offset: f64,
    viewport_height: f64,
    scrolls: Vec<ScrollRequest>,
}

#[derive(Debug, Default)]
pub struct MemoryDocument {
    inner: RefCell<Inner>,
}

impl MemoryDocument {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            inner: RefCell::new(Inner {
                viewport_height,
                ..Inner::default()
            }),
        }
    }

    pub fn insert(&self, element: MemoryElement) -> NodeId {
        let mut inner = self.inner.borrow_mut();
        inner.elements.push(element);
        NodeId(inner.elements.len() - 1)
    }

    pub fn content(&self, node: NodeId) -> Option<Content> {
        self.with_element(node, |el| el.content.clone())
    }

    /// The element's content as a string, markup included.
    pub fn text(&self, node: NodeId) -> String {
        self.with_element(node, |el| el.content.as_str().to_string())
            .unwrap_or_default()
    }

    pub fn document_lang(&self) -> Option<String> {
        self.inner.borrow().lang.clone()
    }

    /// Scroll requests issued so far, oldest first.
    pub fn scroll_requests(&self) -> Vec<ScrollRequest> {
        self.inner.borrow().scrolls.clone()
    }

    pub fn set_scroll_offset(&self, offset: f64) {
        self.inner.borrow_mut().scroll_offset = offset.max(0.0);
    }

    fn with_element<T>(&self, node: NodeId, f: impl FnOnce(&MemoryElement) -> T) -> Option<T> {
        self.inner.borrow().elements.get(node.0).map(f)
    }

    fn with_element_mut(&self, node: NodeId, f: impl FnOnce(&mut MemoryElement)) {
        if let Some(el) = self.inner.borrow_mut().elements.get_mut(node.0) {
            f(el);
        }
    }
}

fn matches(el: &MemoryElement, query: Query<'_>) -> bool {
    let has_attr = |name: &str| el.attrs.iter().any(|(n, _)| n == name);
    match query {
        Query::Class(class) => el.classes.iter().any(|c| c == class),
        Query::AnyAttr(names) => names.iter().any(|name| has_attr(*name)),
        Query::LinksWithPrefix(prefix) => {
            el.tag == "a"
                && el
                    .attrs
                    .iter()
                    .any(|(n, v)| n == "href" && v.starts_with(prefix))
        }
    }
}

impl Document for MemoryDocument {
    type Node = NodeId;

    fn set_document_lang(&self, code: &str) {
        self.inner.borrow_mut().lang = Some(code.to_string());
    }

    fn query(&self, query: Query<'_>) -> Vec<NodeId> {
        self.inner
            .borrow()
            .elements
            .iter()
            .enumerate()
            .filter(|(_, el)| matches(el, query))
            .map(|(index, _)| NodeId(index))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.inner
            .borrow()
            .elements
            .iter()
            .position(|el| el.attrs.iter().any(|(n, v)| n == "id" && v == id))
            .map(NodeId)
    }

    fn attr(&self, node: &NodeId, name: &str) -> Option<String> {
        let name = name.to_ascii_lowercase();
        self.with_element(*node, |el| {
            el.attrs
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.clone())
        })
        .flatten()
    }

    fn set_attr(&self, node: &NodeId, name: &str, value: &str) {
        self.with_element_mut(*node, |el| write_attr(&mut el.attrs, name, value));
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.with_element(*node, |el| el.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    fn set_class(&self, node: &NodeId, class: &str, on: bool) {
        self.with_element_mut(*node, |el| {
            el.classes.retain(|c| c != class);
            if on {
                el.classes.push(class.to_string());
            }
        });
    }

    fn content_shape(&self, node: &NodeId) -> ContentShape {
        match self.content(*node) {
            Some(Content::Text(_)) => ContentShape::SingleText,
            _ => ContentShape::Mixed,
        }
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        self.with_element_mut(*node, |el| el.content = Content::Text(text.to_string()));
    }

    fn set_markup(&self, node: &NodeId, markup: &str) {
        self.with_element_mut(*node, |el| el.content = Content::from_markup(markup));
    }

    fn rect(&self, node: &NodeId) -> Rect {
        let scroll_offset = self.scroll_offset();
        self.with_element(*node, |el| Rect {
            top: el.page_top - scroll_offset,
            height: el.height,
        })
        .unwrap_or_default()
    }

    fn scroll_offset(&self) -> f64 {
        self.inner.borrow().scroll_offset
    }

    fn viewport_height(&self) -> f64 {
        self.inner.borrow().viewport_height
    }

    fn scroll_to(&self, request: ScrollRequest) {
        let mut inner = self.inner.borrow_mut();
        inner.scrolls.push(request);
        // Browsers clamp at the top edge; smooth scrolls settle on the same spot.
        inner.scroll_offset = request.top.max(0.0);
    }
}
