//! [`Document`] over the live browser DOM.

use wasm_bindgen::JsCast;
use web_sys::{Element, Node, ScrollToOptions, Window};

use super::{ContentShape, Document, Query, Rect, ScrollBehavior, ScrollRequest};

#[derive(Clone)]
pub struct WebDocument {
    window: Window,
    document: web_sys::Document,
}

impl WebDocument {
    /// The page this wasm module runs in, if there is one.
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

impl Document for WebDocument {
    type Node = Element;

    fn set_document_lang(&self, code: &str) {
        if let Some(root) = self.document.document_element() {
            let _ = root.set_attribute("lang", code);
        }
    }

    fn query(&self, query: Query<'_>) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(&query.to_selector()) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn attr(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attr(&self, node: &Element, name: &str, value: &str) {
        let _ = node.set_attribute(name, value);
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn set_class(&self, node: &Element, class: &str, on: bool) {
        let list = node.class_list();
        let _ = if on {
            list.add_1(class)
        } else {
            list.remove_1(class)
        };
    }

    fn content_shape(&self, node: &Element) -> ContentShape {
        let children = node.child_nodes();
        match children.item(0) {
            Some(child) if children.length() == 1 && child.node_type() == Node::TEXT_NODE => {
                ContentShape::SingleText
            }
            _ => ContentShape::Mixed,
        }
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_markup(&self, node: &Element, markup: &str) {
        node.set_inner_html(markup);
    }

    fn rect(&self, node: &Element) -> Rect {
        let rect = node.get_bounding_client_rect();
        Rect {
            top: rect.top(),
            height: rect.height(),
        }
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_to(&self, request: ScrollRequest) {
        let options = ScrollToOptions::new();
        options.set_top(request.top);
        options.set_behavior(match request.behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
