use std::borrow::Cow;

use crate::dom::{Document, Query, ScrollRequest};
use crate::SiteConfig;

/// A fragment link with no target, used as a placeholder.
pub const BARE_FRAGMENT: &str = "#";

/// What following a fragment link did.
#[derive(Debug, Clone, PartialEq)]
pub enum AnchorOutcome {
    /// The href was the bare `#`.
    Placeholder,
    /// No element carries the fragment's id.
    Unresolved,
    Scrolled(ScrollRequest),
}

/// Document scroll position that puts an element `header_offset` below the top.
pub fn scroll_destination(target_top: f64, scroll_offset: f64, header_offset: f64) -> f64 {
    target_top + scroll_offset - header_offset
}

/// Element id named by a same-page href, percent-decoded.
pub fn fragment_id(href: &str) -> Option<Cow<'_, str>> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        return None;
    }
    Some(urlencoding::decode(fragment).unwrap_or(Cow::Borrowed(fragment)))
}

/// Smooth scrolling for same-page links, clearing the fixed header.
#[derive(Debug, Clone)]
pub struct AnchorNavigator {
    header_offset: f64,
}

impl AnchorNavigator {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            header_offset: config.anchors.header_offset,
        }
    }

    /// Every link on the page whose href starts with `#`.
    pub fn links<D: Document>(&self, doc: &D) -> Vec<D::Node> {
        doc.query(Query::LinksWithPrefix(BARE_FRAGMENT))
    }

    pub fn follow<D: Document>(&self, doc: &D, href: &str) -> AnchorOutcome {
        if href == BARE_FRAGMENT {
            return AnchorOutcome::Placeholder;
        }
        let Some(target) = fragment_id(href).and_then(|id| doc.element_by_id(&id)) else {
            return AnchorOutcome::Unresolved;
        };

        let top = scroll_destination(doc.rect(&target).top, doc.scroll_offset(), self.header_offset);
        let request = ScrollRequest::smooth(top);
        doc.scroll_to(request);
        AnchorOutcome::Scrolled(request)
    }
}
