use crate::dom::{Document, Query};
use crate::SiteConfig;

/// Mobile menu disclosure: a trigger and a menu panel sharing one open state.
#[derive(Debug, Clone)]
pub struct NavDisclosure<N> {
    trigger: N,
    menu: N,
    links: Vec<N>,
    open_class: String,
}

impl<N: Clone + PartialEq> NavDisclosure<N> {
    /// `None` when the page has no trigger or no menu; the feature is then skipped.
    pub fn locate<D: Document<Node = N>>(doc: &D, config: &SiteConfig) -> Option<Self> {
        let trigger = doc.element_by_id(&config.navigation.trigger_id)?;
        let menu = doc.element_by_id(&config.navigation.menu_id)?;
        let links = doc.query(Query::Class(&config.navigation.link_class));
        Some(Self {
            trigger,
            menu,
            links,
            open_class: config.active_class.clone(),
        })
    }

    pub fn trigger(&self) -> &N {
        &self.trigger
    }

    pub fn links(&self) -> &[N] {
        &self.links
    }

    pub fn is_open<D: Document<Node = N>>(&self, doc: &D) -> bool {
        doc.has_class(&self.trigger, &self.open_class)
    }

    /// Flip the menu and return the new state.
    pub fn toggle<D: Document<Node = N>>(&self, doc: &D) -> bool {
        let open = !self.is_open(doc);
        self.set_open(doc, open);
        open
    }

    pub fn close<D: Document<Node = N>>(&self, doc: &D) {
        self.set_open(doc, false);
    }

    // Both flags are written from one value so they can never disagree.
    fn set_open<D: Document<Node = N>>(&self, doc: &D, open: bool) {
        doc.set_class(&self.trigger, &self.open_class, open);
        doc.set_class(&self.menu, &self.open_class, open);
    }
}
