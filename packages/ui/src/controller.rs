use crate::dom::{Document, Query};
use crate::{
    AnchorNavigator, LocalizationSwitcher, NavDisclosure, RevealMonitor, SiteConfig, SwitchMode,
};

/// What a click on a bound element does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Switch to the clicked button's `data-lang`, unless already active.
    SelectLanguage,
    /// Flip between the two toggle languages.
    ToggleLanguage,
    ToggleMenu,
    CloseMenu,
    /// Smooth-scroll to the clicked link's `href` fragment.
    FollowAnchor,
}

impl Action {
    /// Whether the browser's own handling of the click must be suppressed.
    pub fn prevents_default(self) -> bool {
        matches!(self, Action::FollowAnchor)
    }
}

/// A click handler attached to one element.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding<N> {
    pub trigger: N,
    pub action: Action,
}

/// Page-wide interaction state: the active language, the menu, pending
/// reveals and the click bindings, built once when the page is ready.
#[derive(Debug, Clone)]
pub struct InteractionController<N> {
    switcher: LocalizationSwitcher,
    nav: Option<NavDisclosure<N>>,
    reveal: RevealMonitor<N>,
    anchors: AnchorNavigator,
    bindings: Vec<Binding<N>>,
}

impl<N: Clone + PartialEq> InteractionController<N> {
    pub fn install<D: Document<Node = N>>(doc: &D, config: &SiteConfig) -> Self {
        let switcher = LocalizationSwitcher::new(config);
        let nav = NavDisclosure::locate(doc, config);
        let reveal = RevealMonitor::locate(doc, config);
        let anchors = AnchorNavigator::new(config);

        let mut bindings = Vec::new();
        match switcher.mode() {
            SwitchMode::Selector { .. } => {
                for button in doc.query(Query::Class(&config.languages.button_class)) {
                    bindings.push(Binding {
                        trigger: button,
                        action: Action::SelectLanguage,
                    });
                }
            }
            SwitchMode::Toggle { .. } => {
                if let Some(toggle) = doc.element_by_id(&config.languages.toggle_id) {
                    bindings.push(Binding {
                        trigger: toggle,
                        action: Action::ToggleLanguage,
                    });
                }
            }
        }
        if let Some(nav) = &nav {
            bindings.push(Binding {
                trigger: nav.trigger().clone(),
                action: Action::ToggleMenu,
            });
            for link in nav.links() {
                bindings.push(Binding {
                    trigger: link.clone(),
                    action: Action::CloseMenu,
                });
            }
        }
        for link in anchors.links(doc) {
            bindings.push(Binding {
                trigger: link,
                action: Action::FollowAnchor,
            });
        }

        tracing::debug!(
            "interactions installed: {} bindings, {} reveal targets, menu {}",
            bindings.len(),
            reveal.pending().len(),
            if nav.is_some() { "present" } else { "absent" }
        );

        Self {
            switcher,
            nav,
            reveal,
            anchors,
            bindings,
        }
    }

    pub fn bindings(&self) -> &[Binding<N>] {
        &self.bindings
    }

    pub fn switcher(&self) -> &LocalizationSwitcher {
        &self.switcher
    }

    pub fn nav(&self) -> Option<&NavDisclosure<N>> {
        self.nav.as_ref()
    }

    pub fn reveal(&self) -> &RevealMonitor<N> {
        &self.reveal
    }

    pub fn reveal_mut(&mut self) -> &mut RevealMonitor<N> {
        &mut self.reveal
    }

    pub fn set_language<D: Document<Node = N>>(&mut self, doc: &D, code: &str) {
        self.switcher.set_language(doc, code);
    }

    /// Run one bound action for a click on `trigger`.
    ///
    /// Returns whether the click's default behavior must be prevented.
    pub fn dispatch<D: Document<Node = N>>(&mut self, doc: &D, trigger: &N, action: Action) -> bool {
        match action {
            Action::SelectLanguage => {
                if let Some(code) = doc.attr(trigger, "data-lang") {
                    self.switcher.select(doc, &code);
                }
            }
            Action::ToggleLanguage => {
                self.switcher.toggle(doc);
            }
            Action::ToggleMenu => {
                if let Some(nav) = &self.nav {
                    nav.toggle(doc);
                }
            }
            Action::CloseMenu => {
                if let Some(nav) = &self.nav {
                    nav.close(doc);
                }
            }
            Action::FollowAnchor => {
                if let Some(href) = doc.attr(trigger, "href") {
                    self.anchors.follow(doc, &href);
                }
            }
        }
        action.prevents_default()
    }

    /// Run every action bound to `node`, in binding order.
    ///
    /// Returns whether any of them prevents the default behavior.
    pub fn click<D: Document<Node = N>>(&mut self, doc: &D, node: &N) -> bool {
        let actions: Vec<Action> = self
            .bindings
            .iter()
            .filter(|binding| binding.trigger == *node)
            .map(|binding| binding.action)
            .collect();

        let mut prevented = false;
        for action in actions {
            prevented |= self.dispatch(doc, node, action);
        }
        prevented
    }
}
