//! Headless copy of the rendered home page for tests.
//!
//! Builds the same markup contract the Dioxus components render (ids, classes,
//! `data-*` variants) on a [`MemoryDocument`], laid out top to bottom.

use crate::content::{self, Text};
use crate::dom::memory::{MemoryDocument, MemoryElement, NodeId};
use crate::dom::Document;
use crate::{toggle_aria_label, InteractionController, Lang, SiteConfig, SwitchMode};

pub const VIEWPORT_HEIGHT: f64 = 800.0;

pub struct SitePage {
    pub doc: MemoryDocument,
    pub config: SiteConfig,
    pub hamburger: NodeId,
    pub menu: NodeId,
    pub nav_links: Vec<NodeId>,
    /// One per language in selector mode, empty in toggle mode.
    pub lang_buttons: Vec<NodeId>,
    pub lang_toggle: Option<NodeId>,
    pub hero_title: NodeId,
    pub hero_subtitle: NodeId,
    pub services: NodeId,
    pub service_cards: Vec<NodeId>,
    pub about_body: NodeId,
    pub contact: NodeId,
    /// German-only note with no other variants.
    pub local_note: NodeId,
    pub placeholder_link: NodeId,
    pub broken_link: NodeId,
}

impl SitePage {
    /// Three-language selector page with default settings.
    pub fn new() -> Self {
        Self::with_config(SiteConfig::default())
    }

    /// Two-language toggle page (German and English).
    pub fn with_toggle() -> Self {
        let mut config = SiteConfig::default();
        config.languages.switcher = SwitchMode::Toggle {
            pair: [Lang::De, Lang::En],
        };
        Self::with_config(config)
    }

    pub fn with_config(config: SiteConfig) -> Self {
        let doc = MemoryDocument::new(VIEWPORT_HEIGHT);
        let lang = config.languages.default_lang;
        let active = config.active_class.as_str();
        let reveal = config.reveal.marker_class.as_str();

        let hamburger = doc.insert(
            MemoryElement::new("button")
                .id(&config.navigation.trigger_id)
                .class("hamburger")
                .at(0.0, 60.0),
        );
        let menu = doc.insert(
            MemoryElement::new("nav")
                .id(&config.navigation.menu_id)
                .class("nav_menu")
                .at(0.0, 60.0),
        );
        let nav_links = content::NAV_ITEMS
            .iter()
            .map(|item| {
                doc.insert(
                    localized(MemoryElement::new("a"), item.label, lang)
                        .class(&config.navigation.link_class)
                        .attr("href", item.href),
                )
            })
            .collect();

        let mut lang_buttons = Vec::new();
        let mut lang_toggle = None;
        match &config.languages.switcher {
            SwitchMode::Selector { languages } => {
                for code in languages {
                    let mut button = MemoryElement::new("button")
                        .class(&config.languages.button_class)
                        .attr("data-lang", code.code())
                        .text(code.label());
                    if *code == lang {
                        button = button.class(active);
                    }
                    lang_buttons.push(doc.insert(button));
                }
            }
            SwitchMode::Toggle { .. } => {
                let next = config
                    .languages
                    .switcher
                    .next_after(Some(lang))
                    .unwrap_or(lang);
                lang_toggle = Some(
                    doc.insert(
                        MemoryElement::new("button")
                            .id(&config.languages.toggle_id)
                            .attr("data-lang", next.code())
                            .attr("aria-label", &toggle_aria_label(next))
                            .text(next.label()),
                    ),
                );
            }
        }

        doc.insert(MemoryElement::new("section").id("top").at(0.0, 700.0));
        let hero_title = doc.insert(
            localized_markup(MemoryElement::new("h1"), content::HERO_TITLE, lang).at(200.0, 120.0),
        );
        let hero_subtitle = doc.insert(
            localized(MemoryElement::new("p"), content::HERO_SUBTITLE, lang)
                .class(reveal)
                .at(340.0, 60.0),
        );

        let services = doc.insert(MemoryElement::new("section").id("services").at(900.0, 700.0));
        let service_cards = content::SERVICES
            .iter()
            .enumerate()
            .map(|(index, service)| {
                doc.insert(
                    localized(MemoryElement::new("article"), service.body, lang)
                        .class("card")
                        .class(reveal)
                        .at(1000.0 + 200.0 * index as f64, 180.0),
                )
            })
            .collect();

        doc.insert(MemoryElement::new("section").id("about").at(1700.0, 500.0));
        let about_body = doc.insert(
            localized_markup(MemoryElement::new("p"), content::ABOUT_BODY, lang)
                .class(reveal)
                .at(1800.0, 200.0),
        );

        let contact = doc.insert(MemoryElement::new("section").id("contact").at(2300.0, 500.0));

        let local_note = doc.insert(
            MemoryElement::new("small")
                .attr("data-de", "Nur in der Schweiz verfügbar.")
                .text("Nur in der Schweiz verfügbar.")
                .at(2900.0, 20.0),
        );
        let placeholder_link = doc.insert(MemoryElement::new("a").attr("href", "#").text("#"));
        let broken_link = doc.insert(MemoryElement::new("a").attr("href", "#gallery").text("Galerie"));

        Self {
            doc,
            config,
            hamburger,
            menu,
            nav_links,
            lang_buttons,
            lang_toggle,
            hero_title,
            hero_subtitle,
            services,
            service_cards,
            about_body,
            contact,
            local_note,
            placeholder_link,
            broken_link,
        }
    }

    /// Install the controller and run the first reveal pass.
    pub fn install(&self) -> InteractionController<NodeId> {
        let mut controller = InteractionController::install(&self.doc, &self.config);
        controller.reveal_mut().evaluate(&self.doc);
        controller
    }

    pub fn button_for(&self, lang: Lang) -> Option<NodeId> {
        self.lang_buttons
            .iter()
            .copied()
            .find(|button| self.doc.attr(button, "data-lang").as_deref() == Some(lang.code()))
    }
}

impl Default for SitePage {
    fn default() -> Self {
        Self::new()
    }
}

fn localized(element: MemoryElement, text: Text, lang: Lang) -> MemoryElement {
    with_variants(element, text).text(text.get(lang))
}

fn localized_markup(element: MemoryElement, text: Text, lang: Lang) -> MemoryElement {
    with_variants(element, text).markup(text.get(lang))
}

fn with_variants(element: MemoryElement, text: Text) -> MemoryElement {
    element
        .attr(Lang::De.data_attr(), text.de)
        .attr(Lang::Fr.data_attr(), text.fr)
        .attr(Lang::En.data_attr(), text.en)
}
