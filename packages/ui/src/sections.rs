use dioxus::prelude::*;

use crate::content::{
    ABOUT_BODY, ABOUT_TITLE, BACK_TO_TOP, BRAND, CONTACT_BODY, CONTACT_EMAIL, CONTACT_TITLE,
    IMPRINT_LINK, SERVICES, SERVICES_TITLE,
};

const SECTIONS_CSS: Asset = asset!("/assets/styling/sections.css");

#[component]
pub fn Services() -> Element {
    let config = crate::use_site_config();
    let lang = config.languages.default_lang;
    let reveal = config.reveal.marker_class;

    rsx! {
        document::Link { rel: "stylesheet", href: SECTIONS_CSS }

        section { id: "services", class: "section",
            h2 {
                class: "section_title",
                "data-de": SERVICES_TITLE.de,
                "data-fr": SERVICES_TITLE.fr,
                "data-en": SERVICES_TITLE.en,
                {SERVICES_TITLE.get(lang)}
            }
            div { class: "card_grid",
                for service in SERVICES {
                    article { key: "{service.title.en}", class: "card {reveal}",
                        h3 {
                            "data-de": service.title.de,
                            "data-fr": service.title.fr,
                            "data-en": service.title.en,
                            {service.title.get(lang)}
                        }
                        p {
                            "data-de": service.body.de,
                            "data-fr": service.body.fr,
                            "data-en": service.body.en,
                            {service.body.get(lang)}
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    let config = crate::use_site_config();
    let lang = config.languages.default_lang;
    let reveal = config.reveal.marker_class;

    rsx! {
        document::Link { rel: "stylesheet", href: SECTIONS_CSS }

        section { id: "about", class: "section section_alt",
            h2 {
                class: "section_title",
                "data-de": ABOUT_TITLE.de,
                "data-fr": ABOUT_TITLE.fr,
                "data-en": ABOUT_TITLE.en,
                {ABOUT_TITLE.get(lang)}
            }
            p {
                class: "lead {reveal}",
                "data-de": ABOUT_BODY.de,
                "data-fr": ABOUT_BODY.fr,
                "data-en": ABOUT_BODY.en,
                dangerous_inner_html: ABOUT_BODY.get(lang),
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let config = crate::use_site_config();
    let lang = config.languages.default_lang;
    let reveal = config.reveal.marker_class;

    rsx! {
        document::Link { rel: "stylesheet", href: SECTIONS_CSS }

        section { id: "contact", class: "section",
            h2 {
                class: "section_title",
                "data-de": CONTACT_TITLE.de,
                "data-fr": CONTACT_TITLE.fr,
                "data-en": CONTACT_TITLE.en,
                {CONTACT_TITLE.get(lang)}
            }
            div { class: "contact_panel {reveal}",
                p {
                    "data-de": CONTACT_BODY.de,
                    "data-fr": CONTACT_BODY.fr,
                    "data-en": CONTACT_BODY.en,
                    {CONTACT_BODY.get(lang)}
                }
                a { class: "btn primary", href: "mailto:{CONTACT_EMAIL}", {CONTACT_EMAIL} }
            }
        }
    }
}

#[component]
pub fn SiteFooter() -> Element {
    let lang = crate::use_site_config().languages.default_lang;

    rsx! {
        footer { class: "site_footer",
            span { class: "hint", "© {BRAND}" }
            a {
                href: "#top",
                "data-de": BACK_TO_TOP.de,
                "data-fr": BACK_TO_TOP.fr,
                "data-en": BACK_TO_TOP.en,
                {BACK_TO_TOP.get(lang)}
            }
            a {
                href: "/impressum",
                "data-de": IMPRINT_LINK.de,
                "data-fr": IMPRINT_LINK.fr,
                "data-en": IMPRINT_LINK.en,
                {IMPRINT_LINK.get(lang)}
            }
        }
    }
}
