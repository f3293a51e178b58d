use dioxus::prelude::*;

use crate::content::{HERO_CTA, HERO_SUBTITLE, HERO_TITLE};

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    let config = crate::use_site_config();
    let lang = config.languages.default_lang;
    let reveal = config.reveal.marker_class;

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section { id: "top", class: "hero",
            div { class: "hero_inner",
                h1 {
                    class: "hero_title",
                    "data-de": HERO_TITLE.de,
                    "data-fr": HERO_TITLE.fr,
                    "data-en": HERO_TITLE.en,
                    dangerous_inner_html: HERO_TITLE.get(lang),
                }
                p {
                    class: "hero_subtitle {reveal}",
                    "data-de": HERO_SUBTITLE.de,
                    "data-fr": HERO_SUBTITLE.fr,
                    "data-en": HERO_SUBTITLE.en,
                    {HERO_SUBTITLE.get(lang)}
                }
                div { class: "cta_row",
                    a {
                        class: "btn primary",
                        href: "#contact",
                        "data-de": HERO_CTA.de,
                        "data-fr": HERO_CTA.fr,
                        "data-en": HERO_CTA.en,
                        {HERO_CTA.get(lang)}
                    }
                }
            }
        }
    }
}
