use dioxus::prelude::*;

use crate::content::{NavItem, BRAND, MENU_LABEL, NAV_ITEMS};
use crate::{toggle_aria_label, SwitchMode};

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

/// Fixed site header:
/// - brand link back to the top of the page (home from other pages)
/// - hamburger trigger for the mobile menu
/// - section links (optional) and the language controls inside the menu
#[component]
pub fn SiteHeader(#[props(default = true)] sections: bool) -> Element {
    let config = crate::use_site_config();
    let lang = config.languages.default_lang;
    let trigger_id = config.navigation.trigger_id;
    let menu_id = config.navigation.menu_id;
    let link_class = config.navigation.link_class;
    let items: &[NavItem] = if sections { &NAV_ITEMS } else { &[] };
    let brand_href = if sections { "#top" } else { "/" };

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }

        header { class: "site_header",
            div { class: "site_header_inner",
                a { class: "brand", href: brand_href,
                    span { class: "brand_mark" }
                    span { class: "brand_name", {BRAND} }
                }
                button {
                    id: "{trigger_id}",
                    class: "hamburger",
                    r#type: "button",
                    "aria-label": MENU_LABEL,
                    span { class: "hamburger_bar" }
                    span { class: "hamburger_bar" }
                    span { class: "hamburger_bar" }
                }
                nav { id: "{menu_id}", class: "nav_menu",
                    for item in items.iter().copied() {
                        a {
                            key: "{item.href}",
                            class: "{link_class}",
                            href: item.href,
                            "data-de": item.label.de,
                            "data-fr": item.label.fr,
                            "data-en": item.label.en,
                            {item.label.get(lang)}
                        }
                    }
                    LanguageControls {}
                }
            }
        }
    }
}

/// Language controls for the configured switcher, rendered in the default language's state.
#[component]
fn LanguageControls() -> Element {
    let config = crate::use_site_config();
    let active = config.languages.default_lang;

    match &config.languages.switcher {
        SwitchMode::Selector { languages } => {
            let buttons: Vec<(&'static str, &'static str, String)> = languages
                .iter()
                .map(|lang| {
                    let class = if *lang == active {
                        format!("{} {}", config.languages.button_class, config.active_class)
                    } else {
                        config.languages.button_class.clone()
                    };
                    (lang.code(), lang.label(), class)
                })
                .collect();

            rsx! {
                div { class: "lang_switch",
                    for (code, label, class) in buttons {
                        button {
                            key: "{code}",
                            r#type: "button",
                            class: "{class}",
                            "data-lang": code,
                            {label}
                        }
                    }
                }
            }
        }
        SwitchMode::Toggle { .. } => {
            let next = config
                .languages
                .switcher
                .next_after(Some(active))
                .unwrap_or(active);
            let toggle_id = config.languages.toggle_id.clone();

            rsx! {
                button {
                    id: "{toggle_id}",
                    class: "lang_toggle",
                    r#type: "button",
                    "data-lang": next.code(),
                    "aria-label": toggle_aria_label(next),
                    {next.label()}
                }
            }
        }
    }
}
