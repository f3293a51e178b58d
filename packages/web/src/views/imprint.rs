use dioxus::prelude::*;
use ui::content::{CONTACT_EMAIL, IMPRINT_BACK, IMPRINT_BODY, IMPRINT_TITLE};
use ui::{SiteFooter, SiteHeader};

/// Legal notice. Shares the header and language controls with the home page,
/// without the section links.
#[component]
pub fn Imprint() -> Element {
    ui::use_interactions();
    let lang = ui::use_site_config().languages.default_lang;

    rsx! {
        SiteHeader { sections: false }
        main { class: "page",
            h1 {
                "data-de": IMPRINT_TITLE.de,
                "data-fr": IMPRINT_TITLE.fr,
                "data-en": IMPRINT_TITLE.en,
                {IMPRINT_TITLE.get(lang)}
            }
            p {
                "data-de": IMPRINT_BODY.de,
                "data-fr": IMPRINT_BODY.fr,
                "data-en": IMPRINT_BODY.en,
                dangerous_inner_html: IMPRINT_BODY.get(lang),
            }
            p {
                a { href: "mailto:{CONTACT_EMAIL}", {CONTACT_EMAIL} }
            }
            a {
                class: "btn",
                href: "/",
                "data-de": IMPRINT_BACK.de,
                "data-fr": IMPRINT_BACK.fr,
                "data-en": IMPRINT_BACK.en,
                {IMPRINT_BACK.get(lang)}
            }
        }
        SiteFooter {}
    }
}
