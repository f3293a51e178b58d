use dioxus::prelude::*;
use ui::{About, Contact, Hero, Services, SiteFooter, SiteHeader};

#[component]
pub fn Home() -> Element {
    ui::use_interactions();

    rsx! {
        SiteHeader {}
        main {
            Hero {}
            Services {}
            About {}
            Contact {}
        }
        SiteFooter {}
    }
}
