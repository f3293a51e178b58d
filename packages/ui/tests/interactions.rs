use ui::dom::memory::Content;
use ui::dom::{Document, ScrollRequest};
use ui::test_utils::SitePage;
use ui::{content, Lang};

fn snapshot(page: &SitePage) -> Vec<(String, bool)> {
    let mut nodes = vec![
        page.hero_title,
        page.hero_subtitle,
        page.about_body,
        page.local_note,
        page.hamburger,
        page.menu,
    ];
    nodes.extend(&page.nav_links);
    nodes.extend(&page.lang_buttons);
    nodes.extend(&page.service_cards);
    nodes
        .into_iter()
        .map(|node| (page.doc.text(node), page.doc.has_class(&node, "active")))
        .collect()
}

#[test]
fn selecting_a_language_rewrites_every_variant() {
    let page = SitePage::new();
    let mut controller = page.install();

    for lang in [Lang::Fr, Lang::En, Lang::De] {
        let button = page.button_for(lang).expect("button per language");
        controller.click(&page.doc, &button);

        assert_eq!(page.doc.document_lang().as_deref(), Some(lang.code()));
        assert_eq!(page.doc.text(page.hero_title), content::HERO_TITLE.get(lang));
        assert_eq!(page.doc.text(page.hero_subtitle), content::HERO_SUBTITLE.get(lang));
        assert_eq!(page.doc.text(page.about_body), content::ABOUT_BODY.get(lang));
        for (link, item) in page.nav_links.iter().zip(content::NAV_ITEMS) {
            assert_eq!(page.doc.text(*link), item.label.get(lang));
        }
        for (card, service) in page.service_cards.iter().zip(content::SERVICES) {
            assert_eq!(page.doc.text(*card), service.body.get(lang));
        }
    }
}

#[test]
fn shapes_decide_the_assignment_mode() {
    let page = SitePage::new();
    let mut controller = page.install();
    controller.set_language(&page.doc, "en");

    assert_eq!(
        page.doc.content(page.hero_subtitle),
        Some(Content::Text(content::HERO_SUBTITLE.en.to_string()))
    );
    assert_eq!(
        page.doc.content(page.hero_title),
        Some(Content::Markup(content::HERO_TITLE.en.to_string()))
    );
}

#[test]
fn elements_without_the_variant_keep_their_text() {
    let page = SitePage::new();
    let mut controller = page.install();

    controller.set_language(&page.doc, "fr");
    assert_eq!(page.doc.text(page.local_note), "Nur in der Schweiz verfügbar.");

    controller.set_language(&page.doc, "en");
    assert_eq!(page.doc.text(page.local_note), "Nur in der Schweiz verfügbar.");
}

#[test]
fn set_language_is_idempotent() {
    let page = SitePage::new();
    let mut controller = page.install();

    controller.set_language(&page.doc, "fr");
    let once = (snapshot(&page), page.doc.document_lang());
    controller.set_language(&page.doc, "fr");
    let twice = (snapshot(&page), page.doc.document_lang());

    assert_eq!(once, twice);
}

#[test]
fn clicking_the_active_language_changes_nothing() {
    let page = SitePage::new();
    let mut controller = page.install();
    let before = snapshot(&page);

    let de = page.button_for(Lang::De).unwrap();
    controller.click(&page.doc, &de);

    assert_eq!(snapshot(&page), before);
    assert_eq!(page.doc.document_lang(), None);
}

#[test]
fn exactly_one_button_is_active() {
    let page = SitePage::new();
    let mut controller = page.install();

    let en = page.button_for(Lang::En).unwrap();
    controller.click(&page.doc, &en);

    let active: Vec<_> = page
        .lang_buttons
        .iter()
        .filter(|button| page.doc.has_class(button, "active"))
        .copied()
        .collect();
    assert_eq!(active, vec![en]);
    assert_eq!(controller.switcher().active(), Some(Lang::En));
}

#[test]
fn toggle_flips_and_returns() {
    let page = SitePage::with_toggle();
    let mut controller = page.install();
    let toggle = page.lang_toggle.expect("toggle page has a toggle");
    assert!(page.lang_buttons.is_empty());

    controller.click(&page.doc, &toggle);
    assert_eq!(controller.switcher().active(), Some(Lang::En));
    assert_eq!(page.doc.text(page.hero_subtitle), content::HERO_SUBTITLE.en);
    assert_eq!(page.doc.text(toggle), "DE");
    assert_eq!(
        page.doc.attr(&toggle, "aria-label").as_deref(),
        Some("Switch language to Deutsch")
    );

    controller.click(&page.doc, &toggle);
    assert_eq!(controller.switcher().active(), Some(Lang::De));
    assert_eq!(page.doc.text(page.hero_subtitle), content::HERO_SUBTITLE.de);
    assert_eq!(page.doc.text(toggle), "EN");
}

#[test]
fn menu_flags_stay_in_lockstep() {
    let page = SitePage::new();
    let mut controller = page.install();
    let lockstep = |page: &SitePage| {
        page.doc.has_class(&page.hamburger, "active") == page.doc.has_class(&page.menu, "active")
    };

    controller.click(&page.doc, &page.hamburger);
    assert!(lockstep(&page));
    assert!(page.doc.has_class(&page.menu, "active"));

    controller.click(&page.doc, &page.nav_links[1]);
    assert!(lockstep(&page));
    assert!(!page.doc.has_class(&page.menu, "active"));

    // Selecting a link with the menu already closed keeps it closed.
    controller.click(&page.doc, &page.nav_links[0]);
    assert!(lockstep(&page));
    assert!(!page.doc.has_class(&page.hamburger, "active"));

    controller.click(&page.doc, &page.hamburger);
    controller.click(&page.doc, &page.hamburger);
    assert!(lockstep(&page));
    assert!(!page.doc.has_class(&page.hamburger, "active"));
}

#[test]
fn nav_link_closes_menu_and_scrolls() {
    let page = SitePage::new();
    let mut controller = page.install();
    controller.click(&page.doc, &page.hamburger);

    let prevented = controller.click(&page.doc, &page.nav_links[0]);

    assert!(prevented);
    assert!(!page.doc.has_class(&page.menu, "active"));
    assert_eq!(page.doc.scroll_requests(), vec![ScrollRequest::smooth(820.0)]);
    assert_eq!(page.doc.rect(&page.services).top, 80.0);
}

#[test]
fn placeholder_link_prevents_default_without_scrolling() {
    let page = SitePage::new();
    let mut controller = page.install();

    assert!(controller.click(&page.doc, &page.placeholder_link));
    assert!(page.doc.scroll_requests().is_empty());
}

#[test]
fn unknown_anchor_target_is_a_silent_no_op() {
    let page = SitePage::new();
    let mut controller = page.install();
    page.doc.set_scroll_offset(300.0);

    assert!(controller.click(&page.doc, &page.broken_link));
    assert!(page.doc.scroll_requests().is_empty());
    assert_eq!(page.doc.scroll_offset(), 300.0);
}

#[test]
fn anchor_destination_uses_current_scroll() {
    let page = SitePage::new();
    let mut controller = page.install();
    page.doc.set_scroll_offset(1000.0);

    controller.click(&page.doc, &page.nav_links[2]);

    // Contact sits at 2300 in the page, 1300 below the viewport top.
    assert_eq!(page.doc.scroll_requests(), vec![ScrollRequest::smooth(2220.0)]);
}

#[test]
fn reveal_happens_once_and_never_reverts() {
    let page = SitePage::new();
    let mut controller = page.install();

    assert!(page.doc.has_class(&page.hero_subtitle, "active"));
    assert!(page
        .service_cards
        .iter()
        .all(|card| !page.doc.has_class(card, "active")));

    page.doc.set_scroll_offset(600.0);
    let revealed = controller.reveal_mut().evaluate(&page.doc);
    assert_eq!(revealed, page.service_cards[..2].to_vec());

    // Scroll back above everything; nothing un-reveals or reveals twice.
    page.doc.set_scroll_offset(0.0);
    assert!(controller.reveal_mut().evaluate(&page.doc).is_empty());
    page.doc.set_scroll_offset(600.0);
    assert!(controller.reveal_mut().evaluate(&page.doc).is_empty());

    assert!(page.doc.has_class(&page.service_cards[0], "active"));
    assert!(page.doc.has_class(&page.hero_subtitle, "active"));
    assert_eq!(
        controller.reveal().pending(),
        &[page.service_cards[2], page.about_body]
    );
}

#[test]
fn page_without_menu_skips_navigation_only() {
    let page = SitePage::new();
    let config = ui::SiteConfig {
        navigation: ui::config::NavigationConfig {
            menu_id: "missing-menu".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };
    let mut controller = ui::InteractionController::install(&page.doc, &config);

    assert!(controller.nav().is_none());
    assert!(!controller.click(&page.doc, &page.hamburger));
    assert!(!page.doc.has_class(&page.hamburger, "active"));

    let fr = page.button_for(Lang::Fr).unwrap();
    controller.click(&page.doc, &fr);
    assert_eq!(page.doc.text(page.hero_subtitle), content::HERO_SUBTITLE.fr);
}
