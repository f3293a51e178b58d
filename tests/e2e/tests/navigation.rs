use std::time::Duration;

use e2e::browser::Browser;
use e2e::test_server::TestServer;

const MOUNTED: &str = "document.querySelector('#hamburger') !== null";

#[tokio::test]
#[ignore = "requires dx and Chrome"]
async fn homepage_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("DOCTYPE") || body.contains("doctype"));
}

#[tokio::test]
#[ignore = "requires dx and Chrome"]
async fn language_buttons_rewrite_the_page() {
    let server = TestServer::start().await.expect("server");
    let browser = Browser::launch().expect("browser");
    let page = browser.new_page().expect("page");
    page.goto(server.url()).expect("navigate");
    page.wait_for(MOUNTED, Duration::from_secs(10)).expect("mounted");

    page.click(".lang-btn[data-lang='fr']").expect("click fr");

    let lang = page.evaluate("document.documentElement.lang").expect("lang");
    assert_eq!(lang, "fr");
    let cta = page.find_element(".hero .btn.primary").expect("cta");
    assert_eq!(cta, "Demander un devis");
    assert!(page
        .has_class(".lang-btn[data-lang='fr']", "active")
        .expect("fr state"));
    assert!(!page
        .has_class(".lang-btn[data-lang='de']", "active")
        .expect("de state"));
}

#[tokio::test]
#[ignore = "requires dx and Chrome"]
async fn hamburger_and_menu_move_together() {
    let server = TestServer::start().await.expect("server");
    let browser = Browser::launch().expect("browser");
    let page = browser.new_page().expect("page");
    page.goto(server.url()).expect("navigate");
    page.wait_for(MOUNTED, Duration::from_secs(10)).expect("mounted");

    page.click("#hamburger").expect("open");
    assert!(page.has_class("#hamburger", "active").expect("trigger"));
    assert!(page.has_class("#nav-menu", "active").expect("menu"));

    page.click(".nav-link[href='#about']").expect("link");
    assert!(!page.has_class("#hamburger", "active").expect("trigger"));
    assert!(!page.has_class("#nav-menu", "active").expect("menu"));
}

#[tokio::test]
#[ignore = "requires dx and Chrome"]
async fn anchor_links_stop_below_the_header() {
    let server = TestServer::start().await.expect("server");
    let browser = Browser::launch().expect("browser");
    let page = browser.new_page().expect("page");
    page.goto(server.url()).expect("navigate");
    page.wait_for(MOUNTED, Duration::from_secs(10)).expect("mounted");

    page.click(".hero .btn.primary").expect("cta");
    page.wait_for(
        "Math.abs(document.querySelector('#contact').getBoundingClientRect().top - 80) < 2 \
         || window.scrollY + window.innerHeight >= document.body.scrollHeight - 2",
        Duration::from_secs(5),
    )
    .expect("scrolled to contact");

    let url = page.url().expect("url");
    assert!(!url.contains("#contact"), "default jump was not prevented: {url}");
}
