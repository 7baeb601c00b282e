//! Browser tests: `wasm-pack test --headless --firefox landing`

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use leptos::mount::mount_to;
use leptos::prelude::*;
use newcastle_vet_landing::App;
use newcastle_vet_landing::config::PageConfig;
use newcastle_vet_landing::content::CAROUSEL_IMAGES;
use newcastle_vet_landing::hooks::{use_interval, use_window_event};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let root: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

async fn sleep(millis: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

/// Lets the reactive runtime flush pending updates.
async fn settle() {
    sleep(50).await;
}

fn mount_page(root: HtmlElement, config: PageConfig) -> impl Sized {
    mount_to(root, move || view! { <App config=config /> })
}

fn scroll_window_to(y: f64) {
    web_sys::window().unwrap().scroll_to_with_x_and_y(0.0, y);
}

fn dispatch_scroll() {
    let event = web_sys::Event::new("scroll").unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

fn find(root: &HtmlElement, selector: &str) -> Element {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches `{selector}`"))
}

fn click(root: &HtmlElement, selector: &str) {
    find(root, selector).unchecked_into::<HtmlElement>().click();
}

#[wasm_bindgen_test]
async fn nav_links_point_at_sections() {
    let root = container();
    let _page = mount_page(root.clone(), PageConfig::default());
    settle().await;

    for anchor in ["#home", "#about", "#services", "#contact"] {
        find(&root, &format!("nav a[href='{anchor}']"));
    }
    find(&root, "footer a[href='#emergency-care']");
    find(&root, "footer a[href='#pet-insurance']");
}

#[wasm_bindgen_test]
async fn mobile_menu_opens_and_link_click_closes() {
    let root = container();
    let _page = mount_page(root.clone(), PageConfig::default());
    settle().await;

    let drawer = find(&root, "#mobile-menu");
    assert_eq!(drawer.get_attribute("data-open").as_deref(), Some("false"));
    assert!(drawer.get_attribute("class").unwrap().contains("md:hidden"));

    click(&root, "button[aria-controls='mobile-menu']");
    settle().await;
    assert_eq!(drawer.get_attribute("data-open").as_deref(), Some("true"));
    let open_style = drawer.get_attribute("style").unwrap();
    assert!(open_style.contains("grid-template-rows: 1fr"));
    assert!(!open_style.contains("display"));

    click(&root, "#mobile-menu a[href='#services']");
    settle().await;
    assert_eq!(drawer.get_attribute("data-open").as_deref(), Some("false"));
    assert!(drawer.get_attribute("style").unwrap().contains("grid-template-rows: 0fr"));
}

#[wasm_bindgen_test]
async fn scroll_button_starts_hidden() {
    let root = container();
    let _page = mount_page(root.clone(), PageConfig::default());
    settle().await;

    let button = find(&root, "#scroll-to-top");
    assert_eq!(button.get_attribute("data-visible").as_deref(), Some("false"));
    assert!(button.get_attribute("style").unwrap().contains("opacity: 0"));
}

#[wasm_bindgen_test]
async fn carousel_shows_exactly_one_slide() {
    let root = container();
    let _page = mount_page(root.clone(), PageConfig::default());
    settle().await;

    let current = root
        .query_selector_all("#home img[data-current='true']")
        .unwrap()
        .length();
    assert_eq!(current, 1);
    find(&root, "#home img[data-current='true'][src$='photo-1601758228041-f3b2795255f1']");
}

#[wasm_bindgen_test]
async fn footer_shows_current_year() {
    let root = container();
    let _page = mount_page(root.clone(), PageConfig::default());
    settle().await;

    let year = js_sys::Date::new_0().get_full_year();
    let footer = find(&root, "footer").text_content().unwrap_or_default();
    assert!(footer.contains(&format!("© {year} Newcastle Veterinary Clinic")));
}

#[wasm_bindgen_test]
async fn unmount_removes_the_page() {
    let root = container();
    let page = mount_page(root.clone(), PageConfig::default());
    settle().await;
    assert!(root.child_element_count() > 0);

    drop(page);
    settle().await;
    assert_eq!(root.child_element_count(), 0);

    dispatch_scroll();
    settle().await;
    assert_eq!(root.child_element_count(), 0);
}

#[wasm_bindgen_test]
async fn carousel_reaches_third_slide_after_two_periods() {
    let root = container();
    let config = PageConfig {
        carousel_interval: Duration::from_millis(200),
        ..PageConfig::default()
    };
    let _page = mount_page(root.clone(), config);
    sleep(500).await;

    let current = find(&root, "#home img[data-current='true']");
    assert_eq!(current.get_attribute("src").as_deref(), Some(CAROUSEL_IMAGES[2]));
}

#[wasm_bindgen_test]
async fn scroll_button_follows_the_threshold() {
    let root = container();
    root.set_attribute("style", "min-height: 5000px").unwrap();
    let _page = mount_page(root.clone(), PageConfig::default());
    settle().await;
    let button = find(&root, "#scroll-to-top");

    scroll_window_to(501.0);
    sleep(150).await;
    assert_eq!(button.get_attribute("data-visible").as_deref(), Some("true"));

    scroll_window_to(0.0);
    sleep(150).await;
    assert_eq!(button.get_attribute("data-visible").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
async fn revealed_block_stays_revealed_after_leaving_view() {
    scroll_window_to(0.0);
    let root = container();
    root.set_attribute("style", "min-height: 5000px").unwrap();
    let _page = mount_page(root.clone(), PageConfig::default());
    sleep(150).await;

    let blocks = root.query_selector_all("[data-revealed]").unwrap();
    let last: Element = blocks.item(blocks.length() - 1).unwrap().unchecked_into();
    assert_eq!(last.get_attribute("data-revealed").as_deref(), Some("false"));

    last.scroll_into_view();
    sleep(200).await;
    assert_eq!(last.get_attribute("data-revealed").as_deref(), Some("true"));

    scroll_window_to(0.0);
    sleep(200).await;
    assert_eq!(last.get_attribute("data-revealed").as_deref(), Some("true"));
    assert!(last.get_attribute("style").unwrap().starts_with("opacity: 1;"));
}

#[wasm_bindgen_test]
async fn no_callbacks_after_unmount() {
    let ticks = Rc::new(Cell::new(0u32));
    let scrolls = Rc::new(Cell::new(0u32));
    let root = container();
    let handle = {
        let (ticks, scrolls) = (ticks.clone(), scrolls.clone());
        mount_to(root.clone(), move || {
            use_interval(Duration::from_millis(50), move || ticks.set(ticks.get() + 1));
            use_window_event("scroll", move |_| scrolls.set(scrolls.get() + 1));
            view! { <p>"counting"</p> }
        })
    };
    sleep(180).await;
    dispatch_scroll();
    assert!(ticks.get() > 0);
    assert!(scrolls.get() > 0);

    drop(handle);
    let (ticks_at_unmount, scrolls_at_unmount) = (ticks.get(), scrolls.get());
    dispatch_scroll();
    sleep(200).await;
    assert_eq!(ticks.get(), ticks_at_unmount);
    assert_eq!(scrolls.get(), scrolls_at_unmount);
}
