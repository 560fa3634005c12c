use common::{
    config::NavConfig,
    nav::{
        ACTIVE_CLASS, MenuState, SCROLLED_CLASS, ScrollChrome, SectionOffset, active_section,
        anchor_scroll_top, anchor_target, is_active_link,
    },
};
use tracing::{Level, debug, instrument, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node, ScrollBehavior, ScrollToOptions, Window};

use crate::dom::{self, DomError};

// menu open/closed lives on both the container and the toggle so the icon follows along
fn set_menu(menu: &Element, toggle: &Element, state: MenuState) {
    dom::set_class(menu, ACTIVE_CLASS, state.is_open());
    dom::set_class(toggle, ACTIVE_CLASS, state.is_open());
}

fn current_menu(menu: &Element) -> MenuState {
    MenuState::from_marker(dom::has_class(menu, ACTIVE_CLASS))
}

#[instrument(level=Level::DEBUG, skip_all)]
pub fn init(window: &Window, document: &Document, config: &NavConfig) -> Result<(), DomError> {
    let links = dom::query_all(document, &config.link_selector)?;

    let toggle = document.get_element_by_id(&config.toggle_id);
    let menu = document.get_element_by_id(&config.menu_id);

    if let (Some(toggle), Some(menu)) = (toggle, menu) {
        setup_menu(document, &toggle, &menu, &links)?;
    }

    setup_anchor_scrolling(window, document, &links, config.header_offset)?;

    if let Some(navbar) = document.query_selector(&config.navbar_selector)? {
        let threshold = config.scrolled_threshold;
        let scroll_window = window.clone();

        dom::listen(window, "scroll", move |_| {
            let chrome = ScrollChrome::for_offset(dom::scroll_y(&scroll_window), threshold);
            dom::set_class(&navbar, SCROLLED_CLASS, chrome.is_scrolled());
        })?;
    }

    // once now so a reload halfway down the page highlights the right link
    update_active_link(window, document, config)?;

    let scroll_window = window.clone();
    let scroll_document = document.clone();
    let scroll_config = config.clone();
    dom::listen(window, "scroll", move |_| {
        if let Err(err) = update_active_link(&scroll_window, &scroll_document, &scroll_config) {
            warn!("active link update failed: {err}");
        }
    })?;

    debug!({ links = links.len() }, "navigation wired");
    Ok(())
}

fn setup_menu(
    document: &Document,
    toggle: &Element,
    menu: &Element,
    links: &[Element],
) -> Result<(), DomError> {
    {
        let (own, menu) = (toggle.clone(), menu.clone());
        dom::listen(toggle, "click", move |_| {
            let state = current_menu(&menu).toggled();
            set_menu(&menu, &own, state);
        })?;
    }

    // picking a destination closes the menu straight away
    for link in links {
        let (toggle, menu) = (toggle.clone(), menu.clone());
        dom::listen(link, "click", move |_| {
            set_menu(&menu, &toggle, current_menu(&menu).close());
        })?;
    }

    // anything outside both the toggle and the menu closes it
    let (toggle, menu) = (toggle.clone(), menu.clone());
    dom::listen(document, "click", move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());

        let inside = toggle.contains(target.as_ref()) || menu.contains(target.as_ref());
        if !inside {
            set_menu(&menu, &toggle, current_menu(&menu).close());
        }
    })?;

    Ok(())
}

fn setup_anchor_scrolling(
    window: &Window,
    document: &Document,
    links: &[Element],
    header_offset: f64,
) -> Result<(), DomError> {
    for link in links {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        if anchor_target(&href).is_none() {
            continue;
        }

        let (window, document) = (window.clone(), document.clone());
        dom::listen(link, "click", move |event| {
            event.prevent_default();

            let Some(id) = anchor_target(&href) else {
                return;
            };

            // a dangling anchor just does nothing
            let Some(section) = document.get_element_by_id(id) else {
                return;
            };

            let options = ScrollToOptions::new();
            options.set_top(anchor_scroll_top(dom::offset_top(&section), header_offset));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?;
    }

    Ok(())
}

// recomputed from scratch on every scroll -- sections and links are few
fn update_active_link(window: &Window, document: &Document, config: &NavConfig) -> Result<(), DomError> {
    let sections: Vec<SectionOffset> = dom::query_all(document, &config.section_selector)?
        .iter()
        .map(|section| SectionOffset::new(section.id(), dom::offset_top(section)))
        .collect();

    let current = active_section(&sections, dom::scroll_y(window), config.section_lookahead);

    for link in dom::query_all(document, &config.link_selector)? {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        if anchor_target(&href).is_none() {
            continue;
        }

        dom::set_class(&link, ACTIVE_CLASS, false);
        if is_active_link(&href, current) {
            dom::set_class(&link, ACTIVE_CLASS, true);
        }
    }

    Ok(())
}
