//! Browser wiring for ranktable.
//!
//! Boots on DOM ready: resolves the tab from `window.location`, fetches the
//! dataset, renders the container and keeps the tab markers in sync. Tab
//! clicks push a history entry; `popstate` re-renders without touching the
//! address.

mod browser;
mod console;

use std::cell::RefCell;
use std::rc::Rc;

use ranktable::RatingApp;
use ranktable::config::RenderConfig;
use ranktable::source::DataSource;
use ranktable_report::render_container;
use tracing::{error, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, Window};

pub use browser::{BrowserAddressBar, FetchSource};

/// Selector of the tab controls, matched by position
pub const TAB_SELECTOR: &str = ".tabs__row .tabs__cell--header";

type App = RatingApp<BrowserAddressBar>;

struct Page {
    window: Window,
    document: Document,
    container: Element,
    source: FetchSource,
    app: RefCell<App>,
}

/// Install the panic hook and console logging, then boot once the DOM is
/// ready.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::init_logging();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        error!("document is not available");
        return;
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::wrap(Box::new(move |_: Event| boot()) as Box<dyn FnMut(Event)>);
        if let Err(err) = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        {
            error!(error = %browser::js_message(&err), "failed to wait for DOMContentLoaded");
        }
        on_ready.forget();
    } else {
        boot();
    }
}

fn boot() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let config = RenderConfig::default();
    let Some(container) = document.get_element_by_id(&config.container_id) else {
        error!(id = %config.container_id, "table container not found");
        return;
    };

    let source = FetchSource::new(window.clone(), config.data_path.clone());
    let app = RatingApp::new(
        config,
        viewport_width(&window),
        BrowserAddressBar::new(window.clone()),
    );
    let page = Rc::new(Page {
        window,
        document,
        container,
        source,
        app: RefCell::new(app),
    });

    load(&page, |app| Some(app.request_from_address()));
    attach_tab_handlers(&page);
    attach_popstate(&page);
}

/// Start a load; `request` updates state and names the tab to fetch.
///
/// The `RefCell` borrow ends before the fetch is awaited, so clicks and
/// history events during a pending fetch start their own load. Completions
/// apply in arrival order.
fn load(page: &Rc<Page>, request: impl FnOnce(&mut App) -> Option<String>) {
    let tab = {
        let mut app = page.app.borrow_mut();
        let Some(tab) = request(&mut app) else {
            return;
        };
        paint(page, &app);
        tab
    };

    let page = Rc::clone(page);
    spawn_local(async move {
        let result = page.source.fetch().await;
        let mut app = page.app.borrow_mut();
        app.set_viewport_width(viewport_width(&page.window));
        app.finish_load(&tab, result);
        paint(&page, &app);
    });
}

/// Replace the container content and mirror the tab markers.
fn paint(page: &Page, app: &App) {
    page.container
        .set_inner_html(&render_container(app.container()));

    let controls = match page.document.query_selector_all(TAB_SELECTOR) {
        Ok(controls) => controls,
        Err(err) => {
            warn!(error = %browser::js_message(&err), "failed to query tab controls");
            return;
        }
    };

    for (index, control) in app.tabs().controls().iter().enumerate() {
        let Some(element) = controls
            .item(index as u32)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let _ = element
            .class_list()
            .toggle_with_force("selected", control.selected);
        let _ = element.set_attribute("aria-selected", control.aria_selected());
    }
}

fn attach_tab_handlers(page: &Rc<Page>) {
    let controls = match page.document.query_selector_all(TAB_SELECTOR) {
        Ok(controls) => controls,
        Err(err) => {
            warn!(error = %browser::js_message(&err), "failed to query tab controls");
            return;
        }
    };

    for index in 0..controls.length() {
        let Some(control) = controls.item(index) else {
            continue;
        };
        let position = index as usize;
        let handler_page = Rc::clone(page);
        let on_click = Closure::wrap(Box::new(move |_: Event| {
            load(&handler_page, |app| {
                app.request_position(position)
                    .map(|tab| tab.as_str().to_owned())
            });
        }) as Box<dyn FnMut(Event)>);

        if let Err(err) =
            control.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        {
            warn!(position, error = %browser::js_message(&err), "failed to attach tab handler");
        }
        on_click.forget();
    }
}

fn attach_popstate(page: &Rc<Page>) {
    let handler_page = Rc::clone(page);
    let on_popstate = Closure::wrap(Box::new(move |_: Event| {
        load(&handler_page, |app| Some(app.request_from_address()));
    }) as Box<dyn FnMut(Event)>);

    if let Err(err) = page
        .window
        .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref())
    {
        error!(error = %browser::js_message(&err), "failed to listen for popstate");
    }
    on_popstate.forget();
}

fn viewport_width(window: &Window) -> u32 {
    window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .map(|width| width.max(0.0) as u32)
        .unwrap_or(u32::MAX)
}
