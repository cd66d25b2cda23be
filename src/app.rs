//! Focus Dashboard Wiring
//!
//! Attaches each widget to its existing page element. The widgets are
//! independent; a missing element disables only its own widget.

use std::rc::Rc;

use leptos::prelude::*;
use slide_rotator::{DomSlides, PageSlideshow, TimeoutScheduler};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::components::{Clock, TaskInput, TaskPanel};
use crate::config::DashboardConfig;
use crate::storage;
use crate::tasks::TaskList;

/// Start every widget the page has targets for
pub fn start(document: &Document, config: &DashboardConfig) {
    start_clock(document, config);
    start_tasks(document, config);
    start_slideshow(config);
}

/// Element by id, emptied so the widget replaces any placeholder text
fn take_host(document: &Document, id: &str) -> Option<HtmlElement> {
    let Some(host) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("no #{} on this page", id);
        return None;
    };
    host.set_inner_html("");
    Some(host)
}

fn start_clock(document: &Document, config: &DashboardConfig) {
    let Some(host) = take_host(document, &config.date_time_id) else {
        return;
    };
    let interval_ms = config.clock_interval_millis();
    leptos::mount::mount_to(host, move || view! { <Clock interval_ms=interval_ms /> }).forget();
}

fn start_tasks(document: &Document, config: &DashboardConfig) {
    let tasks = Rc::new(TaskList::new(
        storage::open_or_memory(),
        config.storage_key.clone(),
        config.seed_tasks.clone(),
    ));
    // Storage is seeded even when this page does not show the list
    let initial = tasks.initialize();

    let Some(host) = take_host(document, &config.task_list_id) else {
        return;
    };
    let input = TaskInput::find(document, &config.task_input_id, &config.task_button_id);
    leptos::mount::mount_to(host, move || {
        view! { <TaskPanel tasks=tasks initial=initial input=input /> }
    })
    .forget();
}

fn start_slideshow(config: &DashboardConfig) {
    let Some(surface) = DomSlides::find(&config.slide_class, &config.dots_selector) else {
        return;
    };
    if let Some(slideshow) = PageSlideshow::start(surface, TimeoutScheduler, config.slide_delay()) {
        // Runs until the page unloads
        std::mem::forget(slideshow);
    }
}
