//! Task Panel Component
//!
//! Renders the persisted task list as `<li>` items and, when the page has one,
//! wires the task input field and button to append tasks.

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::storage::KeyValueStore;
use crate::tasks::TaskList;

/// Task list backed by whichever store the page could open
pub type SharedTasks = Rc<TaskList<Rc<dyn KeyValueStore>>>;

/// Existing text field and submit button for new tasks
pub struct TaskInput {
    field: HtmlInputElement,
    button: Element,
}

impl TaskInput {
    /// Both elements must exist; otherwise there is nothing to bind
    pub fn find(document: &Document, field_id: &str, button_id: &str) -> Option<Self> {
        let field = document
            .get_element_by_id(field_id)?
            .dyn_into::<HtmlInputElement>()
            .ok()?;
        let button = document.get_element_by_id(button_id)?;
        Some(Self { field, button })
    }

    /// On click: add the field's text, refresh the rendered list, clear the field
    fn bind(self, tasks: SharedTasks, set_items: WriteSignal<Vec<String>>) {
        let field = self.field;
        let on_click = Closure::<dyn FnMut()>::new(move || {
            if let Some(updated) = tasks.add(&field.value()) {
                set_items.set(updated);
            }
            field.set_value("");
        });
        if let Err(e) = self
            .button
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        {
            log::warn!("tasks: failed to bind task button: {:?}", e);
            return;
        }
        on_click.forget();
    }
}

/// One `<li>` per task
#[component]
pub fn TaskItems(items: ReadSignal<Vec<String>>) -> impl IntoView {
    view! {
        {move || items.get().into_iter().map(|task| view! { <li>{task}</li> }).collect_view()}
    }
}

/// Task list widget. `initial` is the list as persisted at startup.
#[component]
pub fn TaskPanel(tasks: SharedTasks, initial: Vec<String>, input: Option<TaskInput>) -> impl IntoView {
    let (items, set_items) = signal(initial);

    if let Some(input) = input {
        input.bind(tasks, set_items);
    }

    view! { <TaskItems items=items /> }
}
