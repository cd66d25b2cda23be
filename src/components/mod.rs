//! UI Components
//!
//! Leptos widgets mounted into existing page elements.

mod clock;
mod task_panel;

pub use clock::Clock;
pub use task_panel::{TaskInput, TaskPanel};
