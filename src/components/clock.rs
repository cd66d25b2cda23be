//! Clock Component
//!
//! Live date and time text, refreshed on a fixed interval.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::clock;

/// Current date and time; the interval runs for the lifetime of the page
#[component]
pub fn Clock(interval_ms: u32) -> impl IntoView {
    let (stamp, set_stamp) = signal(clock::now_stamp());

    Interval::new(interval_ms, move || set_stamp.set(clock::now_stamp())).forget();

    view! { {move || stamp.get()} }
}
