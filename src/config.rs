//! Dashboard Configuration
//!
//! Element ids, selectors, storage key and timer periods. Pages may override
//! any subset with an inline `<script id="dashboard-config" type="application/json">`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::DashboardResult;

/// Id of the inline JSON block read by [`DashboardConfig::from_page`]
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

const SEED_TASKS: &[&str] = &[
    "Outline Chapter 2 (Module 1)",
    "Review Eisenhower Matrix (Module 2)",
    "Practice Pomodoro Timer (Tools)",
    "Check Community Board",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Element receiving the formatted date and time
    pub date_time_id: String,
    /// List element the tasks are rendered into
    pub task_list_id: String,
    /// Text field for new tasks
    pub task_input_id: String,
    /// Button that submits the task field
    pub task_button_id: String,
    /// localStorage key holding the JSON task array
    pub storage_key: String,
    /// Written on first run when nothing is stored
    pub seed_tasks: Vec<String>,
    pub clock_interval_ms: u32,
    /// Class shared by all slide elements
    pub slide_class: String,
    /// CSS selector of the indicator container
    pub dots_selector: String,
    pub slide_delay_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            date_time_id: "current-date-time".to_string(),
            task_list_id: "task-list".to_string(),
            task_input_id: "task-input".to_string(),
            task_button_id: "task-input-button".to_string(),
            storage_key: "focusAppTasks".to_string(),
            seed_tasks: SEED_TASKS.iter().map(|s| s.to_string()).collect(),
            clock_interval_ms: 60_000,
            slide_class: "slide".to_string(),
            dots_selector: ".slide-dots-container".to_string(),
            slide_delay_ms: 8_000,
        }
    }
}

impl DashboardConfig {
    /// Parse overrides; unnamed fields keep their defaults
    pub fn from_json(json: &str) -> DashboardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the inline config block, falling back to defaults when it is absent
    /// or malformed
    pub fn from_page(document: &web_sys::Document) -> Self {
        let Some(json) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("config: using defaults, #{} is invalid: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }

    pub fn slide_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.slide_delay_ms))
    }

    /// Clock refresh period in milliseconds, within what browser timers accept
    pub fn clock_interval_millis(&self) -> u32 {
        slide_rotator::timer_millis(Duration::from_millis(u64::from(self.clock_interval_ms)))
    }
}
