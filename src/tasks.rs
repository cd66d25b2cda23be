//! Task List
//!
//! Ordered list of task descriptions persisted as a JSON array under one
//! storage key. Append-only; reads fail over to an empty list.

use crate::error::{DashboardError, DashboardResult};
use crate::storage::KeyValueStore;

/// Persisted task list bound to one storage key
pub struct TaskList<S> {
    store: S,
    key: String,
    seed: Vec<String>,
}

impl<S: KeyValueStore> TaskList<S> {
    /// `seed` is written on first run, when the key holds nothing
    pub fn new(store: S, key: impl Into<String>, seed: Vec<String>) -> Self {
        Self {
            store,
            key: key.into(),
            seed,
        }
    }

    /// Current persisted tasks. Missing, unreadable or malformed data yields an
    /// empty list.
    pub fn load(&self) -> Vec<String> {
        match self.read() {
            Ok(Some(tasks)) => tasks,
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("tasks: ignoring stored list under '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Persist `tasks` as the canonical JSON array
    pub fn save(&self, tasks: &[String]) -> DashboardResult<()> {
        let json = serde_json::to_string(tasks)?;
        self.store.set(&self.key, &json)
    }

    /// Append a task.
    ///
    /// Blank input is ignored and returns `None`. Otherwise the trimmed text is
    /// appended and the list as persisted afterwards is returned.
    pub fn add(&self, text: &str) -> Option<Vec<String>> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let mut tasks = self.load();
        tasks.push(text.to_string());
        if let Err(e) = self.save(&tasks) {
            log::warn!("tasks: failed to save '{}': {}", text, e);
        }
        Some(self.load())
    }

    /// Seed storage on first run, then return the persisted list.
    ///
    /// Malformed stored data is replaced with an empty array, so storage always
    /// holds a valid list afterwards.
    pub fn initialize(&self) -> Vec<String> {
        match self.read() {
            Ok(Some(tasks)) => return tasks,
            Ok(None) => self.seed_storage(),
            Err(DashboardError::Json(e)) => {
                log::warn!("tasks: replacing malformed list under '{}': {}", self.key, e);
                if let Err(e) = self.save(&[]) {
                    log::warn!("tasks: failed to reset '{}': {}", self.key, e);
                }
            }
            Err(e) => {
                log::warn!("tasks: failed to read '{}': {}", self.key, e);
                self.seed_storage();
            }
        }
        self.load()
    }

    fn seed_storage(&self) {
        log::info!("tasks: seeding '{}' with {} tasks", self.key, self.seed.len());
        if let Err(e) = self.save(&self.seed) {
            log::warn!("tasks: failed to seed '{}': {}", self.key, e);
        }
    }

    fn read(&self) -> DashboardResult<Option<Vec<String>>> {
        match self.store.get(&self.key)? {
            Some(json) if !json.is_empty() => Ok(Some(serde_json::from_str(&json)?)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::storage::MemoryStore;
    use std::rc::Rc;

    const KEY: &str = "focusAppTasks";

    fn seeded_list(store: Rc<MemoryStore>) -> TaskList<Rc<MemoryStore>> {
        TaskList::new(store, KEY, DashboardConfig::default().seed_tasks)
    }

    fn stored(store: &MemoryStore) -> Option<String> {
        store.get(KEY).unwrap()
    }

    #[test]
    fn test_initialize_seeds_first_run() {
        let store = Rc::new(MemoryStore::default());
        let tasks = seeded_list(store.clone()).initialize();

        let expected = vec![
            "Outline Chapter 2 (Module 1)",
            "Review Eisenhower Matrix (Module 2)",
            "Practice Pomodoro Timer (Tools)",
            "Check Community Board",
        ];
        assert_eq!(tasks, expected);
        let persisted: Vec<String> = serde_json::from_str(&stored(&store).unwrap()).unwrap();
        assert_eq!(persisted, expected);
    }

    #[test]
    fn test_initialize_keeps_existing_list() {
        let store = Rc::new(MemoryStore::default());
        store.set(KEY, r#"["Mine"]"#).unwrap();
        assert_eq!(seeded_list(store.clone()).initialize(), vec!["Mine"]);

        // An existing empty array is still "existing"
        store.set(KEY, "[]").unwrap();
        assert!(seeded_list(store.clone()).initialize().is_empty());
        assert_eq!(stored(&store).as_deref(), Some("[]"));
    }

    #[test]
    fn test_initialize_seeds_over_empty_string() {
        let store = Rc::new(MemoryStore::default());
        store.set(KEY, "").unwrap();
        assert_eq!(seeded_list(store).initialize().len(), 4);
    }

    #[test]
    fn test_initialize_repairs_corrupt_data() {
        for corrupt in ["{broken", r#"{"tasks": ["a"]}"#, "[1, 2]"] {
            let store = Rc::new(MemoryStore::default());
            store.set(KEY, corrupt).unwrap();

            assert!(seeded_list(store.clone()).initialize().is_empty());
            let persisted: Vec<String> = serde_json::from_str(&stored(&store).unwrap()).unwrap();
            assert!(persisted.is_empty(), "stored {:?} was not reset", corrupt);
        }
    }

    #[test]
    fn test_load_fails_over_to_empty() {
        let store = Rc::new(MemoryStore::default());
        let list = seeded_list(store.clone());
        assert!(list.load().is_empty());

        store.set(KEY, "not json").unwrap();
        assert!(list.load().is_empty());

        store.set(KEY, r#"{"tasks": ["a"]}"#).unwrap();
        assert!(list.load().is_empty());

        store.set(KEY, "[1, 2]").unwrap();
        assert!(list.load().is_empty());
    }

    #[test]
    fn test_add_blank_is_noop() {
        let store = Rc::new(MemoryStore::default());
        let list = seeded_list(store.clone());
        list.initialize();
        let before = stored(&store);

        assert_eq!(list.add(""), None);
        assert_eq!(list.add("   "), None);
        assert_eq!(list.add("\t\n"), None);
        assert_eq!(stored(&store), before);
    }

    #[test]
    fn test_add_appends_trimmed() {
        let store = Rc::new(MemoryStore::default());
        let list = seeded_list(store.clone());
        list.initialize();

        let tasks = list.add("Buy milk").unwrap();
        assert_eq!(tasks.len(), 5);
        assert_eq!(tasks.last().map(String::as_str), Some("Buy milk"));
        assert_eq!(list.load(), tasks);

        let tasks = list.add("  Call mum  ").unwrap();
        assert_eq!(tasks.last().map(String::as_str), Some("Call mum"));
        assert_eq!(tasks.len(), 6);
    }

    #[test]
    fn test_add_replaces_corrupt_data() {
        let store = Rc::new(MemoryStore::default());
        store.set(KEY, "{broken").unwrap();
        let list = seeded_list(store.clone());
        assert_eq!(list.add("First").unwrap(), vec!["First"]);
        assert_eq!(stored(&store).as_deref(), Some(r#"["First"]"#));
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = Rc::new(MemoryStore::default());
        let list = seeded_list(store);
        let tasks: Vec<String> = vec!["b".into(), "a".into(), "quote \" and \u{e9}".into(), "a".into()];
        list.save(&tasks).unwrap();
        assert_eq!(list.load(), tasks);
    }

    #[test]
    fn test_lists_under_different_keys_are_independent() {
        let store = Rc::new(MemoryStore::default());
        let work = TaskList::new(store.clone(), "work", Vec::new());
        let home = TaskList::new(store.clone(), "home", Vec::new());
        work.add("Ship it");
        assert!(home.load().is_empty());
        assert_eq!(work.load(), vec!["Ship it"]);
    }
}
