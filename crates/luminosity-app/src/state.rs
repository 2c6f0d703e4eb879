//! Application state: a flat JSON map mutated by shallow merge

use serde_json::{Map, Value};

/// Key-value state map shared by all pages.
pub type StateMap = Map<String, Value>;

/// The application state.
///
/// Created once at shell initialization from `init_with_states` and
/// mutated only through [`AppState::merge`]; reads go through snapshots
/// so no page can hold a live reference across a rerender.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    values: StateMap,
}

impl AppState {
    pub fn new(initial: StateMap) -> AppState {
        AppState { values: initial }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn snapshot(&self) -> StateMap {
        self.values.clone()
    }

    /// Shallow merge: each field of `patch` replaces the field of the
    /// same name, other fields are untouched.
    pub fn merge(&mut self, patch: StateMap) {
        for (key, value) in patch {
            self.values.insert(key, value);
        }
    }
}
