//! Session
//!
//! Credential and theme persistence in `localStorage`, plus the page-load
//! bootstrap that decides between the signed-in view and demo mode.

use crate::api::{ApiClient, Transport};
use crate::models::{demo_tasks, Credential, Task, Theme};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const TOKEN_TYPE_KEY: &str = "token_type";
pub const THEME_KEY: &str = "theme";

/// String key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Missing or blocked storage reads as empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for {}", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

// ========================
// Credential
// ========================

pub fn load_credential<S: KeyValueStore>(store: &S) -> Option<Credential> {
    let access_token = store.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())?;
    let token_type = store
        .get(TOKEN_TYPE_KEY)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Bearer".to_string());
    Some(Credential {
        access_token,
        token_type,
    })
}

pub fn save_credential<S: KeyValueStore>(store: &S, credential: &Credential) {
    store.set(ACCESS_TOKEN_KEY, &credential.access_token);
    store.set(TOKEN_TYPE_KEY, &credential.token_type);
}

pub fn clear_credential<S: KeyValueStore>(store: &S) {
    store.remove(ACCESS_TOKEN_KEY);
    store.remove(TOKEN_TYPE_KEY);
}

pub fn has_credential<S: KeyValueStore>(store: &S) -> bool {
    load_credential(store).is_some()
}

// ========================
// Theme
// ========================

pub fn load_theme<S: KeyValueStore>(store: &S) -> Theme {
    store
        .get(THEME_KEY)
        .map(|v| Theme::parse(&v))
        .unwrap_or_default()
}

pub fn save_theme<S: KeyValueStore>(store: &S, theme: Theme) {
    store.set(THEME_KEY, theme.as_str());
}

// ========================
// Bootstrap
// ========================

/// Outcome of the page-load session check
#[derive(Debug, Clone, PartialEq)]
pub enum Boot {
    /// Stored credential worked; holds the fetched collection
    Authenticated(Vec<Task>),
    /// No credential, or it was rejected; holds the demo tasks
    Guest(Vec<Task>),
}

impl Boot {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Boot::Authenticated(_))
    }

    pub fn into_tasks(self) -> Vec<Task> {
        match self {
            Boot::Authenticated(tasks) | Boot::Guest(tasks) => tasks,
        }
    }
}

/// One authenticated `GET /tasks/` when a credential is stored, none otherwise.
/// A failed probe clears the credential.
pub async fn bootstrap<T: Transport, S: KeyValueStore>(client: &ApiClient<T, S>) -> Boot {
    if !has_credential(client.storage()) {
        log::info!("No stored credential, starting in demo mode");
        return Boot::Guest(demo_tasks());
    }

    match client.list_tasks().await {
        Ok(tasks) => {
            log::info!("Session restored with {} tasks", tasks.len());
            Boot::Authenticated(tasks)
        }
        Err(e) => {
            log::warn!("Stored credential rejected ({}), clearing", e);
            clear_credential(client.storage());
            Boot::Guest(demo_tasks())
        }
    }
}
