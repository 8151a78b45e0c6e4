//! Application Context
//!
//! Config, the backend client and the notification queue, provided via the
//! Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::Notice;
use crate::api::BrowserClient;
use crate::config::AppConfig;

/// A notice on screen, keyed for dismissal
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Visible notices - read
    pub toasts: ReadSignal<Vec<Toast>>,
    /// Visible notices - write
    set_toasts: WriteSignal<Vec<Toast>>,
    next_toast_id: StoredValue<u64>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let (toasts, set_toasts) = signal(Vec::<Toast>::new());
        Self {
            config: StoredValue::new(config),
            toasts,
            set_toasts,
            next_toast_id: StoredValue::new(0),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Client for the configured backend, using `fetch` and `localStorage`
    pub fn client(&self) -> BrowserClient {
        self.config.with_value(BrowserClient::browser)
    }

    /// Show a notice; it removes itself after `ttl`
    pub fn notify_for(&self, notice: Notice, ttl: std::time::Duration) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id + 1);
        self.set_toasts.update(|list| list.push(Toast { id, notice }));

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(ttl.as_millis() as u32).await;
            ctx.dismiss(id);
        });
    }

    /// Show a notice with the standard toast lifetime
    pub fn notify(&self, notice: Notice) {
        self.notify_for(notice, self.config.with_value(|c| c.toast_ttl));
    }

    pub fn dismiss(&self, id: u64) {
        self.set_toasts.update(|list| list.retain(|t| t.id != id));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Navigate to `path` after `delay`
pub fn redirect_after(path: &'static str, delay: std::time::Duration) {
    spawn_local(async move {
        TimeoutFuture::new(delay.as_millis() as u32).await;
        redirect(path);
    });
}

pub fn redirect(path: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(path).is_err() {
            log::error!("Failed to navigate to {}", path);
        }
    }
}

/// Set `data-theme` on the root element
pub fn apply_theme_attribute(theme: crate::models::Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}
