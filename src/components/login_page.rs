//! Login Page
//!
//! Username/password form against the token endpoint.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{Notice, NoticeKind};
use crate::auth::{self, Field};
use crate::components::{AuthField, ToastContainer};
use crate::config::AppConfig;
use crate::context::{redirect, redirect_after, AppContext};
use crate::session::{self, BrowserStorage};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = AppContext::new(AppConfig::from_env());
    provide_context(ctx);

    if session::has_credential(&BrowserStorage) {
        redirect("/app");
    }

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let config = ctx.config();
        let (username, password) = (username.get_untracked(), password.get_untracked());
        set_busy.set(true);
        spawn_local(async move {
            match auth::login(&ctx.client(), &username, &password).await {
                Ok(_) => {
                    ctx.notify_for(Notice::success("Login successful! Redirecting..."), config.alert_ttl);
                    redirect_after("/app", config.login_redirect_delay);
                }
                Err(e) => {
                    log::error!("Login error: {}", e);
                    ctx.notify_for(Notice::new(NoticeKind::Error, e.to_string(), None), config.alert_ttl);
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-card">
                <div class="auth-header">
                    <h1>"Welcome back"</h1>
                    <p>"Sign in to continue to your tasks"</p>
                </div>
                <ToastContainer variant="alert" />
                <form class="auth-form" on:submit=on_submit>
                    <AuthField
                        field=Field::Username
                        label="Username"
                        icon="fas fa-user"
                        placeholder="Enter your username"
                        value=username
                        set_value=set_username
                    />
                    <AuthField
                        field=Field::Password
                        label="Password"
                        icon="fas fa-lock"
                        input_type="password"
                        placeholder="Enter your password"
                        value=password
                        set_value=set_password
                    />
                    <button
                        type="submit"
                        class=move || if busy.get() { "btn btn-primary btn-full loading" } else { "btn btn-primary btn-full" }
                        disabled=move || busy.get()
                    >
                        <span class="btn-text">"Sign In"</span>
                        <span class="btn-loader"></span>
                    </button>
                </form>
                <p class="auth-footer">
                    "Don't have an account? "
                    <a href="/register">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
