//! Register Page
//!
//! Account creation form with a password strength meter.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{Notice, NoticeKind};
use crate::auth::{self, password_strength, Field, RegisterForm};
use crate::components::{AuthField, ToastContainer};
use crate::config::AppConfig;
use crate::context::{redirect, redirect_after, AppContext};
use crate::session::{self, BrowserStorage};

/// Bar + label under the password input; hidden while the password is empty
#[component]
fn PasswordStrength(password: ReadSignal<String>) -> impl IntoView {
    let strength = move || password_strength(&password.get());

    view! {
        <div class=move || if strength().is_some() { "password-strength visible" } else { "password-strength" }>
            <div class=move || match strength() {
                Some(s) => format!("strength-bar {}", s.class()),
                None => "strength-bar".to_string(),
            }>
                <div class="strength-fill"></div>
            </div>
            <span class="strength-text">
                {move || strength().map(|s| s.label()).unwrap_or("Password strength")}
            </span>
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = AppContext::new(AppConfig::from_env());
    provide_context(ctx);

    if session::has_credential(&BrowserStorage) {
        redirect("/app");
    }

    let (full_name, set_full_name) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let config = ctx.config();
        let form = RegisterForm {
            full_name: full_name.get_untracked(),
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        let user = match form.to_new_user() {
            Ok(user) => user,
            Err(e) => {
                ctx.notify_for(Notice::new(NoticeKind::Error, e.to_string(), None), config.alert_ttl);
                return;
            }
        };

        set_busy.set(true);
        spawn_local(async move {
            match auth::register(&ctx.client(), &user).await {
                Ok(()) => {
                    ctx.notify_for(
                        Notice::success("Registration successful! Please login with your credentials."),
                        config.alert_ttl,
                    );
                    redirect_after("/login", config.register_redirect_delay);
                }
                Err(e) => {
                    log::error!("Registration error: {}", e);
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
                    <h1>"Create your account"</h1>
                    <p>"Start organizing your tasks in minutes"</p>
                </div>
                <ToastContainer variant="alert" />
                <form class="auth-form" on:submit=on_submit>
                    <AuthField
                        field=Field::FullName
                        label="Full Name"
                        icon="fas fa-id-card"
                        placeholder="Jane Doe"
                        value=full_name
                        set_value=set_full_name
                    />
                    <AuthField
                        field=Field::Username
                        label="Username"
                        icon="fas fa-user"
                        placeholder="jane_doe"
                        value=username
                        set_value=set_username
                    />
                    <AuthField
                        field=Field::Email
                        label="Email"
                        icon="fas fa-envelope"
                        input_type="email"
                        placeholder="jane@example.com"
                        value=email
                        set_value=set_email
                    />
                    <AuthField
                        field=Field::Password
                        label="Password"
                        icon="fas fa-lock"
                        input_type="password"
                        value=password
                        set_value=set_password
                    />
                    <PasswordStrength password=password />
                    <AuthField
                        field=Field::ConfirmPassword
                        label="Confirm Password"
                        icon="fas fa-lock"
                        input_type="password"
                        value=confirm_password
                        set_value=set_confirm_password
                    />
                    <button
                        type="submit"
                        class=move || if busy.get() { "btn btn-primary btn-full loading" } else { "btn btn-primary btn-full" }
                        disabled=move || busy.get()
                    >
                        <span class="btn-text">"Create Account"</span>
                        <span class="btn-loader"></span>
                    </button>
                </form>
                <p class="auth-footer">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
