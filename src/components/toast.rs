//! Toast Container Component
//!
//! Renders the notification queue from `AppContext`. Click to dismiss.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Stack of transient notices.
///
/// `variant` picks the markup: `"toast"` for the app (title + message),
/// `"alert"` for the auth pages (single line).
#[component]
pub fn ToastContainer(#[prop(default = "toast")] variant: &'static str) -> impl IntoView {
    let ctx = use_app_context();
    let container_class = if variant == "alert" { "alert-container" } else { "toast-container" };

    view! {
        <div class=container_class>
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let notice = toast.notice;
                    let class = format!("{} {}-{}", variant, variant, notice.kind.as_str());
                    let icon = notice.kind.icon();
                    if variant == "alert" {
                        let text = match notice.message {
                            Some(msg) => format!("{}: {}", notice.title, msg),
                            None => notice.title,
                        };
                        view! {
                            <div class=class on:click=move |_| ctx.dismiss(id)>
                                <i class=icon></i>
                                <span>{text}</span>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <div class=class on:click=move |_| ctx.dismiss(id)>
                                <i class=icon></i>
                                <div class="toast-content">
                                    <div class="toast-title">{notice.title}</div>
                                    {notice.message.map(|msg| view! { <div class="toast-message">{msg}</div> })}
                                </div>
                            </div>
                        }.into_any()
                    }
                }
            />
        </div>
    }
}
