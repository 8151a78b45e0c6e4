//! Auth Field Component
//!
//! Labeled input with on-blur validation and an optional visibility toggle
//! for passwords. Errors clear as soon as the user types again.

use leptos::prelude::*;

use crate::auth::{validate_field, Field};

#[component]
pub fn AuthField(
    field: Field,
    label: &'static str,
    icon: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let (error, set_error) = signal::<Option<String>>(None);
    let (revealed, set_revealed) = signal(false);
    let is_password = input_type == "password";

    let current_type = move || {
        if is_password && !revealed.get() {
            "password"
        } else if is_password {
            "text"
        } else {
            input_type
        }
    };

    let on_blur = move |_| {
        set_error.set(validate_field(field, &value.get_untracked()).err().map(|e| e.to_string()));
    };

    view! {
        <div class="form-group">
            <label>{label}</label>
            <div class=move || if error.get().is_some() { "input-group invalid" } else { "input-group" }>
                <i class=icon></i>
                <input
                    type=current_type
                    placeholder=placeholder
                    required=true
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        set_value.set(event_target_value(&ev));
                        set_error.set(None);
                    }
                    on:blur=on_blur
                />
                {is_password.then(|| view! {
                    <button
                        type="button"
                        class="toggle-password"
                        on:click=move |_| set_revealed.update(|r| *r = !*r)
                    >
                        <i class=move || if revealed.get() { "fas fa-eye-slash" } else { "fas fa-eye" }></i>
                    </button>
                })}
            </div>
            {move || error.get().map(|msg| view! {
                <div class="field-error">
                    <i class="fas fa-exclamation-circle"></i>
                    " "
                    {msg}
                </div>
            })}
        </div>
    }
}
