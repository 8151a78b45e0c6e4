//! Landing Page
//!
//! Marketing page. Hero lines fade in one after another; in-page links
//! scroll smoothly to their section.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const HERO_START_MS: u32 = 300;
const HERO_STAGGER_MS: u32 = 200;

const FEATURES: &[(&str, &str, &str)] = &[
    ("fas fa-bolt", "Fast capture", "Add a task in seconds and get back to work."),
    ("fas fa-filter", "Smart filters", "Slice your list by status or priority with one click."),
    ("fas fa-chart-pie", "Progress at a glance", "The dashboard shows what is done and what is left."),
    ("fas fa-moon", "Light and dark", "Pick the theme that suits your eyes; it is remembered."),
];

/// Scroll to the element matching `selector`
fn smooth_scroll_to(selector: &str) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten());
    if let Some(el) = target {
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

#[component]
fn NavAnchor(target: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=target
            on:click=move |ev| {
                ev.prevent_default();
                smooth_scroll_to(target);
            }
        >
            {label}
        </a>
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    // Number of hero lines revealed so far
    let (revealed, set_revealed) = signal(0usize);

    Effect::new(move |_| {
        spawn_local(async move {
            TimeoutFuture::new(HERO_START_MS).await;
            for step in 1..=3 {
                set_revealed.set(step);
                TimeoutFuture::new(HERO_STAGGER_MS).await;
            }
        });
    });

    let hero_class = move |index: usize, base: &'static str| {
        move || {
            if revealed.get() > index {
                format!("{} revealed", base)
            } else {
                base.to_string()
            }
        }
    };

    view! {
        <div class="landing">
            <nav class="landing-nav">
                <div class="logo">
                    <i class="fas fa-check-double"></i>
                    <span>"TaskFlow"</span>
                </div>
                <div class="nav-links">
                    <NavAnchor target="#features" label="Features" />
                    <NavAnchor target="#get-started" label="Get Started" />
                    <a href="/login">"Login"</a>
                    <a class="btn btn-primary" href="/register">"Sign Up"</a>
                </div>
            </nav>

            <section class="hero">
                <h1 class=hero_class(0, "hero-title")>"Organize your work, one task at a time"</h1>
                <p class=hero_class(1, "hero-subtitle")>
                    "A simple task manager with priorities, filters and a clear dashboard."
                </p>
                <div class=hero_class(2, "hero-actions")>
                    <a class="btn btn-primary" href="/register">"Get Started Free"</a>
                    <a class="btn btn-secondary" href="/app">"Try the Demo"</a>
                </div>
            </section>

            <section id="features" class="features">
                <h2 class="section-title">"Everything you need"</h2>
                <div class="feature-grid">
                    {FEATURES.iter().map(|(icon, title, text)| view! {
                        <div class="feature-item">
                            <i class=*icon></i>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section id="get-started" class="cta">
                <h2 class="section-title">"Ready to get things done?"</h2>
                <a class="btn btn-primary" href="/register">"Create your account"</a>
            </section>
        </div>
    }
}
