use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::i18n;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Router links supplied by the platform crate, which owns the `Route` enum.
///
/// ```ignore
/// register_nav(NavBuilder {
///     dashboard: |label| rsx!( Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub dashboard: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("navbar links already registered");
    }
}

/// Brand bar with the dashboard link and the locale picker. Falls back to
/// `children` for the links when no builder was registered.
#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    // Shared with the views so they re-render after a switch. Without a
    // provider the navbar tracks the locale on its own.
    let local = use_signal(i18n::current_language);
    let mut lang = try_use_context::<Signal<String>>().unwrap_or(local);
    let locales = use_hook(i18n::available_languages);
    let selected = lang();

    let on_change = move |evt: FormEvent| {
        let tag = evt.value();
        match i18n::set_language(&tag) {
            Ok(()) => {
                tracing::debug!(lang = %tag, "locale switched");
                lang.set(i18n::current_language());
            }
            Err(err) => tracing::warn!("locale switch to {tag} failed: {err}"),
        }
    };

    let links = match NAV_BUILDER.get() {
        Some(builder) => (builder.dashboard)(&t!("nav-dashboard")),
        None => children,
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "navbar glass-effect", "data-lang": "{selected}",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-leaf", aria_hidden: "true", "🌿" }
                        span { class: "navbar__brand-mark", "EcoTrack" }
                    }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                nav { class: "navbar__links", {links} }

                if locales.len() > 1 {
                    div { class: "navbar__locale",
                        label { class: "visually-hidden", r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select { id: "locale-select", value: "{selected}", oninput: on_change,
                            for code in locales.iter() {
                                option {
                                    key: "{code}",
                                    value: "{code}",
                                    selected: *code == selected,
                                    "{code}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
