use dioxus::prelude::*;

use crate::api::log::{submit_entry, HttpLogClient, SubmitOutcome};
use crate::components::effects::LiftButton;
use crate::core::format::format_amount;
use crate::core::{platform, timing};
use crate::page::{PageLayout, PageState, UiTier};
use crate::t;

/// Open trigger, modal and log form.
///
/// Owns the page controller state. A successful save schedules a full page
/// reload instead of patching the chart in place.
#[component]
pub fn LogModal(layout: PageLayout, tier: UiTier, endpoint: String) -> Element {
    let mut page = use_signal(PageState::default);
    let client = use_hook(|| HttpLogClient::new(endpoint.clone()));
    let effects = tier.effects();

    let open_modal = move |_: MouseEvent| {
        if let Some(pulse_ms) = page.with_mut(|p| p.open_modal(tier)) {
            spawn(async move {
                timing::sleep_ms(pulse_ms).await;
                page.with_mut(|p| p.end_pulse());
            });
        }
    };

    let close_modal = move |_: MouseEvent| page.with_mut(|p| p.close_modal());

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(entry) = page.with_mut(|p| p.begin_submit()) else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let outcome = submit_entry(&client, &entry).await;
            if let Some(reload_ms) = page.with_mut(|p| p.finish_submit(outcome, tier)) {
                spawn(async move {
                    timing::sleep_ms(reload_ms).await;
                    platform::reload_page();
                });
            }
            timing::sleep_ms(tier.release_delay_ms()).await;
            page.with_mut(|p| p.release_submit());
        });
    };

    let state = page();
    let busy = state.is_busy();
    let modal_class = if state.is_open() {
        "modal flex"
    } else {
        "modal hidden"
    };
    let trigger_class = if state.pulse {
        "button button--primary eco-gradient pulse-glow"
    } else {
        "button button--primary eco-gradient"
    };

    let form = if layout.form {
        rsx! {
            form { id: "logForm", class: "log-form", onsubmit: on_submit,
                label { class: "log-form__label", r#for: "entry", {t!("log-entry-label")} }
                input {
                    id: "entry",
                    name: "entry",
                    r#type: "text",
                    class: "log-form__input",
                    autocomplete: "off",
                    placeholder: t!("log-entry-placeholder"),
                    value: "{state.entry}",
                    oninput: move |evt: FormEvent| page.with_mut(|p| p.set_entry(evt.value())),
                }
                LiftButton {
                    class: "button button--primary eco-gradient log-form__submit",
                    kind: "submit",
                    disabled: busy,
                    lift: effects,
                    if busy {
                        span { class: "log-form__busy",
                            span { class: "spinner", aria_hidden: "true" }
                            span { {t!("log-saving")} }
                        }
                    } else {
                        {t!("log-submit")}
                    }
                }
            }
            if layout.result {
                {render_result(state.result.as_ref(), effects)}
            }
        }
    } else {
        rsx! {}
    };

    rsx! {
        if layout.can_open_modal() {
            LiftButton {
                class: trigger_class,
                lift: effects,
                onclick: open_modal,
                {t!("log-open")}
            }
        }

        if layout.modal {
            div { id: "logModal", class: modal_class, role: "dialog",
                div { class: "modal__panel",
                    div { class: "modal__header",
                        h2 { {t!("log-title")} }
                        if layout.can_close_modal() {
                            button {
                                r#type: "button",
                                class: "modal__close",
                                aria_label: t!("log-close"),
                                onclick: close_modal,
                                "×"
                            }
                        }
                    }
                    {form}
                }
            }
        } else {
            section { class: "log-inline", {form} }
        }
    }
}

fn render_result(result: Option<&SubmitOutcome>, animate: bool) -> Element {
    let Some(outcome) = result else {
        return rsx! {
            div { id: "logResult", class: "log-result hidden" }
        };
    };

    let tone = match outcome {
        SubmitOutcome::Saved(_) => "log-result--success",
        SubmitOutcome::Failed { .. } => "log-result--error",
    };
    let text = result_text(outcome);
    let reveal = if animate { "fade-in-up" } else { "" };

    rsx! {
        div { id: "logResult", class: "log-result {tone} {reveal}", role: "status", "{text}" }
    }
}

/// Banner text for a settled submission.
pub fn result_text(outcome: &SubmitOutcome) -> String {
    match outcome {
        SubmitOutcome::Saved(saved) => {
            let category = saved
                .category
                .clone()
                .unwrap_or_else(|| t!("log-category-unknown"));
            let message = t!(
                "log-saved",
                kg = format_amount(saved.co2_saved_kg),
                category = category
            );
            format!("🎉 {message}")
        }
        SubmitOutcome::Failed { message } => {
            let message = message.clone().unwrap_or_else(|| t!("log-failed"));
            format!("⚠️ {message}")
        }
    }
}
