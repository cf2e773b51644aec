//! Decorative wrappers for the polished tier: scroll reveal, hover lift and
//! ambient particles.

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::effects::{hover_transform, Particle, ParticleSpawner, PARTICLE_INTERVAL_MS};
use crate::core::{platform, timing};

/// Card that fades in the first time it scrolls into view.
///
/// With `animate` off (basic tier) the card renders plainly.
#[component]
pub fn RevealCard(class: String, animate: bool, children: Element) -> Element {
    let mut revealed = use_signal(|| !animate || !cfg!(target_arch = "wasm32"));

    let reveal = use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        if rx.next().await.is_some() {
            revealed.set(true);
        }
    });

    let state_class = match (animate, revealed()) {
        (false, _) => "",
        (true, true) => "fade-in-up",
        (true, false) => "card--pending",
    };

    rsx! {
        section {
            class: "card {class} {state_class}",
            onmounted: move |evt: MountedEvent| {
                if animate && !revealed() {
                    observe_reveal(&evt, reveal.tx());
                }
            },
            {children}
        }
    }
}

/// Watch the mounted element and send once it is at least 10% visible.
#[cfg(target_arch = "wasm32")]
fn observe_reveal(evt: &MountedEvent, tx: UnboundedSender<()>) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::core::effects::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

    let Some(element) = evt.data().downcast::<web_sys::Element>().cloned() else {
        let _ = tx.unbounded_send(());
        return;
    };

    let on_intersect = {
        let tx = tx.clone();
        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        observer.unobserve(&entry.target());
                        let _ = tx.unbounded_send(());
                    }
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&element);
            // The observer lives as long as the page.
            on_intersect.forget();
        }
        Err(err) => {
            tracing::warn!("IntersectionObserver unavailable ({err:?}); revealing immediately");
            let _ = tx.unbounded_send(());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn observe_reveal(_evt: &MountedEvent, tx: UnboundedSender<()>) {
    let _ = tx.unbounded_send(());
}

/// Button that lifts slightly under the pointer when `lift` is set.
#[component]
pub fn LiftButton(
    class: String,
    #[props(default = "button".to_string())] kind: String,
    #[props(default)] disabled: bool,
    #[props(default)] lift: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let mut hovered = use_signal(|| false);
    let style = if lift {
        format!("transform: {}", hover_transform(hovered()))
    } else {
        String::new()
    };

    rsx! {
        button {
            r#type: "{kind}",
            class: "{class}",
            style: "{style}",
            disabled: disabled,
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

/// Ambient particles drifting up from the bottom edge. Runs until the page
/// goes away.
#[component]
pub fn ParticleField() -> Element {
    let mut particles = use_signal(Vec::<Particle>::new);

    use_future(move || async move {
        let mut spawner = ParticleSpawner::new(StdRng::from_entropy());
        loop {
            timing::sleep_ms(PARTICLE_INTERVAL_MS).await;
            let (width, height) = platform::viewport_size();
            let Some(particle) = spawner.tick(width, height) else {
                continue;
            };

            let id = particle.id;
            let lifetime = particle.duration_ms;
            particles.write().push(particle);
            spawn(async move {
                timing::sleep_ms(lifetime).await;
                particles.write().retain(|p| p.id != id);
            });
        }
    });

    rsx! {
        div { class: "particle-field", aria_hidden: "true",
            for particle in particles() {
                div { key: "{particle.id}", class: "particle", style: "{particle.style()}" }
            }
        }
    }
}
