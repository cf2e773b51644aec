use dioxus::prelude::*;

use crate::components::{EquivalentsBox, ImpactChart, LogModal, ParticleField, RevealCard};
use crate::core::chart::chart_plan;
use crate::core::timing;
use crate::page::PageContext;
use crate::t;

/// Flag that flips to `true` once `delay_ms` has passed. Zero is ready on the
/// first render.
fn use_stage(delay_ms: u64) -> Signal<bool> {
    let mut ready = use_signal(|| delay_ms == 0);
    use_hook(move || {
        if delay_ms > 0 {
            spawn(async move {
                timing::sleep_ms(delay_ms).await;
                ready.set(true);
            });
        }
    });
    ready
}

#[component]
pub fn DashboardView(context: PageContext) -> Element {
    // Subscribe to the shared locale so labels refresh after a switch.
    if let Some(lang) = try_use_context::<Signal<String>>() {
        let _ = lang.read();
    }

    let tier = context.tier;
    let layout = context.layout;
    let chart_ready = use_stage(tier.chart_delay_ms());
    let equivalents_ready = use_stage(tier.equivalents_delay_ms());

    let chart = chart_plan(
        &layout,
        context.series.as_ref(),
        &t!("chart-dataset-label"),
    );
    let total = context.total.filter(|_| layout.equivalents);
    let animate = tier.effects();

    rsx! {
        section { class: "page page-dashboard",
            header { class: "page-dashboard__intro",
                h1 { {t!("dashboard-title")} }
                p { {t!("dashboard-intro")} }
            }

            div { class: "page-dashboard__grid",
                if let Some(spec) = chart {
                    RevealCard { class: "card--chart", animate,
                        h2 { {t!("chart-title")} }
                        if chart_ready() {
                            ImpactChart { spec }
                        }
                    }
                }

                if let Some(total_kg) = total {
                    RevealCard { class: "card--equivalents", animate,
                        h2 { {t!("equivalents-title")} }
                        if equivalents_ready() {
                            EquivalentsBox { total_kg, tier }
                        }
                    }
                }
            }

            LogModal { layout, tier, endpoint: context.endpoint.clone() }

            if animate {
                ParticleField {}
            }
        }
    }
}
