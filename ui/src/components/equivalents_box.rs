use dioxus::prelude::*;

use crate::core::equivalents::{EquivalentKind, EquivalentTile, Equivalents};
use crate::page::UiTier;
use crate::t;

/// Equivalents of the page total. Basic tier prints one line, polished
/// shows the tile grid with the miles figure.
#[component]
pub fn EquivalentsBox(total_kg: f64, tier: UiTier) -> Element {
    let equivalents = Equivalents::from_total(total_kg);

    match tier {
        UiTier::Basic => rsx! {
            p { id: "equivalentsBox", class: "equivalents equivalents--line",
                {summary_line(&equivalents)}
            }
        },
        UiTier::Polished => {
            let tiles = equivalents.tiles(tier.shows_miles());
            rsx! {
                div { id: "equivalentsBox", class: "equivalents equivalents--grid fade-in-up",
                    for tile in tiles {
                        {render_tile(tile)}
                    }
                }
            }
        }
    }
}

fn render_tile(tile: EquivalentTile) -> Element {
    let caption = tile_caption(tile.kind);
    rsx! {
        div { key: "{tile.kind.icon()}", class: "equivalents__tile",
            span { class: "equivalents__icon", aria_hidden: "true", "{tile.kind.icon()}" }
            div {
                p { class: "equivalents__value", "{tile.value}" }
                p { class: "equivalents__caption", "{caption}" }
            }
        }
    }
}

fn tile_caption(kind: EquivalentKind) -> String {
    match kind {
        EquivalentKind::PhoneCharges => t!("equivalents-phone"),
        EquivalentKind::LightbulbHours => t!("equivalents-bulb"),
        EquivalentKind::TreesPerYear => t!("equivalents-trees"),
        EquivalentKind::MilesNotDriven => t!("equivalents-miles"),
    }
}

/// One-line rendering used by the basic tier.
pub fn summary_line(equivalents: &Equivalents) -> String {
    t!(
        "equivalents-summary",
        phone = equivalents.phone_charges.to_string(),
        bulb = equivalents.lightbulb_hours.to_string(),
        trees = equivalents.trees_label()
    )
}
