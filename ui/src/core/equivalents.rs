//! Everyday equivalents of a saved CO₂ total.
//!
//! The factors below define what the dashboard means by "equivalent" and must
//! stay in sync with the figures the backend templates print:
//!
//! | quantity              | formula          | rendering        |
//! |-----------------------|------------------|------------------|
//! | phone charges         | `floor(kg × 50)` | integer          |
//! | lightbulb hours       | `floor(kg × 10)` | integer          |
//! | trees per year        | `kg / 21`        | 3 decimals       |
//! | miles not driven      | `kg × 2.31`      | 1 decimal        |

use crate::core::format::to_fixed;

pub const PHONE_CHARGES_PER_KG: f64 = 50.0;
pub const LIGHTBULB_HOURS_PER_KG: f64 = 10.0;
pub const KG_ABSORBED_PER_TREE_YEAR: f64 = 21.0;
pub const MILES_PER_KG: f64 = 2.31;

#[derive(Debug, Clone, PartialEq)]
pub struct Equivalents {
    pub phone_charges: u64,
    pub lightbulb_hours: u64,
    pub trees_per_year: f64,
    pub miles_not_driven: f64,
}

impl Equivalents {
    /// Totals that are negative or not finite count as nothing saved.
    pub fn from_total(kg: f64) -> Self {
        let kg = if kg.is_finite() && kg > 0.0 { kg } else { 0.0 };
        Self {
            phone_charges: (kg * PHONE_CHARGES_PER_KG).floor() as u64,
            lightbulb_hours: (kg * LIGHTBULB_HOURS_PER_KG).floor() as u64,
            trees_per_year: kg / KG_ABSORBED_PER_TREE_YEAR,
            miles_not_driven: kg * MILES_PER_KG,
        }
    }

    pub fn trees_label(&self) -> String {
        to_fixed(self.trees_per_year, 3)
    }

    pub fn miles_label(&self) -> String {
        to_fixed(self.miles_not_driven, 1)
    }

    /// Tiles for the grid layout. Miles are only part of the extended set.
    pub fn tiles(&self, include_miles: bool) -> Vec<EquivalentTile> {
        let mut tiles = vec![
            EquivalentTile {
                kind: EquivalentKind::PhoneCharges,
                value: self.phone_charges.to_string(),
            },
            EquivalentTile {
                kind: EquivalentKind::LightbulbHours,
                value: format!("{}h", self.lightbulb_hours),
            },
            EquivalentTile {
                kind: EquivalentKind::TreesPerYear,
                value: self.trees_label(),
            },
        ];
        if include_miles {
            tiles.push(EquivalentTile {
                kind: EquivalentKind::MilesNotDriven,
                value: format!("{}mi", self.miles_label()),
            });
        }
        tiles
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquivalentKind {
    PhoneCharges,
    LightbulbHours,
    TreesPerYear,
    MilesNotDriven,
}

impl EquivalentKind {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::PhoneCharges => "📱",
            Self::LightbulbHours => "💡",
            Self::TreesPerYear => "🌳",
            Self::MilesNotDriven => "🚗",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EquivalentTile {
    pub kind: EquivalentKind,
    pub value: String,
}
