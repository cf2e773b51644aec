//! Ordered category → kg CO₂ series injected by the page template.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One bar's worth of data.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub amount_kg: f64,
}

/// Category labels mapped to saved CO₂, in the order the page supplied them.
///
/// Deserializes from a JSON object and keeps key order, since that order is
/// the bar order on the chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    points: Vec<SeriesPoint>,
}

impl Series {
    pub fn new<L: Into<String>>(entries: impl IntoIterator<Item = (L, f64)>) -> Self {
        Self {
            points: entries
                .into_iter()
                .map(|(label, amount_kg)| SeriesPoint {
                    label: label.into(),
                    amount_kg,
                })
                .collect(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }

    pub fn amounts(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.amount_kg).collect()
    }
}

impl Serialize for Series {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.points.len()))?;
        for point in &self.points {
            map.serialize_entry(&point.label, &point.amount_kg)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Series {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SeriesVisitor;

        impl<'de> Visitor<'de> for SeriesVisitor {
            type Value = Series;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping category labels to numbers")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Series, A::Error> {
                let mut points = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, amount_kg)) = access.next_entry::<String, f64>()? {
                    points.push(SeriesPoint { label, amount_kg });
                }
                Ok(Series { points })
            }
        }

        deserializer.deserialize_map(SeriesVisitor)
    }
}
