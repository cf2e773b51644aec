//! Page-level context and controller state.
//!
//! The server template injects a handful of globals before the app boots.
//! They are read exactly once, in [`PageContext::from_host`], and then passed
//! down as plain data. Anything missing simply switches the matching section
//! off.

pub mod state;

pub use state::{FormState, ModalState, PageState};

use serde::Deserialize;

use crate::api::log::DEFAULT_LOG_ENDPOINT;
use crate::core::platform;
use crate::core::series::Series;

/// Injected global names.
pub const SERIES_GLOBAL: &str = "SERIES";
pub const TOTAL_GLOBAL: &str = "TOTAL";
pub const TIER_GLOBAL: &str = "UI_TIER";
pub const ENDPOINT_GLOBAL: &str = "LOG_ENDPOINT";
pub const LAYOUT_GLOBAL: &str = "PAGE_LAYOUT";

/// Which flavour of the dashboard to run.
///
/// `Basic` is the plain page: synchronous rendering, one-line equivalents,
/// quick reload. `Polished` adds staged reveals, the miles equivalent, a
/// minimum "Saving…" display and the decorative effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiTier {
    Basic,
    #[default]
    Polished,
}

impl UiTier {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "basic" => Some(Self::Basic),
            "polished" | "enhanced" => Some(Self::Polished),
            _ => None,
        }
    }

    pub fn chart_delay_ms(&self) -> u64 {
        match self {
            Self::Basic => 0,
            Self::Polished => 500,
        }
    }

    pub fn equivalents_delay_ms(&self) -> u64 {
        match self {
            Self::Basic => 0,
            Self::Polished => 800,
        }
    }

    pub fn reload_delay_ms(&self) -> u64 {
        match self {
            Self::Basic => 600,
            Self::Polished => 1_500,
        }
    }

    /// How long the submit control stays busy after the request settles.
    pub fn release_delay_ms(&self) -> u64 {
        match self {
            Self::Basic => 0,
            Self::Polished => 1_000,
        }
    }

    pub fn pulse_ms(&self) -> Option<u64> {
        match self {
            Self::Basic => None,
            Self::Polished => Some(2_000),
        }
    }

    pub fn shows_miles(&self) -> bool {
        matches!(self, Self::Polished)
    }

    pub fn effects(&self) -> bool {
        matches!(self, Self::Polished)
    }
}

/// Sections of the page. `false` behaves like the element being absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub chart: bool,
    pub equivalents: bool,
    pub modal: bool,
    pub open_trigger: bool,
    pub close_trigger: bool,
    pub form: bool,
    pub result: bool,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            chart: true,
            equivalents: true,
            modal: true,
            open_trigger: true,
            close_trigger: true,
            form: true,
            result: true,
        }
    }
}

impl PageLayout {
    /// The modal can only be opened when both it and its trigger exist.
    pub fn can_open_modal(&self) -> bool {
        self.modal && self.open_trigger
    }

    pub fn can_close_modal(&self) -> bool {
        self.modal && self.close_trigger
    }
}

/// Everything the dashboard knows at boot.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContext {
    pub series: Option<Series>,
    pub total: Option<f64>,
    pub tier: UiTier,
    pub endpoint: String,
    pub layout: PageLayout,
}

impl Default for PageContext {
    fn default() -> Self {
        Self {
            series: None,
            total: None,
            tier: UiTier::default(),
            endpoint: DEFAULT_LOG_ENDPOINT.to_string(),
            layout: PageLayout::default(),
        }
    }
}

impl PageContext {
    /// Read the injected globals from the host page.
    pub fn from_host() -> Self {
        let context = Self::from_lookup(platform::read_global_json);
        tracing::info!(
            platform = platform::Platform::current().as_str(),
            tier = ?context.tier,
            has_series = context.series.is_some(),
            has_total = context.total.is_some(),
            endpoint = %context.endpoint,
            "page context loaded"
        );
        context
    }

    /// Build a context from a `name -> JSON text` lookup. Malformed values are
    /// logged and treated as absent.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let series =
            lookup(SERIES_GLOBAL).and_then(|raw| parse_or_warn::<Series>(SERIES_GLOBAL, &raw));
        let total =
            lookup(TOTAL_GLOBAL).and_then(|raw| parse_or_warn::<f64>(TOTAL_GLOBAL, &raw));
        let tier = lookup(TIER_GLOBAL)
            .and_then(|raw| parse_or_warn::<String>(TIER_GLOBAL, &raw))
            .and_then(|raw| {
                let parsed = UiTier::parse(&raw);
                if parsed.is_none() {
                    tracing::warn!("ignoring unknown {TIER_GLOBAL} value {raw:?}");
                }
                parsed
            })
            .unwrap_or_default();
        let endpoint = lookup(ENDPOINT_GLOBAL)
            .and_then(|raw| parse_or_warn::<String>(ENDPOINT_GLOBAL, &raw))
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_ENDPOINT.to_string());
        let layout = lookup(LAYOUT_GLOBAL)
            .and_then(|raw| parse_or_warn::<PageLayout>(LAYOUT_GLOBAL, &raw))
            .unwrap_or_default();

        Self {
            series,
            total,
            tier,
            endpoint,
            layout,
        }
    }
}

fn parse_or_warn<T: serde::de::DeserializeOwned>(name: &str, raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!("ignoring malformed {name}: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn empty_host_yields_defaults() {
        let ctx = PageContext::from_lookup(|_| None);
        assert_eq!(ctx, PageContext::default());
        assert_eq!(ctx.endpoint, "/api/log");
        assert_eq!(ctx.tier, UiTier::Polished);
    }

    #[test]
    fn injected_values_are_read() {
        let ctx = PageContext::from_lookup(lookup_from(&[
            ("SERIES", r#"{"Transport":5,"Diet":3}"#),
            ("TOTAL", "8"),
            ("UI_TIER", r#""basic""#),
            ("LOG_ENDPOINT", r#""/v2/log""#),
            ("PAGE_LAYOUT", r#"{"chart":false}"#),
        ]));

        assert_eq!(
            ctx.series.as_ref().map(|s| s.labels()),
            Some(vec!["Transport".to_string(), "Diet".to_string()])
        );
        assert_eq!(ctx.total, Some(8.0));
        assert_eq!(ctx.tier, UiTier::Basic);
        assert_eq!(ctx.endpoint, "/v2/log");
        assert!(!ctx.layout.chart);
        assert!(ctx.layout.equivalents);
    }

    #[test]
    fn malformed_values_count_as_absent() {
        let ctx = PageContext::from_lookup(lookup_from(&[
            ("SERIES", "[1,2,3]"),
            ("TOTAL", r#""lots""#),
            ("UI_TIER", r#""fancy""#),
            ("LOG_ENDPOINT", r#""  ""#),
        ]));
        assert!(ctx.series.is_none());
        assert!(ctx.total.is_none());
        assert_eq!(ctx.tier, UiTier::Polished);
        assert_eq!(ctx.endpoint, "/api/log");
    }

    #[test]
    fn tiers_diverge_on_timing_and_features() {
        assert_eq!(UiTier::Basic.reload_delay_ms(), 600);
        assert_eq!(UiTier::Polished.reload_delay_ms(), 1_500);
        assert_eq!(UiTier::Basic.release_delay_ms(), 0);
        assert_eq!(UiTier::Polished.release_delay_ms(), 1_000);
        assert!(!UiTier::Basic.shows_miles());
        assert!(UiTier::Polished.shows_miles());
        assert_eq!(UiTier::parse("Enhanced"), Some(UiTier::Polished));
    }

    #[test]
    fn modal_needs_its_triggers() {
        let layout = PageLayout {
            open_trigger: false,
            ..PageLayout::default()
        };
        assert!(!layout.can_open_modal());
        assert!(layout.can_close_modal());
    }
}
