//! Shared UI crate for EcoTrack. Logic, components and the dashboard view
//! live here; platform crates only launch and route.

pub mod api;
pub mod core;
pub mod i18n;
pub mod page;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    pub mod effects;
    pub use effects::{LiftButton, ParticleField, RevealCard};

    pub mod equivalents_box;
    pub use equivalents_box::EquivalentsBox;

    pub mod impact_chart;
    pub use impact_chart::ImpactChart;

    pub mod log_modal;
    pub use log_modal::LogModal;
}

pub use page::PageContext;
