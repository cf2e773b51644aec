pub mod chart;
pub mod effects;
pub mod equivalents;
pub mod format;
pub mod platform;
pub mod series;
pub mod timing;
