//! Reusable Dioxus RSX components for the tankage dashboard.

mod chart_container;
mod error_display;
mod loading_spinner;
mod region_selector;
mod section_header;
mod stat_card;

pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use region_selector::RegionSelector;
pub use section_header::SectionHeader;
pub use stat_card::StatCard;
