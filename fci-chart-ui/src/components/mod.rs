//! Reusable Dioxus RSX components for FCI chart apps.

mod chart_container;
mod chart_header;
mod district_strips;
mod scale_toggle;
mod status;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use district_strips::DistrictStrips;
pub use scale_toggle::ScaleToggle;
pub use status::{ErrorDisplay, LoadingSpinner};
