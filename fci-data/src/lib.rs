//! Pre-aggregated infection data for the FCI chart apps.
//!
//! This crate owns the typed model of the upstream aggregation pipeline's
//! output document (district name -> 30-day time series), the JSON loader
//! for it, and the chart-shaping transform that turns daily items into
//! strip-chart render points.
//!
//! # Usage
//!
//! ```rust
//! let json = r#"{
//!   "all": { "timeSeries": { "infectionDevelopmentData30Days": [
//!     { "date": 1635897600000, "infections": 120, "infectionsDaily": 7 }
//!   ] } }
//! }"#;
//!
//! let data = fci_data::load_grouped_data(json).unwrap();
//! let record = &data["all"];
//! let points = fci_data::points::strip_points(
//!     &record.time_series.infection_development_data_30_days,
//! );
//! assert_eq!(points[0].y, 0);
//! ```

pub mod models;
mod loader;
pub mod points;

pub use loader::load_grouped_data;
pub use models::{GroupedData, ALL_DISTRICTS_KEY};
