//! Model structs for the pre-aggregated district document.
//!
//! Field names mirror the JSON produced by the upstream aggregation
//! pipeline (camelCase), hence the explicit serde renames. Everything also
//! derives `Serialize` so render points can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Pre-aggregated data for every healthcare district, keyed by district
/// name, with the reserved key [`ALL_DISTRICTS_KEY`] holding the aggregate
/// across all districts.
///
/// Backed by `IndexMap`: document order is preserved, and it is the order
/// the strips render in.
pub type GroupedData = IndexMap<String, DistrictRecord>;

/// Reserved `GroupedData` key for the aggregate-across-all-districts entry.
pub const ALL_DISTRICTS_KEY: &str = "all";

/// Per-district slice of the pre-aggregated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictRecord {
    /// Time-series block computed upstream. Required; a document without it
    /// fails loading.
    #[serde(rename = "timeSeries")]
    pub time_series: DistrictTimeSeries,
}

/// Time-series block for one district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictTimeSeries {
    /// Rolling 30-day window of daily items, oldest first. The ordering is
    /// the pipeline's contract; nothing downstream re-sorts.
    #[serde(rename = "infectionDevelopmentData30Days")]
    pub infection_development_data_30_days: Vec<InfectionDevelopmentDataItem>,
}

/// One day of infection development data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfectionDevelopmentDataItem {
    /// The day, identified as a UTC instant in epoch milliseconds.
    pub date: i64,
    /// Cumulative infection count up to and including `date`.
    pub infections: u64,
    /// New infections reported on `date` only.
    #[serde(rename = "infectionsDaily")]
    pub infections_daily: u64,
}
