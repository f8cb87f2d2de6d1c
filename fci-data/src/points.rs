//! Chart-shaping transforms for strip rendering.
//!
//! The strip chart is a one-row scatter: every point shares the constant
//! vertical coordinate and only the bubble size varies. This module maps
//! daily items onto that shape.

use serde::Serialize;

use crate::models::InfectionDevelopmentDataItem;

/// A strip-chart render point: the source item plus the constant `y` that
/// flattens the scatter onto a single horizontal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StripPoint {
    /// The day, as a UTC instant in epoch milliseconds.
    pub date: i64,
    /// Cumulative infection count up to and including `date`.
    pub infections: u64,
    /// New infections reported on `date` only.
    #[serde(rename = "infectionsDaily")]
    pub infections_daily: u64,
    /// Constant zero vertical coordinate.
    pub y: u8,
}

impl From<&InfectionDevelopmentDataItem> for StripPoint {
    fn from(item: &InfectionDevelopmentDataItem) -> Self {
        Self {
            date: item.date,
            infections: item.infections,
            infections_daily: item.infections_daily,
            y: 0,
        }
    }
}

/// Map a 30-day window onto strip points, preserving input order.
pub fn strip_points(items: &[InfectionDevelopmentDataItem]) -> Vec<StripPoint> {
    items.iter().map(StripPoint::from).collect()
}
