//! Per-district strip chart derivation.
//!
//! Pure helpers that turn the district document plus the selected scale
//! into the container ids, labels and JSON payloads the D3 bridge needs.
//! One spec per document entry, in document order; nothing here sorts,
//! filters or aggregates.

use fci_data::points::{strip_points, StripPoint};
use fci_data::{GroupedData, ALL_DISTRICTS_KEY};

use crate::i18n::Translator;
use crate::state::ChartScale;

/// Strip height in pixels; the charts are sparkline-sized rows.
pub const STRIP_HEIGHT_PX: u32 = 25;

/// Bubble fill color, shared by every strip and both scales.
pub const BUBBLE_FILL: &str = "#f3858d";

/// Rendered bubble-size range in area units, both scales.
pub const BUBBLE_SIZE_RANGE: [u64; 2] = [0, 350];

/// Everything needed to render one district's strip.
#[derive(Debug, Clone, PartialEq)]
pub struct StripSpec {
    /// DOM id of the container div D3 renders into. Positional, because
    /// district keys are display strings and make poor DOM ids.
    pub container_id: String,
    /// Inline axis label: localized "total" for the aggregate entry, the
    /// district key verbatim otherwise.
    pub label: String,
    /// Render points in document order.
    pub points: Vec<StripPoint>,
}

/// Derive one spec per document entry, in document order.
pub fn build_strip_specs(data: &GroupedData, translator: &Translator) -> Vec<StripSpec> {
    data.iter()
        .enumerate()
        .map(|(index, (key, record))| StripSpec {
            container_id: strip_container_id(index),
            label: strip_label(key, translator),
            points: strip_points(&record.time_series.infection_development_data_30_days),
        })
        .collect()
}

/// Container id for the strip at `index`.
pub fn strip_container_id(index: usize) -> String {
    format!("district-strip-{index}")
}

/// Axis label for a district key.
pub fn strip_label(key: &str, translator: &Translator) -> String {
    if key == ALL_DISTRICTS_KEY {
        translator.t("total").to_string()
    } else {
        key.to_string()
    }
}

/// Data JSON for the D3 bridge.
pub fn strip_data_json(spec: &StripSpec) -> String {
    serde_json::to_string(&spec.points).unwrap_or_default()
}

/// Config JSON for the D3 bridge.
pub fn strip_config_json(spec: &StripSpec, scale: ChartScale) -> String {
    serde_json::to_string(&serde_json::json!({
        "label": spec.label,
        "height": STRIP_HEIGHT_PX,
        "fill": BUBBLE_FILL,
        "magnitudeField": scale.magnitude_field(),
        "sizeDomain": scale.size_domain(),
        "sizeRange": BUBBLE_SIZE_RANGE,
    }))
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn sample_data() -> GroupedData {
        fci_data::load_grouped_data(
            r#"{
                "all": { "timeSeries": { "infectionDevelopmentData30Days": [
                    { "date": 1635811200000, "infections": 114, "infectionsDaily": 9 },
                    { "date": 1635897600000, "infections": 120, "infectionsDaily": 6 }
                ] } },
                "HUS": { "timeSeries": { "infectionDevelopmentData30Days": [
                    { "date": 1635897600000, "infections": 74, "infectionsDaily": 4 }
                ] } },
                "Lappi": { "timeSeries": { "infectionDevelopmentData30Days": [] } }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_one_spec_per_entry_in_document_order() {
        let data = sample_data();
        let specs = build_strip_specs(&data, &Translator::new(Language::English));

        assert_eq!(specs.len(), data.len());
        assert_eq!(specs[0].container_id, "district-strip-0");
        assert_eq!(specs[1].container_id, "district-strip-1");
        assert_eq!(specs[2].container_id, "district-strip-2");
        assert_eq!(specs[1].label, "HUS");
        assert_eq!(specs[2].label, "Lappi");
    }

    #[test]
    fn test_aggregate_entry_labels_as_localized_total() {
        let data = sample_data();

        let english = build_strip_specs(&data, &Translator::new(Language::English));
        assert_eq!(english[0].label, "total");

        let finnish = build_strip_specs(&data, &Translator::new(Language::Finnish));
        assert_eq!(finnish[0].label, "yhteensä");
    }

    #[test]
    fn test_empty_window_yields_empty_strip() {
        let data = sample_data();
        let specs = build_strip_specs(&data, &Translator::new(Language::Finnish));
        assert!(specs[2].points.is_empty());
        assert_eq!(strip_data_json(&specs[2]), "[]");
    }

    #[test]
    fn test_config_json_tracks_scale() {
        let data = sample_data();
        let spec = &build_strip_specs(&data, &Translator::new(Language::English))[1];

        let daily: serde_json::Value =
            serde_json::from_str(&strip_config_json(spec, ChartScale::Daily)).unwrap();
        assert_eq!(daily["magnitudeField"], "infectionsDaily");
        assert_eq!(daily["sizeDomain"], serde_json::json!([0, 50]));
        assert_eq!(daily["sizeRange"], serde_json::json!([0, 350]));
        assert_eq!(daily["fill"], "#f3858d");
        assert_eq!(daily["height"], 25);

        let cumulative: serde_json::Value =
            serde_json::from_str(&strip_config_json(spec, ChartScale::Cumulative)).unwrap();
        assert_eq!(cumulative["magnitudeField"], "infections");
        assert_eq!(cumulative["sizeDomain"], serde_json::json!([0, 350]));
        assert_eq!(cumulative["sizeRange"], serde_json::json!([0, 350]));
    }

    #[test]
    fn test_scale_round_trip_restores_config() {
        let data = sample_data();
        let spec = &build_strip_specs(&data, &Translator::new(Language::Finnish))[0];

        let before = strip_config_json(spec, ChartScale::Daily);
        let _toggled = strip_config_json(spec, ChartScale::Cumulative);
        let after = strip_config_json(spec, ChartScale::Daily);
        assert_eq!(before, after);
    }

    #[test]
    fn test_data_json_carries_points_in_order() {
        let data = sample_data();
        let spec = &build_strip_specs(&data, &Translator::new(Language::Finnish))[0];

        let points: serde_json::Value = serde_json::from_str(&strip_data_json(spec)).unwrap();
        assert_eq!(points.as_array().unwrap().len(), 2);
        assert_eq!(points[0]["date"], 1_635_811_200_000_i64);
        assert_eq!(points[0]["y"], 0);
        assert_eq!(points[1]["infectionsDaily"], 6);
    }
}
