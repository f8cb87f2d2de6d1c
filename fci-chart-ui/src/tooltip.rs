//! Hover tooltip content for the bubble strips.
//!
//! On hover the D3 layer calls back into Rust. At that boundary the raw
//! hover values are assembled once into [`HoverPayload`]; everything past
//! it works with named fields, never positional indices.

use serde::Serialize;

use crate::i18n::Translator;

/// Named hover payload assembled at the charting-integration boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverPayload {
    /// Hovered day as a UTC instant in epoch milliseconds.
    pub date_value: Option<i64>,
    /// Case count under the currently selected scale.
    pub magnitude_value: Option<u64>,
}

/// Tooltip content handed back to the JS layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipContent {
    /// Helsinki-local date heading, "d.M.yyyy".
    pub heading: String,
    /// Localized case-count line.
    pub body: String,
}

/// Format tooltip content for a hover payload.
///
/// Fails closed: returns `None` on a missing date (hover exit), a date
/// outside the representable range, or a missing magnitude.
pub fn render_tooltip(payload: &HoverPayload, translator: &Translator) -> Option<TooltipContent> {
    let date_value = payload.date_value?;
    let magnitude = payload.magnitude_value?;
    let heading = fci_utils::dates::helsinki_date_label(date_value)?;
    Some(TooltipContent {
        heading,
        body: format!("{}: {}", translator.t("cases"), magnitude),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_renders_helsinki_date_and_count() {
        let payload = HoverPayload {
            // 2021-11-03T00:00:00Z
            date_value: Some(1_635_897_600_000),
            magnitude_value: Some(42),
        };
        let content =
            render_tooltip(&payload, &Translator::new(Language::English)).unwrap();
        assert_eq!(content.heading, "3.11.2021");
        assert_eq!(content.body, "cases: 42");
    }

    #[test]
    fn test_finnish_cases_label() {
        let payload = HoverPayload {
            date_value: Some(1_635_897_600_000),
            magnitude_value: Some(7),
        };
        let content =
            render_tooltip(&payload, &Translator::new(Language::Finnish)).unwrap();
        assert_eq!(content.body, "tapauksia: 7");
    }

    #[test]
    fn test_missing_date_renders_nothing() {
        let payload = HoverPayload {
            date_value: None,
            magnitude_value: Some(42),
        };
        assert!(render_tooltip(&payload, &Translator::new(Language::Finnish)).is_none());
    }

    #[test]
    fn test_out_of_range_date_fails_closed() {
        let payload = HoverPayload {
            date_value: Some(i64::MAX),
            magnitude_value: Some(1),
        };
        assert!(render_tooltip(&payload, &Translator::new(Language::Finnish)).is_none());
    }

    #[test]
    fn test_missing_magnitude_fails_closed() {
        let payload = HoverPayload {
            date_value: Some(1_635_897_600_000),
            magnitude_value: None,
        };
        assert!(render_tooltip(&payload, &Translator::new(Language::Finnish)).is_none());
    }

    #[test]
    fn test_epoch_zero_is_presence_not_truthiness() {
        let payload = HoverPayload {
            date_value: Some(0),
            magnitude_value: Some(0),
        };
        let content =
            render_tooltip(&payload, &Translator::new(Language::English)).unwrap();
        assert_eq!(content.heading, "1.1.1970");
        assert_eq!(content.body, "cases: 0");
    }
}
