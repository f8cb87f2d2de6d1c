//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use fci_data::GroupedData;

use crate::i18n::{Language, Translator};

/// Which numeric field drives the bubble-size encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartScale {
    /// Cumulative infections up to and including each day.
    Cumulative,
    /// New infections reported per day.
    #[default]
    Daily,
}

impl ChartScale {
    /// Render-point field the magnitude axis reads, as serialized for D3.
    pub fn magnitude_field(self) -> &'static str {
        match self {
            ChartScale::Cumulative => "infections",
            ChartScale::Daily => "infectionsDaily",
        }
    }

    /// Fixed display-calibration value domain for the bubble-size scale.
    /// Out-of-domain values clamp; the strip never rescales to the data.
    pub fn size_domain(self) -> [u64; 2] {
        match self {
            ChartScale::Cumulative => [0, 350],
            ChartScale::Daily => [0, 50],
        }
    }

    /// Translation key of the matching toggle button label.
    pub fn label_key(self) -> &'static str {
        match self {
            ChartScale::Cumulative => "cumulative",
            ChartScale::Daily => "daily",
        }
    }
}

/// Shared application state for the FCI chart apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Parsed district document (None until loaded)
    pub data: Signal<Option<GroupedData>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Magnitude encoding selected by the toggle
    pub chart_scale: Signal<ChartScale>,
    /// Translation lookup for user-facing strings
    pub translator: Signal<Translator>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            data: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            chart_scale: Signal::new(ChartScale::default()),
            translator: Signal::new(Translator::new(Language::Finnish)),
        }
    }
}
