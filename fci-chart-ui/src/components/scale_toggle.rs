//! Cumulative/daily toggle for the bubble-size encoding.

use crate::state::{AppState, ChartScale};
use dioxus::prelude::*;

/// Two-button toggle selecting which field drives bubble size.
///
/// Exactly one button is marked active, matching `AppState::chart_scale`.
/// Clicking the active button writes the value it already holds.
#[component]
pub fn ScaleToggle() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.chart_scale)();
    let translator = (state.translator)();

    let on_cumulative = move |_| state.chart_scale.set(ChartScale::Cumulative);
    let on_daily = move |_| state.chart_scale.set(ChartScale::Daily);

    rsx! {
        div {
            style: "display: flex; justify-content: center; margin: 8px 0;",
            button {
                style: toggle_style(current == ChartScale::Cumulative, "4px 0 0 4px"),
                onclick: on_cumulative,
                {translator.t(ChartScale::Cumulative.label_key())}
            }
            button {
                style: toggle_style(current == ChartScale::Daily, "0 4px 4px 0"),
                onclick: on_daily,
                {translator.t(ChartScale::Daily.label_key())}
            }
        }
    }
}

/// Inline style for one half of the toggle; the active half is filled.
fn toggle_style(active: bool, corner_radius: &str) -> String {
    let (background, color) = if active {
        ("#667788", "#fff")
    } else {
        ("#e9edf1", "#334")
    };
    format!(
        "padding: 2px 12px; font-size: 12px; letter-spacing: 1px; border: 0; cursor: pointer; border-radius: {corner_radius}; background: {background}; color: {color};"
    )
}
