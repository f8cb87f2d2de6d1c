//! Loading and error surfaces.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays a load failure in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            "{props.message}"
        }
    }
}

/// Simple loading indicator.
#[component]
pub fn LoadingSpinner() -> Element {
    let state = use_context::<AppState>();
    let translator = (state.translator)();

    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            {translator.t("loading data")}
        }
    }
}
