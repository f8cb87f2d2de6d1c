//! Chart container component.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Container height in pixels
    #[props(default = 25)]
    pub height: u32,
}

/// A container div for one D3.js strip chart.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    rsx! {
        div {
            id: "{props.id}",
            style: "width: 100%; height: {props.height}px;",
        }
    }
}
