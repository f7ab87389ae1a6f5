//! Chart container component with loading and empty states.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Whether a fetch is outstanding
    #[props(default = false)]
    pub loading: bool,
    /// Whether there are no rows to plot
    #[props(default = false)]
    pub empty: bool,
    #[props(default = 420)]
    pub min_height: u32,
}

/// A container div for the D3.js chart with a status overlay.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );
    let overlay = if props.loading {
        Some("Loading chart...")
    } else if props.empty {
        Some("No records match the current filters.")
    } else {
        None
    };

    rsx! {
        div {
            style: "{style}",
            if let Some(text) = overlay {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "{text}"
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
