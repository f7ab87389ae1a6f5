//! Chart header component with title and the two y-axis descriptions.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Left y-axis quantity
    pub left_axis: String,
    /// Right y-axis quantity
    pub right_axis: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            p {
                style: "margin: 0; font-size: 12px; color: #666;",
                "Left axis: {props.left_axis} | Right axis: {props.right_axis}"
            }
        }
    }
}
