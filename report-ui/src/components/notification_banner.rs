//! Notification banner for request outcomes.

use dioxus::prelude::*;
use report_core::state::{Notice, NoticeKind};

#[derive(Props, Clone, PartialEq)]
pub struct NotificationBannerProps {
    pub notice: Notice,
}

/// Displays the current notification. Failures are red, successes green.
#[component]
pub fn NotificationBanner(props: NotificationBannerProps) -> Element {
    let style = match props.notice.kind {
        NoticeKind::Failure => "padding: 8px 16px; margin-bottom: 16px; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
        NoticeKind::Success => "padding: 8px 16px; margin-bottom: 16px; background: #E8F5E9; color: #2E7D32; border-radius: 4px; border: 1px solid #A5D6A7;",
    };

    rsx! {
        div {
            style: "{style}",
            "{props.notice.message}"
        }
    }
}
