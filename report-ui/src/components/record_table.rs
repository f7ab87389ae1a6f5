//! Table of the current record set with per-row actions.

use crate::state::AppState;
use dioxus::prelude::*;
use report_core::state::Action;
use report_core::view::{self, TABLE_HEADERS};

#[component]
pub fn RecordTable() -> Element {
    let state = use_context::<AppState>();
    let rows = view::table_rows(state.dashboard.read().records());

    rsx! {
        table {
            style: "width: 100%; margin-top: 32px; border-collapse: collapse;",
            thead {
                tr {
                    for header in TABLE_HEADERS {
                        th {
                            style: "text-align: left; border-bottom: 2px solid #ccc; padding: 4px 8px;",
                            "{header}"
                        }
                    }
                }
            }
            tbody {
                for row in rows {
                    tr {
                        key: "{row.record.id}",
                        for cell in row.cells.iter() {
                            td {
                                style: "border-bottom: 1px solid #eee; padding: 4px 8px;",
                                "{cell}"
                            }
                        }
                        td {
                            style: "border-bottom: 1px solid #eee; padding: 4px 8px; white-space: nowrap;",
                            button {
                                onclick: {
                                    let record = row.record.clone();
                                    move |_| state.dispatch(Action::StartEdit(record.clone()))
                                },
                                "Edit"
                            }
                            button {
                                style: "margin-left: 4px;",
                                onclick: {
                                    let id = row.record.id;
                                    move |_| state.dispatch(Action::Delete(id))
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}
