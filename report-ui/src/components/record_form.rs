//! Add/edit form and CSV export button.

use crate::download;
use crate::state::AppState;
use dioxus::prelude::*;
use report_core::draft::DraftField;
use report_core::export::{self, EXPORT_FILENAME, EXPORT_MIME};
use report_core::state::Action;

/// Form inputs bound to the draft. Shows Add in create mode and
/// Update/Cancel in edit mode.
#[component]
pub fn RecordForm() -> Element {
    let state = use_context::<AppState>();
    let draft = state.dashboard.read().draft().clone();
    let editing = draft.is_editing();

    let on_export = move |_: Event<MouseData>| {
        let csv = export::to_csv(state.dashboard.read().records());
        let result = csv.and_then(|text| download::download_text(EXPORT_FILENAME, EXPORT_MIME, &text));
        if let Err(e) = result {
            log::error!("CSV export failed: {}", e);
        }
    };

    rsx! {
        div {
            style: "margin: 16px 0; display: flex; flex-wrap: wrap; gap: 8px;",
            for field in DraftField::ALL {
                input {
                    key: "{field:?}",
                    r#type: input_type(field),
                    placeholder: field.placeholder(),
                    value: draft.get(field).to_string(),
                    oninput: move |evt: Event<FormData>| {
                        state.dispatch(Action::EditDraft(field, evt.value()));
                    },
                }
            }
            if editing {
                button {
                    onclick: move |_| state.dispatch(Action::Submit),
                    "Update"
                }
                button {
                    onclick: move |_| state.dispatch(Action::CancelEdit),
                    "Cancel"
                }
            } else {
                button {
                    onclick: move |_| state.dispatch(Action::Submit),
                    "Add"
                }
            }
            button {
                onclick: on_export,
                "Export CSV"
            }
        }
    }
}

fn input_type(field: DraftField) -> &'static str {
    if field.is_numeric() {
        "number"
    } else {
        "text"
    }
}
