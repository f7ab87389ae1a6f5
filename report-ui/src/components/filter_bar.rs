//! Search, filter and sort inputs.

use crate::state::AppState;
use dioxus::prelude::*;
use report_core::filter::{FilterChange, Order, SortBy};
use report_core::state::Action;

/// Filter inputs. Every change triggers a fetch; Search refetches as-is.
#[component]
pub fn FilterBar() -> Element {
    let state = use_context::<AppState>();
    let filters = state.dashboard.read().filters().clone();

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 16px; margin-bottom: 16px;",
            input {
                placeholder: "Search Name",
                value: "{filters.name}",
                oninput: move |evt: Event<FormData>| {
                    state.dispatch(Action::Filter(FilterChange::Name(evt.value())));
                },
            }
            input {
                placeholder: "Location",
                value: "{filters.location}",
                oninput: move |evt: Event<FormData>| {
                    state.dispatch(Action::Filter(FilterChange::Location(evt.value())));
                },
            }
            input {
                r#type: "number",
                placeholder: "Min Credit Score",
                value: "{filters.min_credit_score}",
                oninput: move |evt: Event<FormData>| {
                    state.dispatch(Action::Filter(FilterChange::MinCreditScore(evt.value())));
                },
            }
            input {
                r#type: "number",
                placeholder: "Max Credit Score",
                value: "{filters.max_credit_score}",
                oninput: move |evt: Event<FormData>| {
                    state.dispatch(Action::Filter(FilterChange::MaxCreditScore(evt.value())));
                },
            }
            select {
                onchange: move |evt: Event<FormData>| {
                    match evt.value().parse::<SortBy>() {
                        Ok(sort_by) => state.dispatch(Action::Filter(FilterChange::SortBy(sort_by))),
                        Err(e) => log::warn!("Ignoring sort selection: {}", e),
                    }
                },
                for column in SortBy::ALL {
                    option {
                        value: column.as_str(),
                        selected: column == filters.sort_by,
                        {column.label()}
                    }
                }
            }
            select {
                onchange: move |evt: Event<FormData>| {
                    match evt.value().parse::<Order>() {
                        Ok(order) => state.dispatch(Action::Filter(FilterChange::Order(order))),
                        Err(e) => log::warn!("Ignoring order selection: {}", e),
                    }
                },
                for order in Order::ALL {
                    option {
                        value: order.as_str(),
                        selected: order == filters.order,
                        {order.label()}
                    }
                }
            }
            button {
                onclick: move |_| state.dispatch(Action::Search),
                "Search"
            }
        }
    }
}
