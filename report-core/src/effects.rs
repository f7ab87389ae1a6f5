//! Executes dashboard effects against a [`ReportApi`].
//!
//! Every request failure is caught here, logged with its cause, and turned
//! into an [`Action::Failed`]. Nothing is retried.

use crate::api::ReportApi;
use crate::state::{Action, Effect, FailureKind, Mutation};

/// Issue the request described by `effect` and report the outcome.
pub async fn run<A>(api: &A, effect: Effect) -> Action
where
    A: ReportApi + ?Sized,
{
    match effect {
        Effect::Fetch { seq, criteria } => match api.list(&criteria).await {
            Ok(records) => Action::Fetched { seq, records },
            Err(e) => {
                log::error!("Failed to fetch records: {}", e);
                Action::Failed {
                    kind: FailureKind::Fetch,
                    seq: Some(seq),
                }
            }
        },
        Effect::Create(payload) => match api.create(&payload).await {
            Ok(()) => Action::Completed(Mutation::Created),
            Err(e) => {
                log::error!("Failed to add record: {}", e);
                failed(FailureKind::Create)
            }
        },
        Effect::Update { id, payload } => match api.update(id, &payload).await {
            Ok(()) => Action::Completed(Mutation::Updated),
            Err(e) => {
                log::error!("Failed to update record {}: {}", id, e);
                failed(FailureKind::Update)
            }
        },
        Effect::Delete(id) => match api.delete(id).await {
            Ok(()) => Action::Completed(Mutation::Deleted(id)),
            Err(e) => {
                log::error!("Failed to delete record {}: {}", id, e);
                failed(FailureKind::Delete)
            }
        },
    }
}

fn failed(kind: FailureKind) -> Action {
    Action::Failed { kind, seq: None }
}

/// Run `effect` and feed each outcome back through `reduce` until the
/// dashboard stops asking for requests (e.g. a write followed by its
/// refresh fetch).
pub async fn run_chain<A, R>(api: &A, mut reduce: R, effect: Effect)
where
    A: ReportApi + ?Sized,
    R: FnMut(Action) -> Option<Effect>,
{
    let mut next = Some(effect);
    while let Some(effect) = next.take() {
        let outcome = run(api, effect).await;
        next = reduce(outcome);
    }
}

/// Apply `action` and run whatever request chain it starts.
pub async fn settle<A, R>(api: &A, mut reduce: R, action: Action)
where
    A: ReportApi + ?Sized,
    R: FnMut(Action) -> Option<Effect>,
{
    if let Some(effect) = reduce(action) {
        run_chain(api, reduce, effect).await;
    }
}
