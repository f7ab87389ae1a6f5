//! Dashboard application state.
//!
//! `DashboardState` owns the filter criteria, the current record set, the
//! form draft and the notification banner. Every transition goes through
//! [`DashboardState::reduce`], which mutates the state synchronously and
//! returns the network [`Effect`] (if any) the transition asks for. The
//! effect's outcome comes back as another [`Action`].
//!
//! # Fetch ordering
//!
//! Every filter change requests a fetch and earlier fetches are not
//! cancelled. Responses are applied in the order they arrive, so a slow
//! stale response can overwrite a newer one. Each fetch carries a sequence
//! number only so that such out-of-order applications are logged.

use crate::draft::{DraftField, FormDraft, RecordPayload};
use crate::filter::{FilterChange, FilterCriteria};
use crate::model::Record;

/// Which request failed. Each kind has one fixed user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Fetch,
    Create,
    Update,
    Delete,
}

impl FailureKind {
    pub fn message(self) -> &'static str {
        match self {
            FailureKind::Fetch => "Error fetching data",
            FailureKind::Create => "Error adding record",
            FailureKind::Update => "Error updating record",
            FailureKind::Delete => "Error deleting record",
        }
    }
}

/// A write confirmed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Created,
    Updated,
    /// Carries the id of the removed row.
    Deleted(i64),
}

impl Mutation {
    pub fn message(self) -> &'static str {
        match self {
            Mutation::Created => "Record added!",
            Mutation::Updated => "Record updated!",
            Mutation::Deleted(_) => "Record deleted!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// The single notification banner. A new one replaces the old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn success(mutation: Mutation) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: mutation.message().to_string(),
        }
    }

    fn failure(kind: FailureKind) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message: kind.message().to_string(),
        }
    }
}

/// Everything that can happen to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A filter input changed.
    Filter(FilterChange),
    /// Re-run the query with the current criteria.
    Search,
    /// Start composing a new row.
    StartCreate,
    /// Load a row into the form for editing.
    StartEdit(Record),
    /// A form input changed.
    EditDraft(DraftField, String),
    /// Leave edit mode without saving.
    CancelEdit,
    /// Create or update, depending on the edit target.
    Submit,
    /// Delete the row with this id.
    Delete(i64),
    /// A fetch completed.
    Fetched { seq: u64, records: Vec<Record> },
    /// A request failed.
    Failed { kind: FailureKind, seq: Option<u64> },
    /// A write succeeded.
    Completed(Mutation),
}

/// A request the dashboard wants issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch { seq: u64, criteria: FilterCriteria },
    Create(RecordPayload),
    Update { id: i64, payload: RecordPayload },
    Delete(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardState {
    filters: FilterCriteria,
    records: Vec<Record>,
    draft: FormDraft,
    notice: Option<Notice>,
    issued: u64,
    resolved: u64,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// True while the newest fetch has not resolved.
    pub fn is_loading(&self) -> bool {
        self.resolved < self.issued
    }

    /// True until the first fetch resolves, successfully or not.
    pub fn is_initial_load(&self) -> bool {
        self.resolved == 0
    }

    /// Apply an action and return the request it calls for.
    pub fn reduce(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Filter(change) => {
                self.filters.apply(change);
                Some(self.fetch())
            }
            Action::Search => Some(self.fetch()),
            Action::StartCreate | Action::CancelEdit => {
                self.draft.clear();
                None
            }
            Action::StartEdit(record) => {
                self.draft = FormDraft::from_record(&record);
                None
            }
            Action::EditDraft(field, value) => {
                self.draft.set(field, value);
                None
            }
            Action::Submit => {
                let payload = self.draft.to_payload();
                Some(match self.draft.edit_target {
                    Some(id) => Effect::Update { id, payload },
                    None => Effect::Create(payload),
                })
            }
            Action::Delete(id) => Some(Effect::Delete(id)),
            Action::Fetched { seq, records } => {
                self.settle_fetch(seq);
                self.records = records;
                if matches!(&self.notice, Some(notice) if notice.kind == NoticeKind::Failure) {
                    self.notice = None;
                }
                None
            }
            Action::Failed { kind, seq } => {
                if let Some(seq) = seq {
                    self.settle_fetch(seq);
                }
                self.notice = Some(Notice::failure(kind));
                None
            }
            Action::Completed(mutation) => {
                let clears_draft = match mutation {
                    Mutation::Deleted(id) => self.draft.edit_target == Some(id),
                    Mutation::Created | Mutation::Updated => true,
                };
                if clears_draft {
                    self.draft.clear();
                }
                self.notice = Some(Notice::success(mutation));
                Some(self.fetch())
            }
        }
    }

    fn fetch(&mut self) -> Effect {
        self.issued += 1;
        Effect::Fetch {
            seq: self.issued,
            criteria: self.filters.clone(),
        }
    }

    fn settle_fetch(&mut self, seq: u64) {
        if seq < self.resolved {
            log::warn!(
                "fetch #{} resolved after #{}; applying stale response",
                seq,
                self.resolved
            );
        }
        self.resolved = self.resolved.max(seq);
    }
}
