//! The list page controller.

use futures::future::join_all;
use serde_json::Value;

use doorworks_client::ApiError;
use doorworks_confirm::{
    ActionKind, ActionTarget, ChallengeState, ConfirmationFlow, PendingAction,
};
use doorworks_core::{DomainError, DomainResult, RecordId};
use doorworks_filter::FilterCriteria;
use doorworks_records::ListRecord;

use crate::error::MutationError;
use crate::gateway::RecordGateway;

/// Where the page is in its load lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    /// The initial or retried load failed; the message blocks the page
    /// content and a retry is offered.
    Failed(String),
}

/// Generation ticket for last-request-wins load ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Drives one list view: canonical record cache, filter criteria, and the
/// confirmation flow for destructive actions.
///
/// Every operation is split into an explicit `begin`/`finish` pair so the
/// single-threaded event-loop interleavings are testable; the async methods
/// (`load`, `confirm`, `create`, `update_record`) are the convenience
/// compositions a page actually calls.
#[derive(Debug)]
pub struct ListController<R> {
    records: Vec<R>,
    deleted: Vec<R>,
    criteria: FilterCriteria,
    flow: ConfirmationFlow,
    load_state: LoadState,
    load_generation: u64,
    mutation_in_flight: bool,
    page_error: Option<String>,
    notice: Option<String>,
}

impl<R> Default for ListController<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            deleted: Vec::new(),
            criteria: FilterCriteria::new(),
            flow: ConfirmationFlow::new(),
            load_state: LoadState::Loading,
            load_generation: 0,
            mutation_in_flight: false,
            page_error: None,
            notice: None,
        }
    }
}

impl<R> ListController<R>
where
    R: ListRecord + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    // ----- loading ---------------------------------------------------------

    /// Start a load; any load still in flight becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_generation += 1;
        self.load_state = LoadState::Loading;
        LoadTicket(self.load_generation)
    }

    /// Apply a finished load. Returns `false` (and changes nothing) when a
    /// newer load has started since `ticket` was issued.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<(Vec<R>, Vec<R>), ApiError>,
    ) -> bool {
        if ticket.0 != self.load_generation {
            tracing::debug!(
                stale = ticket.0,
                current = self.load_generation,
                "ignoring stale load response"
            );
            return false;
        }
        match result {
            Ok((records, deleted)) => {
                self.records = records;
                self.deleted = deleted;
                self.load_state = LoadState::Loaded;
            }
            Err(err) => {
                tracing::warn!(error = %err, "list load failed");
                self.load_state = LoadState::Failed(err.to_string());
            }
        }
        true
    }

    /// Full reload: active and deleted record sets together.
    pub async fn load<G>(&mut self, gateway: &G) -> bool
    where
        G: RecordGateway<R> + ?Sized,
    {
        let ticket = self.begin_load();
        let result = futures::future::try_join(gateway.list(), gateway.list_deleted()).await;
        self.finish_load(ticket, result)
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    // ----- the visible subset ---------------------------------------------

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn deleted_records(&self) -> &[R] {
        &self.deleted
    }

    /// The filtered view, re-derived from scratch on every call.
    pub fn visible(&self) -> Vec<R> {
        doorworks_filter::apply(&self.records, &self.criteria)
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.criteria.search_query = query.into();
    }

    /// Set or clear one equality constraint (`None` is the "All" sentinel).
    pub fn set_filter(&mut self, field: impl Into<String>, value: Option<String>) {
        self.criteria.set_equality(field, value);
    }

    pub fn set_date_range(
        &mut self,
        from: Option<chrono::NaiveDate>,
        to: Option<chrono::NaiveDate>,
    ) {
        self.criteria.date_range.from = from;
        self.criteria.date_range.to = to;
    }

    pub fn clear_filters(&mut self) {
        self.criteria.clear();
    }

    // ----- destructive intents --------------------------------------------

    /// The user clicked delete on a record.
    pub fn request_delete(&mut self, id: RecordId) -> DomainResult<()> {
        let record = self
            .records
            .iter()
            .find(|r| r.record_id() == id)
            .ok_or(DomainError::NotFound)?;
        let action = PendingAction::delete(id, record.display_label(), "");
        self.flow.begin(action)
    }

    /// The user clicked recover on a deleted record.
    pub fn request_recover(&mut self, id: RecordId) -> DomainResult<()> {
        let record = self
            .deleted
            .iter()
            .find(|r| r.record_id() == id)
            .ok_or(DomainError::NotFound)?;
        let action = PendingAction::recover(id, record.display_label());
        self.flow.begin(action)
    }

    /// The user clicked "Recover All". The label captures the deleted count
    /// as it is right now.
    pub fn request_recover_all(&mut self) -> DomainResult<()> {
        if self.deleted.is_empty() {
            return Err(DomainError::validation("no deleted records to recover"));
        }
        let action = PendingAction::recover_all(self.deleted.len(), R::NOUN_PLURAL);
        self.flow.begin(action)
    }

    pub fn set_challenge_input(&mut self, text: impl Into<String>) {
        self.flow.set_input(text);
    }

    pub fn set_deletion_reason(&mut self, text: &str) {
        self.flow.set_reason(text);
    }

    pub fn cancel_confirmation(&mut self) {
        self.flow.cancel();
    }

    pub fn challenge(&self) -> Option<&ChallengeState> {
        self.flow.challenge()
    }

    pub fn pending_action(&self) -> Option<&PendingAction> {
        self.flow.pending()
    }

    /// Validate the challenge input and, on a match, take the action for
    /// dispatch. Returns `None` on mismatch (code regenerated), empty input,
    /// no open dialog, or while a mutation is already in flight.
    pub fn begin_confirm(&mut self) -> Option<PendingAction> {
        if self.mutation_in_flight {
            return None;
        }
        match self.flow.submit() {
            doorworks_confirm::SubmitOutcome::Confirmed(action) => {
                self.mutation_in_flight = true;
                Some(action)
            }
            doorworks_confirm::SubmitOutcome::Mismatch
            | doorworks_confirm::SubmitOutcome::Ignored => None,
        }
    }

    /// Apply the dispatch result. Returns whether a reload is due: after
    /// success, and after a partial recovery (the backend did change).
    pub fn finish_confirm(&mut self, result: Result<String, MutationError>) -> bool {
        self.flow.settle();
        self.mutation_in_flight = false;
        match result {
            Ok(notice) => {
                self.notice = Some(notice);
                self.page_error = None;
                true
            }
            Err(err) => {
                let reload = matches!(err, MutationError::PartialRecovery { .. });
                self.page_error = Some(err.to_string());
                reload
            }
        }
    }

    /// Submit the challenge and, if it matches, run the confirmed action
    /// against the backend and reload. Returns whether an API dispatch
    /// happened (mismatches and no-ops return `false`).
    pub async fn confirm<G>(&mut self, gateway: &G) -> bool
    where
        G: RecordGateway<R> + ?Sized,
    {
        let Some(action) = self.begin_confirm() else {
            return false;
        };
        // Snapshot the deleted ids at confirmation time; the reload below
        // will replace the cache.
        let deleted_ids: Vec<RecordId> = self.deleted.iter().map(|r| r.record_id()).collect();
        let result = dispatch::<R, G>(gateway, &action, &deleted_ids).await;
        if self.finish_confirm(result) {
            self.load(gateway).await;
        }
        true
    }

    // ----- non-destructive mutations --------------------------------------

    /// Create a record and reload on success. Returns whether the call was
    /// made and succeeded; failures land in [`Self::page_error`].
    pub async fn create<G>(&mut self, gateway: &G, payload: &Value) -> bool
    where
        G: RecordGateway<R> + ?Sized,
    {
        if self.mutation_in_flight {
            return false;
        }
        self.mutation_in_flight = true;
        let result = gateway.create(payload).await;
        self.mutation_in_flight = false;
        match result {
            Ok(_) => {
                self.notice = Some(format!("{} created successfully", capitalize(R::NOUN)));
                self.page_error = None;
                self.load(gateway).await;
                true
            }
            Err(err) => {
                self.page_error = Some(err.to_string());
                false
            }
        }
    }

    /// Update a record and reload on success; same contract as
    /// [`Self::create`].
    pub async fn update_record<G>(&mut self, gateway: &G, id: RecordId, payload: &Value) -> bool
    where
        G: RecordGateway<R> + ?Sized,
    {
        if self.mutation_in_flight {
            return false;
        }
        self.mutation_in_flight = true;
        let result = gateway.update(id, payload).await;
        self.mutation_in_flight = false;
        match result {
            Ok(_) => {
                self.notice = Some(format!("{} updated successfully", capitalize(R::NOUN)));
                self.page_error = None;
                self.load(gateway).await;
                true
            }
            Err(err) => {
                self.page_error = Some(err.to_string());
                false
            }
        }
    }

    // ----- feedback --------------------------------------------------------

    /// The error banner for the last failed mutation, if any. Load failures
    /// live in [`Self::load_state`] instead.
    pub fn page_error(&self) -> Option<&str> {
        self.page_error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_feedback(&mut self) {
        self.page_error = None;
        self.notice = None;
    }
}

async fn dispatch<R, G>(
    gateway: &G,
    action: &PendingAction,
    deleted_ids: &[RecordId],
) -> Result<String, MutationError>
where
    R: ListRecord,
    G: RecordGateway<R> + ?Sized,
{
    match (action.kind, action.target) {
        (ActionKind::Delete, ActionTarget::One(id)) => {
            gateway.delete(id, action.reason.as_deref()).await?;
            Ok(format!("{} deleted successfully", capitalize(R::NOUN)))
        }
        (ActionKind::Delete, ActionTarget::All) => Err(MutationError::UnsupportedBulkDelete),
        (ActionKind::Recover, ActionTarget::One(id)) => {
            gateway.recover(id).await?;
            Ok(format!("{} recovered successfully", capitalize(R::NOUN)))
        }
        (ActionKind::Recover, ActionTarget::All) => {
            let total = deleted_ids.len();
            let results = join_all(deleted_ids.iter().map(|id| gateway.recover(*id))).await;
            let failed: Vec<(RecordId, ApiError)> = deleted_ids
                .iter()
                .copied()
                .zip(results)
                .filter_map(|(id, result)| result.err().map(|err| (id, err)))
                .collect();
            match failed.first() {
                None => Ok(format!(
                    "All {total} {} recovered successfully",
                    R::NOUN_PLURAL
                )),
                Some((_, first)) => Err(MutationError::PartialRecovery {
                    failed_ids: failed.iter().map(|(id, _)| *id).collect(),
                    total,
                    first_detail: first.to_string(),
                }),
            }
        }
    }
}

fn capitalize(noun: &str) -> String {
    let mut chars = noun.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
