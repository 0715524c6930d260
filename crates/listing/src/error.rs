//! Mutation failure reporting.

use doorworks_client::ApiError;
use doorworks_core::RecordId;
use thiserror::Error;

/// Why a create/update/delete/recover did not fully succeed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MutationError {
    /// The backend rejected the call (the `detail` message is inside).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A recover-all fan-out partially failed: some records recovered, the
    /// listed ones did not. Nothing is rolled back or retried; the caller
    /// reloads so the list reflects what the backend actually did.
    #[error("failed to recover {} of {total} records ({first_detail})", failed_ids.len())]
    PartialRecovery {
        failed_ids: Vec<RecordId>,
        total: usize,
        first_detail: String,
    },

    /// There is no bulk delete endpoint; only recover fans out.
    #[error("bulk delete is not supported")]
    UnsupportedBulkDelete,
}
