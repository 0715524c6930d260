//! `doorworks-listing` — the list page controller.
//!
//! One controller instance backs one list view: it owns the canonical record
//! cache, the filter criteria, and the confirmation flow, and routes every
//! user intent either straight to the backend (create/update) or through the
//! challenge dialog (delete/recover). After any successful mutation the
//! record set is reloaded wholesale; the reload is the single source of
//! truth.

pub mod controller;
pub mod error;
pub mod gateway;

pub use controller::{ListController, LoadState, LoadTicket};
pub use error::MutationError;
pub use gateway::{HttpGateway, RecordGateway, Resource};
