//! `doorworks-records` — backend-owned record types displayed in list views.
//!
//! These are wire-shaped, read-only copies of what the API returns. The
//! client never derives business state from them; it refreshes them wholesale
//! on every list load.

pub mod dispatch;
pub mod list_record;
pub mod measurement;
pub mod party;
pub mod production_paper;
pub mod raw_material;
pub mod supplier;
pub mod user_account;

pub use dispatch::{Dispatch, DispatchStatus};
pub use list_record::ListRecord;
pub use measurement::{DimValue, Measurement, MeasurementItem, MeasurementItems};
pub use measurement::{LegacyIndex, SelectedItemRef, SelectedItems};
pub use party::Party;
pub use production_paper::{MeasurementRef, PaperStatus, PartyRef, ProductionPaper};
pub use raw_material::{OrderStatus, RawMaterialOrder};
pub use supplier::Supplier;
pub use user_account::UserAccount;
