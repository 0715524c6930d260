//! The backend seam for one record type.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use doorworks_client::{ApiClient, ApiError};
use doorworks_core::RecordId;
use doorworks_records::{
    Dispatch, ListRecord, Measurement, Party, ProductionPaper, RawMaterialOrder, Supplier,
    UserAccount,
};

/// Everything the list controller needs from the backend for one record
/// type. Implementations are expected to be thin: no caching, no retries.
#[async_trait]
pub trait RecordGateway<R>: Send + Sync {
    /// The full active record set.
    async fn list(&self) -> Result<Vec<R>, ApiError>;

    /// The soft-deleted records only.
    async fn list_deleted(&self) -> Result<Vec<R>, ApiError>;

    /// Soft-delete one record, with an optional reason.
    async fn delete(&self, id: RecordId, reason: Option<&str>) -> Result<(), ApiError>;

    /// Recover one soft-deleted record.
    async fn recover(&self, id: RecordId) -> Result<(), ApiError>;

    /// Create a record from a request payload; returns the created record.
    async fn create(&self, payload: &Value) -> Result<Value, ApiError>;

    /// Update a record; returns the updated record.
    async fn update(&self, id: RecordId, payload: &Value) -> Result<Value, ApiError>;
}

/// Endpoint metadata binding a record type to its collection routes.
pub trait Resource: ListRecord + DeserializeOwned {
    /// Collection path under the API prefix,
    /// e.g. `"/production/production-papers"`.
    const COLLECTION: &'static str;
}

impl Resource for ProductionPaper {
    const COLLECTION: &'static str = "/production/production-papers";
}

impl Resource for Measurement {
    const COLLECTION: &'static str = "/production/measurements";
}

impl Resource for Party {
    const COLLECTION: &'static str = "/production/parties";
}

impl Resource for Supplier {
    const COLLECTION: &'static str = "/raw-material/suppliers";
}

impl Resource for RawMaterialOrder {
    const COLLECTION: &'static str = "/raw-material/orders";
}

impl Resource for Dispatch {
    const COLLECTION: &'static str = "/dispatch/dispatches";
}

impl Resource for UserAccount {
    const COLLECTION: &'static str = "/admin/users";
}

/// [`RecordGateway`] over the REST client. All calls require auth.
#[derive(Debug, Clone)]
pub struct HttpGateway<R> {
    client: ApiClient,
    _record: core::marker::PhantomData<fn() -> R>,
}

impl<R> HttpGateway<R> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _record: core::marker::PhantomData,
        }
    }
}

#[async_trait]
impl<R> RecordGateway<R> for HttpGateway<R>
where
    R: Resource + Send + Sync,
{
    async fn list(&self) -> Result<Vec<R>, ApiError> {
        let path = format!("{}?include_deleted=false", R::COLLECTION);
        let value = self.client.get(&path, true).await?;
        decode_list(value)
    }

    async fn list_deleted(&self) -> Result<Vec<R>, ApiError> {
        let path = format!("{}?include_deleted=true", R::COLLECTION);
        let value = self.client.get(&path, true).await?;
        let records: Vec<R> = decode_list(value)?;
        Ok(records.into_iter().filter(|r| r.is_deleted()).collect())
    }

    async fn delete(&self, id: RecordId, reason: Option<&str>) -> Result<(), ApiError> {
        let path = format!("{}/{}", R::COLLECTION, id);
        let body = json!({ "deletion_reason": reason });
        self.client.delete(&path, Some(&body), true).await?;
        Ok(())
    }

    async fn recover(&self, id: RecordId) -> Result<(), ApiError> {
        let path = format!("{}/{}/recover", R::COLLECTION, id);
        self.client.post(&path, &json!({}), true).await?;
        Ok(())
    }

    async fn create(&self, payload: &Value) -> Result<Value, ApiError> {
        self.client.post(R::COLLECTION, payload, true).await
    }

    async fn update(&self, id: RecordId, payload: &Value) -> Result<Value, ApiError> {
        let path = format!("{}/{}", R::COLLECTION, id);
        self.client.put(&path, payload, true).await
    }
}

fn decode_list<R: DeserializeOwned>(value: Value) -> Result<Vec<R>, ApiError> {
    // Some endpoints return null instead of [] when empty.
    if value.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
}
