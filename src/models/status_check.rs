use crate::storage::StorageError;
use chrono::{DateTime, SubsecRound, Utc};
use mongodb::bson;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Input accepted by `POST /api/status`.
///
/// Deserialization is the validation step: a missing, null or non-string
/// `client_name` is rejected before any storage access.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

/// A client reporting in at a point in time.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    /// Creates a record with a fresh UUID v4 and the current instant.
    ///
    /// The timestamp is truncated to milliseconds, the precision of a BSON
    /// date, so the value handed back to the caller matches what is read
    /// back from storage.
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name: client_name.into(),
            timestamp: Utc::now().trunc_subsecs(3),
        }
    }
}

impl From<StatusCheckCreate> for StatusCheck {
    fn from(input: StatusCheckCreate) -> Self {
        Self::new(input.client_name)
    }
}

/// Shape of a record in the `status_checks` collection.
///
/// The driver-assigned `_id` is not part of the record and is skipped on read.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StatusCheckDocument {
    pub id: String,
    pub client_name: String,
    pub timestamp: bson::DateTime,
}

impl From<&StatusCheck> for StatusCheckDocument {
    fn from(status_check: &StatusCheck) -> Self {
        Self {
            id: status_check.id.clone(),
            client_name: status_check.client_name.clone(),
            timestamp: bson::DateTime::from_millis(status_check.timestamp.timestamp_millis()),
        }
    }
}

impl TryFrom<StatusCheckDocument> for StatusCheck {
    type Error = StorageError;

    fn try_from(document: StatusCheckDocument) -> Result<Self, Self::Error> {
        let millis = document.timestamp.timestamp_millis();
        let timestamp =
            DateTime::from_timestamp_millis(millis).ok_or(StorageError::InvalidTimestamp(millis))?;

        Ok(Self {
            id: document.id,
            client_name: document.client_name,
            timestamp,
        })
    }
}
