use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::JobTrackerError;

/// A job application as it is persisted in the jobs collection.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct JobDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub company: String,
    pub status: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl JobDocument {
    /// Builds a brand new document, both timestamps set to `now`.
    pub fn new(payload: JobPayload, now: DateTime<Utc>) -> Self {
        Self {
            id: ObjectId::new(),
            title: payload.title,
            company: payload.company,
            status: payload.status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A job application as it is sent over the wire.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<JobDocument> for Job {
    fn from(document: JobDocument) -> Self {
        Self {
            id: document.id.to_hex(),
            title: document.title,
            company: document.company,
            status: document.status,
            created_at: document.created_at,
            updated_at: document.updated_at,
        }
    }
}

/// Body accepted by the add and edit endpoints. Missing fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct JobPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct InsertAck {
    pub inserted_id: String,
}

#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct UpdateAck {
    pub matched_count: u64,
    pub modified_count: u64,
}

#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct DeleteAck {
    pub deleted_count: u64,
}

pub fn parse_id(id: &str) -> Result<ObjectId, JobTrackerError> {
    ObjectId::parse_str(id).map_err(|_| JobTrackerError::InvalidId { id: id.to_owned() })
}

/// Reads the `limit` query parameter. Absent, empty and zero all mean no limit.
pub fn parse_limit(limit: Option<&str>) -> Result<Option<u32>, JobTrackerError> {
    match limit.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => match value.parse::<u32>() {
            Ok(0) => Ok(None),
            Ok(n) => Ok(Some(n)),
            Err(_) => Err(JobTrackerError::InvalidLimit {
                value: value.to_owned(),
            }),
        },
    }
}
