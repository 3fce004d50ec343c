use async_trait::async_trait;
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};

use crate::core::{DeleteAck, InsertAck, JobDocument, JobPayload, UpdateAck};
use crate::errors::JobTrackerError;

#[cfg(test)]
pub mod memory;
pub mod mongo;
pub mod query;

/// Storage seam for job documents. Every method maps to exactly one store call.
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn ping(&self) -> Result<(), JobTrackerError>;

    /// Most recently updated first, capped at `limit` when given.
    async fn list(&self, limit: Option<u32>) -> Result<Vec<JobDocument>, JobTrackerError>;

    async fn get(&self, id: ObjectId) -> Result<Option<JobDocument>, JobTrackerError>;

    async fn insert(&self, job: JobDocument) -> Result<InsertAck, JobTrackerError>;

    async fn insert_many(&self, jobs: Vec<JobDocument>) -> Result<Vec<String>, JobTrackerError>;

    /// Replaces title, company and status and refreshes `updated_at`. Matching
    /// nothing is not an error.
    async fn update(
        &self,
        id: ObjectId,
        changes: JobPayload,
        updated_at: DateTime<Utc>,
    ) -> Result<UpdateAck, JobTrackerError>;

    async fn delete(&self, id: ObjectId) -> Result<DeleteAck, JobTrackerError>;
}

const SAMPLE_JOBS: [(&str, &str, &str); 3] = [
    ("Senior Frontend Developer", "Blockpour", "Applied"),
    ("Go Developer", "Kidsloop", "Interviewing"),
    ("AWS Engineer", "On the beach", "Rejected"),
];

/// Inserts the sample jobs in one call and returns their ids.
pub async fn seed(jobs: &dyn JobRepository) -> Result<Vec<String>, JobTrackerError> {
    let now = Utc::now();
    let documents = SAMPLE_JOBS
        .iter()
        .map(|(title, company, status)| {
            let payload = JobPayload {
                title: title.to_string(),
                company: company.to_string(),
                status: status.to_string(),
            };
            JobDocument::new(payload, now)
        })
        .collect();

    jobs.insert_many(documents).await
}
