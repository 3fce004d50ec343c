use async_trait::async_trait;
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use std::sync::Mutex;

use super::JobRepository;
use crate::core::{DeleteAck, InsertAck, JobDocument, JobPayload, UpdateAck};
use crate::errors::JobTrackerError;

/// Keeps job documents in a vector, same observable behaviour as the mongo
/// repository.
#[derive(Default)]
pub struct MemoryJobRepository {
    jobs: Mutex<Vec<JobDocument>>,
}

#[async_trait]
impl JobRepository for MemoryJobRepository {
    async fn ping(&self) -> Result<(), JobTrackerError> {
        Ok(())
    }

    async fn list(&self, limit: Option<u32>) -> Result<Vec<JobDocument>, JobTrackerError> {
        let mut jobs = self.jobs.lock().unwrap().clone();
        jobs.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        if let Some(limit) = limit {
            jobs.truncate(limit as usize);
        }

        Ok(jobs)
    }

    async fn get(&self, id: ObjectId) -> Result<Option<JobDocument>, JobTrackerError> {
        let jobs = self.jobs.lock().unwrap();
        Ok(jobs.iter().find(|job| job.id == id).cloned())
    }

    async fn insert(&self, job: JobDocument) -> Result<InsertAck, JobTrackerError> {
        let inserted_id = job.id.to_hex();
        self.jobs.lock().unwrap().push(job);

        Ok(InsertAck { inserted_id })
    }

    async fn insert_many(&self, jobs: Vec<JobDocument>) -> Result<Vec<String>, JobTrackerError> {
        let ids = jobs.iter().map(|job| job.id.to_hex()).collect();
        self.jobs.lock().unwrap().extend(jobs);

        Ok(ids)
    }

    async fn update(
        &self,
        id: ObjectId,
        changes: JobPayload,
        updated_at: DateTime<Utc>,
    ) -> Result<UpdateAck, JobTrackerError> {
        let mut jobs = self.jobs.lock().unwrap();

        match jobs.iter_mut().find(|job| job.id == id) {
            Some(job) => {
                job.title = changes.title;
                job.company = changes.company;
                job.status = changes.status;
                job.updated_at = updated_at;

                Ok(UpdateAck {
                    matched_count: 1,
                    modified_count: 1,
                })
            }
            None => Ok(UpdateAck {
                matched_count: 0,
                modified_count: 0,
            }),
        }
    }

    async fn delete(&self, id: ObjectId) -> Result<DeleteAck, JobTrackerError> {
        let mut jobs = self.jobs.lock().unwrap();
        let before = jobs.len();
        jobs.retain(|job| job.id != id);

        Ok(DeleteAck {
            deleted_count: (before - jobs.len()) as u64,
        })
    }
}
