use async_trait::async_trait;
use bson::doc;
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::options::FindOptions;
use mongodb::Collection;
use std::future::Future;
use std::time::Duration;

use super::query;
use super::JobRepository;
use crate::core::{DeleteAck, InsertAck, JobDocument, JobPayload, UpdateAck};
use crate::database::Database;
use crate::errors::JobTrackerError;

pub struct MongoJobRepository {
    database: mongodb::Database,
    jobs: Collection<JobDocument>,
    timeout: Duration,
}

impl MongoJobRepository {
    pub fn new(database: &Database, collection: &str, timeout: Duration) -> Self {
        let database = database.handle();
        let jobs = database.collection::<JobDocument>(collection);

        Self {
            database,
            jobs,
            timeout,
        }
    }

    async fn bounded<T, F>(&self, operation: F) -> Result<T, JobTrackerError>
    where
        F: Future<Output = mongodb::error::Result<T>>,
    {
        tokio::time::timeout(self.timeout, operation)
            .await
            .map_err(|_| JobTrackerError::StoreTimeout {
                seconds: self.timeout.as_secs(),
            })?
            .map_err(|source| JobTrackerError::Store { source })
    }
}

#[async_trait]
impl JobRepository for MongoJobRepository {
    async fn ping(&self) -> Result<(), JobTrackerError> {
        self.bounded(self.database.run_command(doc! { "ping": 1 }, None))
            .await
            .map(|_| ())
    }

    async fn list(&self, limit: Option<u32>) -> Result<Vec<JobDocument>, JobTrackerError> {
        let options = FindOptions::builder()
            .sort(query::most_recently_updated())
            .limit(limit.map(i64::from))
            .build();

        self.bounded(async {
            let cursor = self.jobs.find(query::all_jobs(), options).await?;
            cursor.try_collect::<Vec<JobDocument>>().await
        })
        .await
    }

    async fn get(&self, id: ObjectId) -> Result<Option<JobDocument>, JobTrackerError> {
        self.bounded(self.jobs.find_one(query::job_by_id(id), None))
            .await
    }

    async fn insert(&self, job: JobDocument) -> Result<InsertAck, JobTrackerError> {
        let inserted_id = job.id.to_hex();
        self.bounded(self.jobs.insert_one(job, None)).await?;

        Ok(InsertAck { inserted_id })
    }

    async fn insert_many(&self, jobs: Vec<JobDocument>) -> Result<Vec<String>, JobTrackerError> {
        let ids = jobs.iter().map(|job| job.id.to_hex()).collect();
        self.bounded(self.jobs.insert_many(jobs, None)).await?;

        Ok(ids)
    }

    async fn update(
        &self,
        id: ObjectId,
        changes: JobPayload,
        updated_at: DateTime<Utc>,
    ) -> Result<UpdateAck, JobTrackerError> {
        let result = self
            .bounded(self.jobs.update_one(
                query::job_by_id(id),
                query::set_changes(changes, updated_at),
                None,
            ))
            .await?;

        Ok(UpdateAck {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete(&self, id: ObjectId) -> Result<DeleteAck, JobTrackerError> {
        let result = self
            .bounded(self.jobs.delete_one(query::job_by_id(id), None))
            .await?;

        Ok(DeleteAck {
            deleted_count: result.deleted_count,
        })
    }
}
