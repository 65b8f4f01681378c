//! Typed repository for job postings.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use jobboard_models::{JobId, JobPosting};

use crate::error::{StoreError, StoreResult};

/// Repository for job postings.
#[derive(Clone, Default)]
pub struct JobRepository {
    inner: Arc<RwLock<HashMap<JobId, JobPosting>>>,
}

impl JobRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new posting.
    pub async fn insert(&self, job: JobPosting) -> StoreResult<JobPosting> {
        let mut map = self.inner.write().await;
        map.insert(job.id.clone(), job.clone());
        info!(job_id = %job.id, employer_id = %job.employer_id, "Created job posting");
        Ok(job)
    }

    /// Get a posting by ID.
    pub async fn get(&self, id: &JobId) -> StoreResult<Option<JobPosting>> {
        Ok(self.inner.read().await.get(id).cloned())
    }

    /// Replace an existing posting, refreshing `updated_at`.
    pub async fn update(&self, mut job: JobPosting) -> StoreResult<JobPosting> {
        let mut map = self.inner.write().await;
        if !map.contains_key(&job.id) {
            return Err(StoreError::not_found(format!("job {}", job.id)));
        }
        job.updated_at = Utc::now();
        map.insert(job.id.clone(), job.clone());
        Ok(job)
    }

    /// Delete a posting. Applications referencing it are left in place.
    pub async fn delete(&self, id: &JobId) -> StoreResult<()> {
        let mut map = self.inner.write().await;
        map.remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(format!("job {id}")))
    }

    /// All postings, unordered.
    pub async fn list_all(&self) -> StoreResult<Vec<JobPosting>> {
        Ok(self.inner.read().await.values().cloned().collect())
    }

    /// Field-match query over all postings.
    pub async fn find_where<F>(&self, predicate: F) -> StoreResult<Vec<JobPosting>>
    where
        F: Fn(&JobPosting) -> bool,
    {
        Ok(self
            .inner
            .read()
            .await
            .values()
            .filter(|j| predicate(j))
            .cloned()
            .collect())
    }
}
