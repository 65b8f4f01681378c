//! Typed repository for applications.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use jobboard_models::{AccountId, Application, ApplicationId, JobId};

use crate::error::{StoreError, StoreResult};

/// Repository for applications with a uniqueness constraint on
/// `(job_id, applicant_id)`.
///
/// The pair index and the record map are committed under the same write
/// lock, so two racing inserts for the same pair cannot both succeed. This
/// is the authoritative guard; the application-level existence pre-check in
/// the handler only exists to produce a friendly error message.
#[derive(Clone, Default)]
pub struct ApplicationRepository {
    inner: Arc<RwLock<State>>,
}

#[derive(Default)]
struct State {
    records: HashMap<ApplicationId, Application>,
    pair_index: HashSet<(JobId, AccountId)>,
}

impl ApplicationRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new application. Fails on a duplicate pair.
    pub async fn insert(&self, application: Application) -> StoreResult<Application> {
        let mut state = self.inner.write().await;
        let pair = (application.job_id.clone(), application.applicant_id.clone());
        if !state.pair_index.insert(pair) {
            return Err(StoreError::unique_violation(format!(
                "application ({}, {})",
                application.job_id, application.applicant_id
            )));
        }
        state
            .records
            .insert(application.id.clone(), application.clone());
        info!(
            application_id = %application.id,
            job_id = %application.job_id,
            applicant_id = %application.applicant_id,
            "Created application record"
        );
        Ok(application)
    }

    /// True when an application for the pair already exists.
    pub async fn exists(&self, job_id: &JobId, applicant_id: &AccountId) -> StoreResult<bool> {
        Ok(self
            .inner
            .read()
            .await
            .pair_index
            .contains(&(job_id.clone(), applicant_id.clone())))
    }

    /// All applications, unordered.
    pub async fn list_all(&self) -> StoreResult<Vec<Application>> {
        Ok(self.inner.read().await.records.values().cloned().collect())
    }

    /// Field-match query over all applications.
    pub async fn find_where<F>(&self, predicate: F) -> StoreResult<Vec<Application>>
    where
        F: Fn(&Application) -> bool,
    {
        Ok(self
            .inner
            .read()
            .await
            .records
            .values()
            .filter(|a| predicate(a))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn duplicate_pair_is_rejected() {
        let repo = ApplicationRepository::new();
        let job = JobId::new();
        let seeker = AccountId::new();

        repo.insert(Application::new(job.clone(), seeker.clone()))
            .await
            .unwrap();
        let err = repo
            .insert(Application::new(job.clone(), seeker.clone()))
            .await
            .unwrap_err();
        assert!(err.is_unique_violation());
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn same_seeker_may_apply_to_other_jobs() {
        let repo = ApplicationRepository::new();
        let seeker = AccountId::new();
        repo.insert(Application::new(JobId::new(), seeker.clone()))
            .await
            .unwrap();
        repo.insert(Application::new(JobId::new(), seeker.clone()))
            .await
            .unwrap();
        assert_eq!(repo.list_all().await.unwrap().len(), 2);
    }

    /// Two concurrent inserts for the same pair: exactly one commits, even
    /// though both could pass an application-level existence check first.
    #[tokio::test]
    async fn racing_inserts_cannot_both_commit() {
        let repo = ApplicationRepository::new();
        let job = JobId::new();
        let seeker = AccountId::new();

        let a = {
            let repo = repo.clone();
            let app = Application::new(job.clone(), seeker.clone());
            tokio::spawn(async move { repo.insert(app).await })
        };
        let b = {
            let repo = repo.clone();
            let app = Application::new(job.clone(), seeker.clone());
            tokio::spawn(async move { repo.insert(app).await })
        };

        let results = [a.await.unwrap(), b.await.unwrap()];
        let committed = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(committed, 1);
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn exists_reflects_the_pair_index() {
        let repo = ApplicationRepository::new();
        let job = JobId::new();
        let seeker = AccountId::new();
        assert!(!repo.exists(&job, &seeker).await.unwrap());
        repo.insert(Application::new(job.clone(), seeker.clone()))
            .await
            .unwrap();
        assert!(repo.exists(&job, &seeker).await.unwrap());
    }
}
