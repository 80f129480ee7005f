//! Mock GitHub API for tests
//!
//! Responses are queued per operation and popped in call order; every
//! content write is recorded for verification.

use crate::config::RepoId;
use crate::error::{Error, Result};
use crate::github::types::{ContentUpdate, OrgInvitation, OrgPage};
use crate::github::GithubApi;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Mock implementation of [`GithubApi`]
#[derive(Default)]
pub struct MockGithubApi {
    org_pages: Arc<Mutex<VecDeque<Result<OrgPage>>>>,
    pending_pages: Arc<Mutex<VecDeque<Result<Vec<OrgInvitation>>>>>,
    failed_pages: Arc<Mutex<VecDeque<Result<Vec<OrgInvitation>>>>>,
    shas: Arc<Mutex<VecDeque<Result<Option<String>>>>>,
    put_results: Arc<Mutex<VecDeque<Result<()>>>>,
    /// Recorded `(path, update)` pairs from `put_content` calls
    pub puts: Arc<Mutex<Vec<(String, ContentUpdate)>>>,
    /// Recorded call descriptions in invocation order
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockGithubApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_org_page(&self, page: Result<OrgPage>) {
        self.org_pages.lock().await.push_back(page);
    }

    pub async fn add_pending_page(&self, page: Result<Vec<OrgInvitation>>) {
        self.pending_pages.lock().await.push_back(page);
    }

    pub async fn add_failed_page(&self, page: Result<Vec<OrgInvitation>>) {
        self.failed_pages.lock().await.push_back(page);
    }

    pub async fn add_sha(&self, sha: Result<Option<String>>) {
        self.shas.lock().await.push_back(sha);
    }

    pub async fn add_put_result(&self, result: Result<()>) {
        self.put_results.lock().await.push_back(result);
    }

    pub async fn recorded_calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    pub async fn recorded_puts(&self) -> Vec<(String, ContentUpdate)> {
        self.puts.lock().await.clone()
    }

    async fn record(&self, call: String) {
        self.calls.lock().await.push(call);
    }
}

#[async_trait]
impl GithubApi for MockGithubApi {
    async fn enterprise_org_page(
        &self,
        enterprise: &str,
        cursor: Option<&str>,
    ) -> Result<OrgPage> {
        self.record(format!("orgs:{}:{}", enterprise, cursor.unwrap_or("-")))
            .await;
        self.org_pages
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(Error::Api("no mock org page configured".to_string())))
    }

    async fn pending_invitations_page(&self, org: &str, page: u32) -> Result<Vec<OrgInvitation>> {
        self.record(format!("pending:{org}:{page}")).await;
        // An exhausted queue reads as an exhausted listing.
        self.pending_pages
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn failed_invitations_page(&self, org: &str, page: u32) -> Result<Vec<OrgInvitation>> {
        self.record(format!("failed:{org}:{page}")).await;
        self.failed_pages
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn content_sha(&self, _repo: &RepoId, path: &str) -> Result<Option<String>> {
        self.record(format!("sha:{path}")).await;
        self.shas
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(None))
    }

    async fn put_content(&self, _repo: &RepoId, path: &str, update: ContentUpdate) -> Result<()> {
        self.record(format!("put:{path}")).await;
        self.puts.lock().await.push((path.to_string(), update));
        self.put_results
            .lock()
            .await
            .pop_front()
            .unwrap_or(Ok(()))
    }
}
