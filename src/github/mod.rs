//! GitHub API abstraction layer
//!
//! Provides a trait over the handful of remote calls the pipeline makes so
//! that scope resolution, collection, and publishing can be tested against
//! an in-memory mock instead of the network.

pub mod client;
pub mod mock;
pub mod types;

pub use client::GithubClient;
pub use mock::MockGithubApi;
pub use types::{ContentUpdate, Inviter, OrgInvitation, OrgPage};

use crate::config::RepoId;
use crate::error::Result;
use async_trait::async_trait;

/// Page size used by every paginated listing.
pub const PAGE_SIZE: usize = 100;

/// Trait for the remote operations used by the report pipeline
#[async_trait]
pub trait GithubApi: Send + Sync {
    /// Fetch one page of the enterprise organization listing.
    async fn enterprise_org_page(
        &self,
        enterprise: &str,
        cursor: Option<&str>,
    ) -> Result<OrgPage>;

    /// Fetch one page of an organization's pending invitations.
    async fn pending_invitations_page(&self, org: &str, page: u32) -> Result<Vec<OrgInvitation>>;

    /// Fetch one page of an organization's failed invitations.
    async fn failed_invitations_page(&self, org: &str, page: u32) -> Result<Vec<OrgInvitation>>;

    /// Blob sha of an existing file, or `None` when the path does not exist.
    async fn content_sha(&self, repo: &RepoId, path: &str) -> Result<Option<String>>;

    /// Create or update a single file as one commit.
    async fn put_content(&self, repo: &RepoId, path: &str, update: ContentUpdate) -> Result<()>;
}
