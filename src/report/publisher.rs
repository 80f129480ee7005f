//! Report publishing
//!
//! Upserts each artifact into the target repository as one single-file
//! commit. The existing-file probe may fail for any reason and the publish
//! still proceeds as a create; only the write itself can abort the run.

use crate::config::{Committer, RepoId};
use crate::error::Result;
use crate::github::{ContentUpdate, GithubApi};
use chrono::Utc;
use tracing::{debug, info};

/// Commits report artifacts to the target repository.
pub struct Publisher<'a> {
    api: &'a dyn GithubApi,
    repo: &'a RepoId,
    committer: &'a Committer,
}

impl<'a> Publisher<'a> {
    pub fn new(api: &'a dyn GithubApi, repo: &'a RepoId, committer: &'a Committer) -> Self {
        Self {
            api,
            repo,
            committer,
        }
    }

    /// Create or update `path` with `content`.
    pub async fn publish(&self, path: &str, content: &str) -> Result<()> {
        let sha = match self.api.content_sha(self.repo, path).await {
            Ok(sha) => sha,
            Err(e) => {
                // Normal precondition of the create branch.
                debug!("No existing report at {}: {}", path, e);
                None
            }
        };

        match &sha {
            Some(_) => info!("Updating {} in {}/{}", path, self.repo.owner, self.repo.name),
            None => info!("Creating {} in {}/{}", path, self.repo.owner, self.repo.name),
        }

        let update = ContentUpdate {
            message: format!("{} invitation report", Utc::now().format("%Y-%m-%d")),
            content: content.as_bytes().to_vec(),
            committer: self.committer.clone(),
            sha,
        };
        self.api.put_content(self.repo, path, update).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::github::MockGithubApi;

    fn repo() -> RepoId {
        RepoId {
            owner: "octo-corp".to_string(),
            name: "reports".to_string(),
        }
    }

    fn committer() -> Committer {
        Committer {
            name: "github-actions".to_string(),
            email: "github-actions@github.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_first_publish_creates() {
        let api = MockGithubApi::new();
        api.add_sha(Ok(None)).await;

        let repo = repo();
        let committer = committer();
        let publisher = Publisher::new(&api, &repo, &committer);
        publisher
            .publish("reports/octo-corp-invitations.csv", "header\n")
            .await
            .unwrap();

        let puts = api.recorded_puts().await;
        assert_eq!(puts.len(), 1);
        let (path, update) = &puts[0];
        assert_eq!(path, "reports/octo-corp-invitations.csv");
        assert_eq!(update.sha, None);
        assert_eq!(update.content, b"header\n");
        assert!(update.message.ends_with(" invitation report"));
        assert_eq!(update.committer.name, "github-actions");
    }

    #[tokio::test]
    async fn test_second_publish_updates_in_place() {
        let api = MockGithubApi::new();
        api.add_sha(Ok(None)).await;
        api.add_sha(Ok(Some("abc123".to_string()))).await;

        let repo = repo();
        let committer = committer();
        let publisher = Publisher::new(&api, &repo, &committer);
        let content = "Username,Email\nalice,alice@example.com\n";
        publisher.publish("reports/r.csv", content).await.unwrap();
        publisher.publish("reports/r.csv", content).await.unwrap();

        let puts = api.recorded_puts().await;
        assert_eq!(puts.len(), 2);
        assert_eq!(puts[0].1.sha, None);
        assert_eq!(puts[1].1.sha, Some("abc123".to_string()));
        assert_eq!(puts[1].1.content, content.as_bytes());
    }

    #[tokio::test]
    async fn test_probe_failure_falls_back_to_create() {
        let api = MockGithubApi::new();
        api.add_sha(Err(Error::Api("boom".to_string()))).await;

        let repo = repo();
        let committer = committer();
        let publisher = Publisher::new(&api, &repo, &committer);
        publisher.publish("reports/r.csv", "x\n").await.unwrap();

        let puts = api.recorded_puts().await;
        assert_eq!(puts.len(), 1);
        assert_eq!(puts[0].1.sha, None);
    }

    #[tokio::test]
    async fn test_put_failure_propagates() {
        let api = MockGithubApi::new();
        api.add_put_result(Err(Error::Publish("denied".to_string())))
            .await;

        let repo = repo();
        let committer = committer();
        let publisher = Publisher::new(&api, &repo, &committer);
        let result = publisher.publish("reports/r.csv", "x\n").await;

        assert!(matches!(result, Err(Error::Publish(_))));
    }
}
