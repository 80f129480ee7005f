//! Production GitHub client
//!
//! Hand-built REST and GraphQL calls over a single reqwest client. No
//! retries; the request timeout is the only time bound.

use crate::config::{RepoId, RunConfig};
use crate::error::{Error, Result};
use crate::github::types::{ContentUpdate, OrgInvitation, OrgPage};
use crate::github::{GithubApi, PAGE_SIZE};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const ACCEPT_HEADER: &str = "application/vnd.github+json";

const ENTERPRISE_ORGS_QUERY: &str = "\
query ($enterprise: String!, $cursor: String) {
  enterprise(slug: $enterprise) {
    organizations(first: 100, after: $cursor) {
      nodes {
        login
      }
      pageInfo {
        hasNextPage
        endCursor
      }
    }
  }
}";

/// GitHub API client
pub struct GithubClient {
    client: Client,
    token: String,
    api_url: String,
    graphql_url: String,
}

impl GithubClient {
    /// Create a new client from the run configuration.
    pub fn new(config: &RunConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("invite-report/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            token: config.token.clone(),
            api_url: config.api_url.clone(),
            graphql_url: config.graphql_url.clone(),
        })
    }

    async fn invitation_page(
        &self,
        org: &str,
        listing: &str,
        page: u32,
    ) -> Result<Vec<OrgInvitation>> {
        let url = format!("{}/orgs/{}/{}", self.api_url, org, listing);
        debug!("GET {} page {}", url, page);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", ACCEPT_HEADER)
            .query(&[
                ("per_page", PAGE_SIZE.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(Error::Api(format!("GET {url} returned {status}: {body}")))
            }
        }
    }
}

#[async_trait]
impl GithubApi for GithubClient {
    async fn enterprise_org_page(
        &self,
        enterprise: &str,
        cursor: Option<&str>,
    ) -> Result<OrgPage> {
        debug!(
            "Querying organizations for enterprise {} (cursor: {:?})",
            enterprise, cursor
        );

        let body = GraphqlRequest {
            query: ENTERPRISE_ORGS_QUERY,
            variables: EnterpriseVariables { enterprise, cursor },
        };

        let response = self
            .client
            .post(&self.graphql_url)
            .bearer_auth(&self.token)
            .header("Accept", ACCEPT_HEADER)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(format!(
                "GraphQL request returned {status}: {body}"
            )));
        }

        let reply: GraphqlReply = response.json().await?;
        if let Some(errors) = reply.errors {
            if let Some(first) = errors.into_iter().next() {
                return Err(Error::Graphql(first.message));
            }
        }

        let organizations = reply
            .data
            .and_then(|d| d.enterprise)
            .map(|e| e.organizations)
            .ok_or_else(|| Error::Graphql(format!("no such enterprise: {enterprise}")))?;

        Ok(OrgPage {
            logins: organizations.nodes.into_iter().map(|n| n.login).collect(),
            has_next_page: organizations.page_info.has_next_page,
            end_cursor: organizations.page_info.end_cursor,
        })
    }

    async fn pending_invitations_page(&self, org: &str, page: u32) -> Result<Vec<OrgInvitation>> {
        self.invitation_page(org, "invitations", page).await
    }

    async fn failed_invitations_page(&self, org: &str, page: u32) -> Result<Vec<OrgInvitation>> {
        self.invitation_page(org, "failed_invitations", page).await
    }

    async fn content_sha(&self, repo: &RepoId, path: &str) -> Result<Option<String>> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_url, repo.owner, repo.name, path
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", ACCEPT_HEADER)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let file: FileContent = response.json().await?;
                Ok(Some(file.sha))
            }
            StatusCode::NOT_FOUND => Ok(None),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(Error::Api(format!("GET {url} returned {status}: {body}")))
            }
        }
    }

    async fn put_content(&self, repo: &RepoId, path: &str, update: ContentUpdate) -> Result<()> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_url, repo.owner, repo.name, path
        );

        let body = PutContentRequest {
            message: &update.message,
            content: BASE64.encode(&update.content),
            committer: CommitterBody {
                name: &update.committer.name,
                email: &update.committer.email,
            },
            sha: update.sha.as_deref(),
        };

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.token)
            .header("Accept", ACCEPT_HEADER)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::Publish(format!("PUT {url} returned {status}: {body}")))
        }
    }
}

// Internal request/response structures

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: EnterpriseVariables<'a>,
}

#[derive(Debug, Serialize)]
struct EnterpriseVariables<'a> {
    enterprise: &'a str,
    cursor: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct GraphqlReply {
    data: Option<GraphqlData>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct GraphqlData {
    enterprise: Option<EnterpriseNode>,
}

#[derive(Debug, Deserialize)]
struct EnterpriseNode {
    organizations: OrganizationConnection,
}

#[derive(Debug, Deserialize)]
struct OrganizationConnection {
    nodes: Vec<OrgNode>,
    #[serde(rename = "pageInfo")]
    page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
struct OrgNode {
    login: String,
}

#[derive(Debug, Deserialize)]
struct PageInfo {
    #[serde(rename = "hasNextPage")]
    has_next_page: bool,
    #[serde(rename = "endCursor")]
    end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FileContent {
    sha: String,
}

#[derive(Debug, Serialize)]
struct PutContentRequest<'a> {
    message: &'a str,
    content: String,
    committer: CommitterBody<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct CommitterBody<'a> {
    name: &'a str,
    email: &'a str,
}
