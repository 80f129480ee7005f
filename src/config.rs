//! Run configuration
//!
//! Everything the pipeline needs is resolved here exactly once, at process
//! start, and handed to each stage by reference. Environment lookups
//! (repository slug, event payload) happen during construction so the rest
//! of the crate never touches ambient state.

use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::report::sort::{SortDirection, SortField};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Commit author identity for published reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committer {
    pub name: String,
    pub email: String,
}

/// Owner and name of the repository the report is committed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    /// Parse an `owner/name` slug.
    pub fn parse(slug: &str) -> Result<Self> {
        match slug.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() => Ok(Self {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(Error::Config(format!(
                "invalid repository '{slug}', expected owner/name"
            ))),
        }
    }
}

/// Immutable configuration for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub token: String,
    pub organization: Option<String>,
    pub enterprise: Option<String>,
    pub repo: Option<RepoId>,
    pub committer: Committer,
    pub sort: SortField,
    pub direction: SortDirection,
    pub json: bool,
    pub api_url: String,
    pub graphql_url: String,
    pub dry_run: bool,
}

impl RunConfig {
    /// Build the run configuration from parsed CLI arguments.
    ///
    /// The organization falls back to the triggering event payload when
    /// `--org` is absent. A missing token or (outside dry runs) a missing
    /// target repository is a fatal configuration error.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let token = cli.token.filter(|t| !t.is_empty()).ok_or_else(|| {
            Error::Config("a token is required (--token or GITHUB_TOKEN)".to_string())
        })?;

        let organization = cli
            .org
            .filter(|o| !o.is_empty())
            .or_else(event_organization);

        let repo = match cli.repo.as_deref().filter(|r| !r.is_empty()) {
            Some(slug) => Some(RepoId::parse(slug)?),
            None => None,
        };
        if repo.is_none() && !cli.dry_run {
            return Err(Error::Config(
                "a target repository is required (--repo or GITHUB_REPOSITORY)".to_string(),
            ));
        }

        Ok(Self {
            token,
            organization,
            enterprise: cli.enterprise.filter(|e| !e.is_empty()),
            repo,
            committer: Committer {
                name: cli.committer_name,
                email: cli.committer_email,
            },
            sort: SortField::parse_or_default(&cli.sort),
            direction: cli.direction,
            json: cli.json,
            api_url: cli.api_url.trim_end_matches('/').to_string(),
            graphql_url: cli.graphql_url,
            dry_run: cli.dry_run,
        })
    }
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    organization: Option<EventOrganization>,
}

#[derive(Debug, Deserialize)]
struct EventOrganization {
    login: String,
}

/// Organization login from the triggering event payload, if any.
fn event_organization() -> Option<String> {
    let path = std::env::var("GITHUB_EVENT_PATH").ok()?;
    organization_from_event(Path::new(&path))
}

fn organization_from_event(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let payload: EventPayload = match serde_json::from_str(&content) {
        Ok(payload) => payload,
        Err(e) => {
            debug!("Ignoring unreadable event payload: {}", e);
            return None;
        }
    };
    payload.organization.map(|org| org.login)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_repo_id_parse() {
        let repo = RepoId::parse("octo-corp/reports").unwrap();
        assert_eq!(repo.owner, "octo-corp");
        assert_eq!(repo.name, "reports");
    }

    #[test]
    fn test_repo_id_parse_rejects_bad_slugs() {
        assert!(RepoId::parse("no-slash").is_err());
        assert!(RepoId::parse("/name").is_err());
        assert!(RepoId::parse("owner/").is_err());
    }

    #[test]
    fn test_organization_from_event() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"organization": {{"login": "octo-corp"}}}}"#).unwrap();

        let org = organization_from_event(file.path());
        assert_eq!(org.as_deref(), Some("octo-corp"));
    }

    #[test]
    fn test_organization_from_event_without_organization() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"action": "opened"}}"#).unwrap();

        assert_eq!(organization_from_event(file.path()), None);
    }

    #[test]
    fn test_organization_from_event_missing_file() {
        assert_eq!(
            organization_from_event(Path::new("/nonexistent/event.json")),
            None
        );
    }
}
