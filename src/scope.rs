//! Report scope resolution
//!
//! A run targets either a single organization or every organization under
//! an enterprise slug. Enterprise enumeration consumes a finite,
//! non-restartable sequence of cursor-paginated pages; each run re-fetches
//! from scratch. Any listing failure here is fatal.

use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::github::GithubApi;
use tracing::{debug, info};

/// What the run reports on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportScope {
    Organization(String),
    Enterprise(String),
}

impl ReportScope {
    /// Derive the scope from configuration; enterprise wins over organization.
    pub fn from_config(config: &RunConfig) -> Result<Self> {
        if let Some(enterprise) = &config.enterprise {
            return Ok(Self::Enterprise(enterprise.clone()));
        }
        if let Some(org) = &config.organization {
            return Ok(Self::Organization(org.clone()));
        }
        Err(Error::Config(
            "no organization or enterprise configured; pass --org or --enterprise, \
             or run from an organization event"
                .to_string(),
        ))
    }

    /// Slug used as the report file stem.
    pub fn slug(&self) -> &str {
        match self {
            Self::Organization(org) => org,
            Self::Enterprise(enterprise) => enterprise,
        }
    }
}

/// Lazy sequence of enterprise organization pages.
///
/// Yields each page's logins until the listing reports no further pages.
pub struct OrgPages<'a> {
    api: &'a dyn GithubApi,
    enterprise: &'a str,
    cursor: Option<String>,
    done: bool,
}

impl<'a> OrgPages<'a> {
    pub fn new(api: &'a dyn GithubApi, enterprise: &'a str) -> Self {
        Self {
            api,
            enterprise,
            cursor: None,
            done: false,
        }
    }

    /// Fetch the next page, or `None` once the listing is exhausted.
    pub async fn next_page(&mut self) -> Result<Option<Vec<String>>> {
        if self.done {
            return Ok(None);
        }
        let page = self
            .api
            .enterprise_org_page(self.enterprise, self.cursor.as_deref())
            .await?;
        self.done = !page.has_next_page;
        self.cursor = page.end_cursor;
        debug!(
            "Fetched {} organization(s) for enterprise {}",
            page.logins.len(),
            self.enterprise
        );
        Ok(Some(page.logins))
    }
}

/// Resolve the list of organizations the collector should visit.
pub async fn resolve_orgs(scope: &ReportScope, api: &dyn GithubApi) -> Result<Vec<String>> {
    match scope {
        ReportScope::Organization(org) => Ok(vec![org.clone()]),
        ReportScope::Enterprise(enterprise) => {
            let mut orgs = Vec::new();
            let mut pages = OrgPages::new(api, enterprise);
            while let Some(logins) = pages.next_page().await? {
                orgs.extend(logins);
            }
            info!(
                "Enterprise {} resolved to {} organization(s)",
                enterprise,
                orgs.len()
            );
            Ok(orgs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{MockGithubApi, OrgPage};

    fn config(org: Option<&str>, enterprise: Option<&str>) -> RunConfig {
        use crate::cli::Cli;
        use clap::Parser;

        let mut args = vec![
            "invite-report".to_string(),
            "--token".to_string(),
            "t".to_string(),
            "--dry-run".to_string(),
        ];
        if let Some(org) = org {
            args.push("--org".to_string());
            args.push(org.to_string());
        }
        if let Some(enterprise) = enterprise {
            args.push("--enterprise".to_string());
            args.push(enterprise.to_string());
        }
        RunConfig::from_cli(Cli::parse_from(args)).unwrap()
    }

    #[test]
    fn test_enterprise_overrides_organization() {
        let scope = ReportScope::from_config(&config(Some("solo-org"), Some("big-ent"))).unwrap();
        assert_eq!(scope, ReportScope::Enterprise("big-ent".to_string()));
        assert_eq!(scope.slug(), "big-ent");
    }

    #[test]
    fn test_missing_scope_is_fatal() {
        // The env fallback only fires via GITHUB_EVENT_PATH, absent here.
        let mut config = config(Some("solo-org"), None);
        config.organization = None;
        assert!(ReportScope::from_config(&config).is_err());
    }

    #[tokio::test]
    async fn test_single_org_scope_needs_no_api() {
        let api = MockGithubApi::new();
        let scope = ReportScope::Organization("solo-org".to_string());

        let orgs = resolve_orgs(&scope, &api).await.unwrap();
        assert_eq!(orgs, vec!["solo-org".to_string()]);
        assert!(api.recorded_calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_enterprise_pagination_yields_all_orgs() {
        let api = MockGithubApi::new();
        let page = |start: usize, count: usize, next: Option<&str>| OrgPage {
            logins: (start..start + count).map(|i| format!("org-{i}")).collect(),
            has_next_page: next.is_some(),
            end_cursor: next.map(String::from),
        };
        api.add_org_page(Ok(page(0, 100, Some("c1")))).await;
        api.add_org_page(Ok(page(100, 100, Some("c2")))).await;
        api.add_org_page(Ok(page(200, 50, None))).await;

        let scope = ReportScope::Enterprise("big-ent".to_string());
        let orgs = resolve_orgs(&scope, &api).await.unwrap();

        assert_eq!(orgs.len(), 250);
        let distinct: std::collections::HashSet<_> = orgs.iter().collect();
        assert_eq!(distinct.len(), 250);
        assert_eq!(orgs[0], "org-0");
        assert_eq!(orgs[249], "org-249");

        // Cursor threads through the listing in order.
        assert_eq!(
            api.recorded_calls().await,
            vec!["orgs:big-ent:-", "orgs:big-ent:c1", "orgs:big-ent:c2"]
        );
    }

    #[tokio::test]
    async fn test_enterprise_listing_failure_is_fatal() {
        let api = MockGithubApi::new();
        let scope = ReportScope::Enterprise("big-ent".to_string());

        let result = resolve_orgs(&scope, &api).await;
        assert!(result.is_err());
    }
}
