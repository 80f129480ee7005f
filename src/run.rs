//! The report pipeline
//!
//! Scope resolution, collection, sorting, rendering, and publishing run
//! strictly in sequence; nothing is fetched concurrently.

use crate::collector::{collect_org, InvitationRecord};
use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::github::{GithubApi, GithubClient};
use crate::report::sort::sort_records;
use crate::report::{render, report_path, Publisher};
use crate::scope::{resolve_orgs, ReportScope};
use tracing::info;

/// Execute one run against the production API.
pub async fn run(config: &RunConfig) -> Result<()> {
    let api = GithubClient::new(config)?;
    run_with_api(config, &api).await
}

/// Execute one run against any API implementation.
pub async fn run_with_api(config: &RunConfig, api: &dyn GithubApi) -> Result<()> {
    let scope = ReportScope::from_config(config)?;
    let orgs = resolve_orgs(&scope, api).await?;
    info!("Collecting invitations for {} organization(s)", orgs.len());

    let mut records: Vec<InvitationRecord> = Vec::new();
    for org in &orgs {
        collect_org(api, org, &mut records).await;
    }
    sort_records(&mut records, config.sort, config.direction);
    info!("Collected {} invitation(s)", records.len());

    let csv = render::to_csv(&records)?;
    if config.dry_run {
        print!("{csv}");
        return Ok(());
    }

    let repo = config.repo.as_ref().ok_or_else(|| {
        Error::Config("a target repository is required to publish".to_string())
    })?;
    let publisher = Publisher::new(api, repo, &config.committer);
    publisher
        .publish(&report_path(scope.slug(), "csv"), &csv)
        .await?;
    if config.json {
        let json = render::to_json(&records)?;
        publisher
            .publish(&report_path(scope.slug(), "json"), &json)
            .await?;
    }
    Ok(())
}
