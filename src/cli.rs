//! CLI argument structures
//!
//! Inputs mirror the workflow inputs of the scheduled automation: a token,
//! an organization or enterprise scope, committer identity, sort options,
//! and the optional JSON export flag. Endpoint URLs are overridable for
//! GitHub Enterprise Server deployments and for tests.

use crate::report::sort::SortDirection;
use clap::Parser;

/// Report pending and failed organization invitations
#[derive(Parser, Debug)]
#[command(name = "invite-report")]
#[command(about = "Collect pending and failed organization invitations into a CSV report", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Token used to authenticate all API calls
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Organization to report on (defaults to the triggering event's organization)
    #[arg(long)]
    pub org: Option<String>,

    /// Enterprise slug; reports on every organization in the enterprise
    #[arg(long)]
    pub enterprise: Option<String>,

    /// Repository the report is committed to
    #[arg(long, env = "GITHUB_REPOSITORY", value_name = "OWNER/NAME")]
    pub repo: Option<String>,

    /// Commit author name
    #[arg(long, default_value = "github-actions")]
    pub committer_name: String,

    /// Commit author email
    #[arg(long, default_value = "github-actions@github.com")]
    pub committer_email: String,

    /// Record field to sort by
    #[arg(long, default_value = "created_at")]
    pub sort: String,

    /// Sort direction
    #[arg(long, value_enum, default_value_t = SortDirection::Descending)]
    pub direction: SortDirection,

    /// Also publish a JSON copy of the report
    #[arg(long)]
    pub json: bool,

    /// REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub api_url: String,

    /// GraphQL endpoint URL
    #[arg(long, env = "GITHUB_GRAPHQL_URL", default_value = "https://api.github.com/graphql")]
    pub graphql_url: String,

    /// Print the CSV to stdout instead of publishing
    #[arg(long)]
    pub dry_run: bool,
}
