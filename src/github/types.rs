//! Wire types for the GitHub API layer

use crate::config::Committer;
use serde::Deserialize;

/// One invitation entry as returned by the pending/failed listings.
///
/// Every field is optional on the wire; normalization into report records
/// happens in the collector.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OrgInvitation {
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub failed_at: Option<String>,
    #[serde(default)]
    pub inviter: Option<Inviter>,
}

/// The user that issued an invitation.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Inviter {
    #[serde(default)]
    pub login: Option<String>,
}

/// One page of the enterprise organization listing.
#[derive(Debug, Clone)]
pub struct OrgPage {
    pub logins: Vec<String>,
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

/// A single-file commit pushed through the contents API.
#[derive(Debug, Clone)]
pub struct ContentUpdate {
    pub message: String,
    pub content: Vec<u8>,
    pub committer: Committer,
    /// Blob sha of the existing file; present means update, absent create.
    pub sha: Option<String>,
}
