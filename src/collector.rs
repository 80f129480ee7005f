//! Invitation collection
//!
//! Normalizes pending and failed invitation listings into flat report
//! records. A fetch failure for one listing is downgraded to a warning so
//! a single broken organization cannot abort the whole report.

use crate::error::Result;
use crate::github::{GithubApi, OrgInvitation, PAGE_SIZE};
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// State of an invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InviteState {
    Pending,
    Failed,
}

impl InviteState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Failed => "Failed",
        }
    }
}

impl fmt::Display for InviteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the report. Immutable once constructed.
///
/// Missing optional fields are empty strings, never nulls; dates carry
/// calendar-day precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvitationRecord {
    pub login: String,
    pub email: String,
    pub state: InviteState,
    pub created_at: String,
    pub failed_at: String,
    pub inviter: String,
    pub organization: String,
}

impl InvitationRecord {
    fn from_wire(invite: OrgInvitation, state: InviteState, organization: &str) -> Self {
        let failed_at = match state {
            InviteState::Failed => calendar_day(invite.failed_at),
            InviteState::Pending => String::new(),
        };
        Self {
            login: invite.login.unwrap_or_default(),
            email: invite.email.unwrap_or_default(),
            state,
            created_at: calendar_day(invite.created_at),
            failed_at,
            inviter: invite
                .inviter
                .and_then(|i| i.login)
                .unwrap_or_default(),
            organization: organization.to_string(),
        }
    }
}

/// Truncate an API timestamp to its `YYYY-MM-DD` prefix.
fn calendar_day(timestamp: Option<String>) -> String {
    timestamp
        .map(|t| t.chars().take(10).collect())
        .unwrap_or_default()
}

/// Append every pending and failed invitation for `org` to `records`.
///
/// Each listing is fetched independently; an error loses only that listing.
pub async fn collect_org(api: &dyn GithubApi, org: &str, records: &mut Vec<InvitationRecord>) {
    match fetch_invitations(api, org, InviteState::Pending).await {
        Ok(mut batch) => {
            debug!("Collected {} pending invitation(s) for {}", batch.len(), org);
            records.append(&mut batch);
        }
        Err(e) => warn!("Skipping pending invitations for {}: {}", org, e),
    }

    match fetch_invitations(api, org, InviteState::Failed).await {
        Ok(mut batch) => {
            debug!("Collected {} failed invitation(s) for {}", batch.len(), org);
            records.append(&mut batch);
        }
        Err(e) => warn!("Skipping failed invitations for {}: {}", org, e),
    }
}

async fn fetch_invitations(
    api: &dyn GithubApi,
    org: &str,
    state: InviteState,
) -> Result<Vec<InvitationRecord>> {
    let mut out = Vec::new();
    let mut page = 1;
    loop {
        let batch = match state {
            InviteState::Pending => api.pending_invitations_page(org, page).await?,
            InviteState::Failed => api.failed_invitations_page(org, page).await?,
        };
        let len = batch.len();
        out.extend(
            batch
                .into_iter()
                .map(|invite| InvitationRecord::from_wire(invite, state, org)),
        );
        if len < PAGE_SIZE {
            return Ok(out);
        }
        page += 1;
    }
}
