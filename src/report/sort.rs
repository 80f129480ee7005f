//! Record ordering
//!
//! Stable sort by one record field. Date fields compare lexicographically,
//! which is correct for their `YYYY-MM-DD` form. Descending reverses the
//! comparator only, so equal keys keep insertion order in both directions.

use crate::collector::InvitationRecord;
use clap::ValueEnum;
use tracing::warn;

/// Record field the report is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Login,
    Email,
    State,
    CreatedAt,
    FailedAt,
    Inviter,
    Organization,
}

impl SortField {
    /// Parse a field name, falling back to `created_at` with a warning on
    /// unknown input. A typo'd input degrades the scheduled run instead of
    /// killing it.
    pub fn parse_or_default(input: &str) -> Self {
        match input.to_ascii_lowercase().as_str() {
            "login" => Self::Login,
            "email" => Self::Email,
            "state" => Self::State,
            "created_at" => Self::CreatedAt,
            "failed_at" => Self::FailedAt,
            "inviter" => Self::Inviter,
            "organization" | "org" => Self::Organization,
            other => {
                warn!("Unknown sort field '{}', sorting by created_at", other);
                Self::CreatedAt
            }
        }
    }

    fn key<'a>(self, record: &'a InvitationRecord) -> &'a str {
        match self {
            Self::Login => &record.login,
            Self::Email => &record.email,
            Self::State => record.state.as_str(),
            Self::CreatedAt => &record.created_at,
            Self::FailedAt => &record.failed_at,
            Self::Inviter => &record.inviter,
            Self::Organization => &record.organization,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Stable in-place sort of the aggregated records.
pub fn sort_records(records: &mut [InvitationRecord], field: SortField, direction: SortDirection) {
    match direction {
        SortDirection::Ascending => records.sort_by(|a, b| field.key(a).cmp(field.key(b))),
        SortDirection::Descending => records.sort_by(|a, b| field.key(b).cmp(field.key(a))),
    }
}
