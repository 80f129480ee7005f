//! Report serialization
//!
//! CSV with fixed human-readable column labels, and an optional
//! pretty-printed JSON array of the raw records.

use crate::collector::InvitationRecord;
use crate::error::Result;

/// Column labels of the CSV artifact, in field order.
pub const CSV_COLUMNS: [&str; 7] = [
    "Username",
    "Email",
    "State",
    "Created at",
    "Failed at",
    "Inviter",
    "Org",
];

/// Render the records as CSV, header row first.
pub fn to_csv(records: &[InvitationRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_COLUMNS)?;
    for record in records {
        writer.write_record([
            record.login.as_str(),
            record.email.as_str(),
            record.state.as_str(),
            record.created_at.as_str(),
            record.failed_at.as_str(),
            record.inviter.as_str(),
            record.organization.as_str(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Render the records as a pretty-printed JSON array of raw field names.
pub fn to_json(records: &[InvitationRecord]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(records)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::InviteState;

    fn records() -> Vec<InvitationRecord> {
        vec![
            InvitationRecord {
                login: "alice".to_string(),
                email: "alice@example.com".to_string(),
                state: InviteState::Pending,
                created_at: "2023-01-01".to_string(),
                failed_at: String::new(),
                inviter: "admin".to_string(),
                organization: "octo-corp".to_string(),
            },
            InvitationRecord {
                login: String::new(),
                email: "comma, quoted@example.com".to_string(),
                state: InviteState::Failed,
                created_at: "2023-02-01".to_string(),
                failed_at: "2023-02-08".to_string(),
                inviter: String::new(),
                organization: "octo-corp".to_string(),
            },
        ]
    }

    #[test]
    fn test_csv_round_trips() {
        let original = records();
        let csv = to_csv(&original).unwrap();

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        assert_eq!(
            reader.headers().unwrap().iter().collect::<Vec<_>>(),
            CSV_COLUMNS.to_vec()
        );

        let parsed: Vec<InvitationRecord> = reader
            .records()
            .map(|row| {
                let row = row.unwrap();
                InvitationRecord {
                    login: row[0].to_string(),
                    email: row[1].to_string(),
                    state: match &row[2] {
                        "Failed" => InviteState::Failed,
                        _ => InviteState::Pending,
                    },
                    created_at: row[3].to_string(),
                    failed_at: row[4].to_string(),
                    inviter: row[5].to_string(),
                    organization: row[6].to_string(),
                }
            })
            .collect();

        assert_eq!(parsed, original);
    }

    #[test]
    fn test_csv_header_only_when_empty() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(csv, "Username,Email,State,Created at,Failed at,Inviter,Org\n");
    }

    #[test]
    fn test_json_uses_raw_field_names() {
        let json = to_json(&records()).unwrap();
        assert!(json.starts_with("[\n"));
        assert!(json.ends_with("]\n"));
        assert!(json.contains("  {\n    \"login\": \"alice\""));
        assert!(json.contains("\"state\": \"Pending\""));
        assert!(json.contains("\"failed_at\": \"2023-02-08\""));
        // Display labels belong to the CSV only.
        assert!(!json.contains("Username"));
    }
}
