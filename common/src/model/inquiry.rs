use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow state of a contact inquiry, mutated only from the admin
/// inquiries screen. Stored as a lowercase string column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    New,
    Contacted,
    InProgress,
    Completed,
    Declined,
}

impl InquiryStatus {
    pub const ALL: [InquiryStatus; 5] = [
        InquiryStatus::New,
        InquiryStatus::Contacted,
        InquiryStatus::InProgress,
        InquiryStatus::Completed,
        InquiryStatus::Declined,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryStatus::New => "new",
            InquiryStatus::Contacted => "contacted",
            InquiryStatus::InProgress => "in_progress",
            InquiryStatus::Completed => "completed",
            InquiryStatus::Declined => "declined",
        }
    }

    /// Parses the stored column value; unknown values fall back to `New`
    /// so a row with a hand-edited status still renders.
    pub fn parse(value: &str) -> InquiryStatus {
        match value {
            "contacted" => InquiryStatus::Contacted,
            "in_progress" => InquiryStatus::InProgress,
            "completed" => InquiryStatus::Completed,
            "declined" => InquiryStatus::Declined,
            _ => InquiryStatus::New,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InquiryStatus::New => "New",
            InquiryStatus::Contacted => "Contacted",
            InquiryStatus::InProgress => "In Progress",
            InquiryStatus::Completed => "Completed",
            InquiryStatus::Declined => "Declined",
        }
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submitted contact form row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub service_type: String,
    pub project_description: String,
    pub timeline: String,
    pub budget_range: Option<String>,
    pub status: InquiryStatus,
    pub created_at: String,
}

/// Insert payload created by the public contact form. Status is left to
/// the server default (`new`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInquiry {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub service_type: String,
    pub project_description: String,
    pub timeline: String,
    pub budget_range: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_column_value() {
        for status in InquiryStatus::ALL {
            assert_eq!(InquiryStatus::parse(status.as_str()), status);
        }
    }

    #[test]
    fn unknown_status_falls_back_to_new() {
        assert_eq!(InquiryStatus::parse("archived"), InquiryStatus::New);
        assert_eq!(InquiryStatus::parse(""), InquiryStatus::New);
    }

    #[test]
    fn status_serializes_as_snake_case_string() {
        let json = serde_json::to_string(&InquiryStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
