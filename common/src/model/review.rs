use serde::{Deserialize, Serialize};

/// A visitor review. Public submission always creates an unapproved row;
/// approval is a one-way flip performed by an admin, which also stamps
/// `approved_at`. There is no unapprove path, only deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub reviewer_name: String,
    pub company: Option<String>,
    pub rating: i32,
    pub review_text: String,
    pub is_approved: bool,
    pub approved_at: Option<String>,
    pub created_at: String,
}

/// Insert payload for the public review dialog. `is_approved` is left to
/// the server default (false), so a fresh review is never visible until
/// an admin approves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub reviewer_name: String,
    pub company: Option<String>,
    pub rating: i32,
    pub review_text: String,
}
