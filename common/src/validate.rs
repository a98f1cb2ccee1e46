//! Shared validation schemas for the two public forms.
//!
//! The same rules run wherever a submission is built, so the contact form
//! and the review dialog cannot drift apart from each other. Checks are
//! client-side only; the hosted datastore's own access rules remain the
//! trust boundary.

use crate::model::{NewInquiry, NewReview};
use regex::Regex;
use std::sync::OnceLock;

/// First violated rule for a submission: the offending field and a
/// user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    fn new(field: &'static str, message: &'static str) -> Self {
        ValidationError { field, message }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message)
    }
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

fn len(s: &str) -> usize {
    s.chars().count()
}

/// Validates a contact inquiry before any network call is issued.
/// Returns the first violated rule, mirroring how the form surfaces a
/// single message at a time.
pub fn validate_inquiry(form: &NewInquiry) -> Result<(), ValidationError> {
    if len(&form.full_name) < 2 {
        return Err(ValidationError::new(
            "full_name",
            "Name must be at least 2 characters",
        ));
    }
    if len(&form.full_name) > 100 {
        return Err(ValidationError::new("full_name", "Name is too long"));
    }
    if len(&form.email) > 255 {
        return Err(ValidationError::new("email", "Email is too long"));
    }
    if !email_re().is_match(&form.email) {
        return Err(ValidationError::new("email", "Invalid email address"));
    }
    if let Some(phone) = &form.phone {
        if len(phone) > 50 {
            return Err(ValidationError::new("phone", "Phone is too long"));
        }
    }
    if let Some(company) = &form.company_name {
        if len(company) > 100 {
            return Err(ValidationError::new(
                "company_name",
                "Company name is too long",
            ));
        }
    }
    if form.service_type.is_empty() {
        return Err(ValidationError::new("service_type", "Please select a service"));
    }
    if len(&form.project_description) < 10 {
        return Err(ValidationError::new(
            "project_description",
            "Description must be at least 10 characters",
        ));
    }
    if len(&form.project_description) > 1000 {
        return Err(ValidationError::new(
            "project_description",
            "Description is too long",
        ));
    }
    if form.timeline.is_empty() {
        return Err(ValidationError::new("timeline", "Please select a timeline"));
    }
    Ok(())
}

/// Validates a review submission before any network call is issued.
pub fn validate_review(form: &NewReview) -> Result<(), ValidationError> {
    if len(&form.reviewer_name) < 2 {
        return Err(ValidationError::new(
            "reviewer_name",
            "Name must be at least 2 characters",
        ));
    }
    if !(1..=5).contains(&form.rating) {
        return Err(ValidationError::new(
            "rating",
            "Rating must be between 1 and 5",
        ));
    }
    if len(&form.review_text) < 10 {
        return Err(ValidationError::new(
            "review_text",
            "Review must be at least 10 characters",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry() -> NewInquiry {
        NewInquiry {
            full_name: "Jo".into(),
            email: "a@b.com".into(),
            phone: None,
            company_name: None,
            service_type: "Landing Page".into(),
            project_description: "A site for my bakery".into(),
            timeline: "1 week".into(),
            budget_range: None,
        }
    }

    fn review() -> NewReview {
        NewReview {
            reviewer_name: "Alia".into(),
            company: None,
            rating: 5,
            review_text: "Outstanding work, delivered early!".into(),
        }
    }

    #[test]
    fn two_character_name_passes_empty_name_fails() {
        assert!(validate_inquiry(&inquiry()).is_ok());

        let mut form = inquiry();
        form.full_name = String::new();
        assert_eq!(validate_inquiry(&form).unwrap_err().field, "full_name");
    }

    #[test]
    fn email_format_is_checked() {
        let mut form = inquiry();
        form.email = "not-an-email".into();
        assert_eq!(validate_inquiry(&form).unwrap_err().field, "email");

        form.email = "a@b.com".into();
        assert!(validate_inquiry(&form).is_ok());
    }

    #[test]
    fn overlong_email_reports_length_even_when_malformed() {
        let mut form = inquiry();
        form.email = "x".repeat(300);
        let err = validate_inquiry(&form).unwrap_err();
        assert_eq!(err.field, "email");
        assert_eq!(err.message, "Email is too long");
    }

    #[test]
    fn description_shorter_than_ten_chars_fails() {
        let mut form = inquiry();
        form.project_description = "too short".into(); // 9 chars
        assert_eq!(
            validate_inquiry(&form).unwrap_err().field,
            "project_description"
        );
    }

    #[test]
    fn missing_selections_report_their_field() {
        let mut form = inquiry();
        form.service_type = String::new();
        assert_eq!(validate_inquiry(&form).unwrap_err().field, "service_type");

        let mut form = inquiry();
        form.timeline = String::new();
        assert_eq!(validate_inquiry(&form).unwrap_err().field, "timeline");
    }

    #[test]
    fn first_violation_wins() {
        let mut form = inquiry();
        form.full_name = String::new();
        form.email = "broken".into();
        // Name is checked before email, so its message is the one shown.
        assert_eq!(validate_inquiry(&form).unwrap_err().field, "full_name");
    }

    #[test]
    fn review_rating_outside_bounds_is_rejected() {
        for rating in [0, 6, -1] {
            let mut form = review();
            form.rating = rating;
            assert_eq!(validate_review(&form).unwrap_err().field, "rating");
        }
        assert!(validate_review(&review()).is_ok());
    }

    #[test]
    fn review_text_under_ten_chars_is_rejected() {
        let mut form = review();
        form.review_text = "Great job".into(); // 9 chars
        assert_eq!(validate_review(&form).unwrap_err().field, "review_text");
    }
}
