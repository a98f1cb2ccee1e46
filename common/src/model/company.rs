use serde::{Deserialize, Serialize};

/// Singleton row describing the agency itself: description, contact
/// channels and the two founder profiles shown in the About section.
///
/// The row is never created or deleted from the UI; the admin settings
/// screen only updates it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub id: String,
    pub company_description: String,
    pub email: String,
    pub telegram: String,
    pub whatsapp: String,
    pub founder1_name: String,
    pub founder1_title: String,
    pub founder1_bio: String,
    pub founder1_photo: String,
    pub founder1_linkedin: Option<String>,
    pub founder2_name: String,
    pub founder2_title: String,
    pub founder2_bio: String,
    pub founder2_photo: String,
    pub founder2_linkedin: Option<String>,
    pub updated_at: String,
}
