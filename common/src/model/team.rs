use serde::{Deserialize, Serialize};

/// A member of the team section. `skills` is an ordered list persisted
/// as a text array; the admin form edits it as comma-delimited text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub title: String,
    pub company: Option<String>,
    pub bio: String,
    pub photo_url: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub display_order: i32,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTeamMember {
    pub name: String,
    pub title: String,
    pub company: Option<String>,
    pub bio: String,
    pub photo_url: String,
    pub skills: Vec<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub display_order: i32,
}
