use serde::{Deserialize, Serialize};

/// A delivered client project in the showcase section, with a thumbnail
/// stored in the object bucket and a delivery-time label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioProject {
    pub id: String,
    pub project_name: String,
    pub category: String,
    pub description: String,
    pub features: Vec<String>,
    pub demo_url: String,
    pub thumbnail_url: String,
    pub delivery_time: String,
    pub is_published: bool,
    pub display_order: i32,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProject {
    pub project_name: String,
    pub category: String,
    pub description: String,
    pub features: Vec<String>,
    pub demo_url: String,
    pub thumbnail_url: String,
    pub delivery_time: String,
    pub is_published: bool,
    pub display_order: i32,
}
