use serde::{Deserialize, Serialize};

/// A live demo project shown in the public portfolio grid. Visibility is
/// gated by `is_published`; categories drive the public filter buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demo {
    pub id: String,
    pub project_name: String,
    pub category: String,
    pub description: String,
    pub key_features: Vec<String>,
    pub demo_url: String,
    pub preview_image: String,
    pub is_featured: bool,
    pub is_published: bool,
    pub display_order: i32,
    pub created_at: String,
}

/// Insert payload for `demos`; id and created_at are generated server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDemo {
    pub project_name: String,
    pub category: String,
    pub description: String,
    pub key_features: Vec<String>,
    pub demo_url: String,
    pub preview_image: String,
    pub is_featured: bool,
    pub is_published: bool,
    pub display_order: i32,
}
