use serde::{Deserialize, Serialize};

/// A ready-made site template offered under one of the service
/// categories. `category` matches a `Service::service_name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceTemplate {
    pub id: String,
    pub template_name: String,
    pub category: String,
    pub description: String,
    pub demo_url: String,
    pub preview_url: String,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewServiceTemplate {
    pub template_name: String,
    pub category: String,
    pub description: String,
    pub demo_url: String,
    pub preview_url: String,
    pub is_active: bool,
    pub display_order: i32,
}
