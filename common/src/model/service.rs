use serde::{Deserialize, Serialize};

/// A service line offered by the agency. Services are pre-configured in
/// the datastore; the UI only reads them, filtered by `is_active` and
/// sorted by `display_order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub service_name: String,
    pub description: String,
    pub icon_name: String,
    pub is_active: bool,
    pub display_order: i32,
}
