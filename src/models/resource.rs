//! Id-only references to other Azure network resources.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Weak reference to another ARM resource (NSG, route table, NAT gateway,
/// IP allocation). Only the id is interpreted; anything else present in the
/// source document is carried through untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ResourceReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResourceReference {
    /// Reference carrying only `id`.
    pub fn from_id(id: impl Into<String>) -> Self {
        ResourceReference {
            id: Some(id.into()),
            extra: Map::new(),
        }
    }

    /// Resource name, taken from the last segment of the ARM id.
    pub fn resource_name(&self) -> Option<&str> {
        self.id
            .as_deref()
            .and_then(|id| id.trim_end_matches('/').rsplit('/').next())
            .filter(|name| !name.is_empty())
    }
}
