//! CIS response envelope
//!
//! Nearly every CIS endpoint wraps its payload as
//! `{success, errors, messages, result, result_info}`.

use serde::{Deserialize, Serialize};

/// Standard CIS response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CisResponse<T> {
    /// Operation success flag
    pub success: bool,
    /// Array of errors encountered
    #[serde(default)]
    pub errors: Vec<Vec<String>>,
    /// Array of messages returned
    #[serde(default)]
    pub messages: Vec<Vec<String>>,
    pub result: T,
    /// Pagination statistics for list endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_info: Option<ResultInfo>,
}

/// Pagination statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultInfo {
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub per_page: i64,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub total_count: i64,
}

impl ResultInfo {
    /// Whether more pages follow this one
    pub fn has_next_page(&self) -> bool {
        self.per_page > 0 && self.page.saturating_mul(self.per_page) < self.total_count
    }
}

/// Result payload carrying only an object id (deletes, purges, checks)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdResult {
    pub id: String,
}

/// Result payload of zone setting endpoints `{id, value, editable, modified_on}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingObject<V> {
    pub id: String,
    pub value: V,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<String>,
}
