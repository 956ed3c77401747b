use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// A configured authentication method, keyed by name. Upserts replace the
/// whole record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct AuthMethod {
    #[validate(length(min = 1, message = "Auth method name cannot be empty"))]
    pub name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    /// Provider-specific settings (issuer URL, client id, ...), passed
    /// through to the provider untouched.
    #[serde(default)]
    pub config: HashMap<String, String>,
}
