//! Dashboard folder value type.

use serde::{Deserialize, Serialize};

/// A dashboard folder, including the caller's permissions on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Numeric folder id.
    pub id: i64,
    /// Stable folder uid.
    pub uid: String,
    /// Folder title.
    pub title: String,
    /// Folder version.
    pub version: u32,
    /// Folder url, empty when not routed.
    pub url: String,
    /// Whether the caller can administer the folder.
    pub can_admin: bool,
    /// Whether the caller can delete the folder.
    pub can_delete: bool,
    /// Whether the caller can edit the folder.
    pub can_edit: bool,
    /// Whether the caller can save into the folder.
    pub can_save: bool,
    /// Whether the folder has a custom access control list.
    pub has_acl: bool,
    /// Creation timestamp, empty when unset.
    pub created: String,
    /// Creating user, empty when unset.
    pub created_by: String,
    /// Last update timestamp, empty when unset.
    pub updated: String,
    /// Last updating user, empty when unset.
    pub updated_by: String,
}
