//! Local cache of resource library entries.
//!
//! Entries are appended and looked up by id with a linear scan. There is no
//! update or removal: a screen that edits a resource appends the new copy,
//! and `resource_by_id` keeps returning the first one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A resource library entry (document, link, video...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            category: category.into(),
            url: None,
            file_type: None,
            created_by: None,
            created_at: None,
        }
    }
}

/// Ordered list of cached resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSlice {
    #[serde(default)]
    resources: Vec<Resource>,
}

impl ResourceSlice {
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Replace the whole cache, e.g. after fetching the library.
    pub fn set_resources(&mut self, resources: Vec<Resource>) {
        self.resources = resources;
    }

    /// Append a resource without checking for an existing id.
    pub fn add_resource(&mut self, resource: Resource) {
        self.resources.push(resource);
    }

    /// First resource with the given id.
    pub fn resource_by_id(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// Resources in a category, in insertion order.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Resource> + 'a {
        self.resources.iter().filter(move |r| r.category == category)
    }
}
