use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// One form or dynamic-content unit as published by the marketing platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntity {
    pub name: Arc<str>,
    #[serde(rename = "embedCode")]
    pub embed_code: Arc<str>,
}

impl CatalogEntity {
    pub fn new(name: impl Into<Arc<str>>, embed_code: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            embed_code: embed_code.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Form,
    DynamicContent,
}

impl EntityKind {
    /// Fixed key of this kind's slot in the cache store.
    pub fn cache_key(&self) -> &'static str {
        match self {
            EntityKind::Form => "serialized_forms",
            EntityKind::DynamicContent => "serialized_dynamic_content",
        }
    }

    /// Shortcode argument carrying the requested identifier.
    pub fn identifier_argument(&self) -> &'static str {
        match self {
            EntityKind::Form => "title",
            EntityKind::DynamicContent => "name",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Form => "Form",
            EntityKind::DynamicContent => "DynamicContent",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Form" | "form" | "forms" => Ok(EntityKind::Form),
            "DynamicContent" | "dynamic-content" | "dynamic_content" | "dynamiccontent" => {
                Ok(EntityKind::DynamicContent)
            }
            other => Err(DomainError::InvalidEntityKind(other.to_string())),
        }
    }
}
