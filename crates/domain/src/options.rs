use std::collections::HashMap;

/// Per-invocation display overrides taken from the shortcode arguments.
///
/// Values are free-form and never validated; only presence matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteOptions {
    pub height: Option<String>,
    pub width: Option<String>,
    pub classes: Option<String>,
}

impl RewriteOptions {
    pub fn from_arguments(arguments: &HashMap<String, String>) -> Self {
        Self {
            height: arguments.get("height").cloned(),
            width: arguments.get("width").cloned(),
            classes: arguments.get("classes").cloned(),
        }
    }

    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_classes(mut self, classes: impl Into<String>) -> Self {
        self.classes = Some(classes.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.height.is_none() && self.width.is_none() && self.classes.is_none()
    }
}
