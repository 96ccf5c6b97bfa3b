//! Snippet form decoding and validation.
//!
//! All business validation lives here, on the shell side. The store accepts
//! whatever it is given, so nothing invalid may pass this module.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Expiry periods offered in the create form, longest first.
pub const EXPIRY_CHOICES: &[(u32, &str)] = &[(365, "One year"), (7, "One week"), (1, "One day")];

/// Title length cap, in characters (not bytes).
const MAX_TITLE_CHARS: usize = 100;

/// The snippet create form as decoded from a POST body.
#[derive(Debug, Clone, Deserialize)]
pub struct SnippetForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_expires")]
    pub expires: u32,
}

fn default_expires() -> u32 {
    365
}

impl Default for SnippetForm {
    fn default() -> Self {
        Self { title: String::new(), content: String::new(), expires: default_expires() }
    }
}

/// Per-field validation messages, keyed by field name.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

impl SnippetForm {
    /// Validate the form, returning a message per offending field.
    /// An empty map means the form is acceptable.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.title.trim().is_empty() {
            errors.insert("title", "This field cannot be blank");
        } else if self.title.chars().count() > MAX_TITLE_CHARS {
            errors.insert("title", "This field cannot be more than 100 characters long");
        }

        if self.content.trim().is_empty() {
            errors.insert("content", "This field cannot be blank");
        }

        if !EXPIRY_CHOICES.iter().any(|(days, _)| *days == self.expires) {
            errors.insert("expires", "This field must equal 1, 7 or 365");
        }

        errors
    }
}
