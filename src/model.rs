// src/model.rs
//! Recipe data model
//!
//! A `Recipe` is the stored record; a `RecipeDraft` is the id-less body
//! clients send on create and replace. JSON field names are camelCase
//! (`titleImage`), and the ingredient list may be absent entirely.

use serde::{Deserialize, Serialize};

/// A stored recipe record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Store-assigned identifier, unique for the process lifetime
    pub id: u64,
    /// Recipe title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Ordered ingredient list (absent = unknown, serialized as null)
    pub ingredients: Option<Vec<String>>,
    /// URL of the title image
    pub title_image: String,
}

impl Recipe {
    /// Build a record from a draft and a store-assigned identifier
    pub fn from_draft(id: u64, draft: RecipeDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            ingredients: draft.ingredients,
            title_image: draft.title_image,
        }
    }
}

/// Request body for creating or replacing a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
    pub title_image: String,
}
