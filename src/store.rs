// src/store.rs
//! Concurrent in-memory recipe store
//!
//! The authoritative set of recipes lives in a `DashMap` keyed by the
//! store-assigned identifier, alongside an atomic counter that hands out
//! identifiers. Identifiers are unique and strictly increasing for the
//! process lifetime; they are never reused, even after deletion.
//!
//! All mutating operations are single atomic map operations:
//! - `create` inserts through the vacant-entry path, so a counter bug
//!   cannot silently overwrite an existing record.
//! - `update` replaces through the occupied-entry path, so the existence
//!   check and the write happen under one shard lock and a concurrent
//!   delete can never be resurrected.

use crate::model::{Recipe, RecipeDraft};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

/// Errors surfaced by store operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Recipe with id {0} not found")]
    NotFound(u64),

    /// The freshly assigned identifier was already occupied. The atomic
    /// counter makes this unreachable in practice; it is an invariant
    /// violation, not an expected runtime path.
    #[error("identifier collision on insert: {0}")]
    IdCollision(u64),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Thread-safe in-memory mapping from identifier to recipe
pub struct RecipeStore {
    recipes: DashMap<u64, Recipe>,
    /// Last assigned identifier; the first increment yields 1
    next_id: AtomicU64,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self {
            recipes: DashMap::new(),
            next_id: AtomicU64::new(0),
        }
    }

    /// Snapshot of all current recipes, in no particular order
    pub fn list(&self) -> Vec<Recipe> {
        self.recipes.iter().map(|entry| entry.value().clone()).collect()
    }

    /// Fetch a recipe by identifier
    pub fn get(&self, id: u64) -> StoreResult<Recipe> {
        self.recipes
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::NotFound(id))
    }

    /// Assign the next identifier and insert a new recipe
    pub fn create(&self, draft: RecipeDraft) -> StoreResult<Recipe> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let recipe = Recipe::from_draft(id, draft);

        match self.recipes.entry(id) {
            Entry::Vacant(slot) => {
                slot.insert(recipe.clone());
                Ok(recipe)
            }
            Entry::Occupied(_) => Err(StoreError::IdCollision(id)),
        }
    }

    /// Replace the recipe at `id`, only if it currently exists
    ///
    /// The occupied-entry path holds the shard lock across check and
    /// replace: a delete racing with this call either wins first (we
    /// return `NotFound`) or removes the replacement afterwards.
    pub fn update(&self, id: u64, draft: RecipeDraft) -> StoreResult<Recipe> {
        match self.recipes.entry(id) {
            Entry::Occupied(mut slot) => {
                let recipe = Recipe::from_draft(id, draft);
                slot.insert(recipe.clone());
                Ok(recipe)
            }
            Entry::Vacant(_) => Err(StoreError::NotFound(id)),
        }
    }

    /// Remove and return the recipe at `id`
    pub fn delete(&self, id: u64) -> StoreResult<Recipe> {
        self.recipes
            .remove(&id)
            .map(|(_, recipe)| recipe)
            .ok_or(StoreError::NotFound(id))
    }

    /// Recipes whose title or description contains `filter`
    ///
    /// Matching is case-sensitive literal substring; the empty filter
    /// matches everything.
    pub fn search_text(&self, filter: &str) -> Vec<Recipe> {
        self.recipes
            .iter()
            .filter(|entry| {
                let recipe = entry.value();
                recipe.title.contains(filter) || recipe.description.contains(filter)
            })
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Recipes with at least one ingredient containing `filter`
    ///
    /// Recipes without an ingredient list are skipped.
    pub fn search_ingredients(&self, filter: &str) -> Vec<Recipe> {
        self.recipes
            .iter()
            .filter(|entry| {
                entry
                    .value()
                    .ingredients
                    .as_deref()
                    .is_some_and(|list| list.iter().any(|item| item.contains(filter)))
            })
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Number of stored recipes
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::new()
    }
}
