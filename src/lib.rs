// src/lib.rs

//! Larder Recipe Catalog
//!
//! An in-memory CRUD service for recipe records, exposed over HTTP.
//!
//! # Architecture
//!
//! - Store-first: a concurrent map plus an atomic identifier counter is
//!   the only stateful component
//! - Handlers are thin translations onto store operations
//! - No persistence: the catalog lives and dies with the process

pub mod model;
pub mod server;
pub mod store;

pub use model::{Recipe, RecipeDraft};
pub use server::{create_router, run_server, ServerConfig, ServerState, SharedState};
pub use store::{RecipeStore, StoreError, StoreResult};
