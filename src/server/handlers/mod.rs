// src/server/handlers/mod.rs
//! HTTP request handlers for the Larder server

pub mod recipes;
