//! # Fyyur Common Library
//!
//! Shared code for the Fyyur booking directory:
//! - Database models, schema and the catalog repository
//! - Listing aggregation (city grouping, search, past/upcoming shows)
//! - Validation of submitted venue and artist fields
//! - Configuration loading
//! - Timestamp utilities

pub mod config;
pub mod db;
pub mod error;
pub mod listing;
pub mod time;
pub mod validation;

pub use db::CatalogRepository;
pub use error::{Error, Result};
