//! # accord Core
//!
//! Core types for the accord perfume compatibility engine.
//!
//! This crate provides the fundamental data structures:
//!
//! - [`Vector`] - Dense embedding vector with cosine similarity and mean pooling
//! - [`Category`] - The 10 fixed scent categories with their exemplar notes
//! - [`COMPATIBILITY_MATRIX`] - Hand-assigned pairwise category scores
//! - [`PerfumeRecord`] / [`PerfumeCatalog`] - Perfume rows and exact lookup
//!
//! ## Example
//!
//! ```rust
//! use accord_core::{Category, PerfumeCatalog, PerfumeRecord, compatibility};
//!
//! let catalog = PerfumeCatalog::from_records(vec![PerfumeRecord::new(
//!     "Avon",
//!     "Incandessence",
//!     vec!["rose".to_string(), "amber".to_string()],
//! )]);
//!
//! assert!(catalog.find("Avon", "Incandessence").is_some());
//! assert_eq!(compatibility(Category::Woody, Category::Earthy), 0.90);
//! ```

pub mod category;
pub mod error;
pub mod matrix;
pub mod perfume;
pub mod vector;

pub use category::{Category, CATEGORY_COUNT};
pub use error::{Error, Result};
pub use matrix::{compatibility, COMPATIBILITY_MATRIX};
pub use perfume::{normalize_note, split_notes, CategoryScore, PerfumeCatalog, PerfumeRecord};
pub use vector::Vector;
