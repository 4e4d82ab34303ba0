//! Slant Domain Layer
//!
//! This crate contains the domain model shared by every other Slant crate.
//! It has ZERO external dependencies and defines the value types and the
//! trait seams that infrastructure crates implement.
//!
//! ## Key Concepts
//!
//! - **Article**: an analyzed news article with its sentences and bias score
//! - **SourceDocument**: the narrow, validated response of an extraction provider
//! - **SourceStatus**: provider status; a non-OK status is a soft warning, not a failure
//! - **StoreOutcome**: whether a store call wrote a record or found one already present
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and trait definitions only
//! - Providers live in `slant-provider`, persistence in `slant-store`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod article;
pub mod source;
pub mod traits;

// Re-exports for convenience
pub use article::Article;
pub use source::{SourceDocument, SourceStatus};
pub use traits::{ArticleSource, ArticleStore, StoreOutcome};
