//! # listx Core
//!
//! Core library for listx.
//!
//! - [`Listing`] - a schema-less dataset record, optionally enriched with image URLs
//! - [`seed`] - deterministic per-record image seeds and URL builders
//! - [`query`] - lookups, name search and price filtering over a loaded dataset
//!
//! ## Example
//!
//! ```rust
//! use listx_core::{query, Listing};
//!
//! let dataset = vec![
//!     Listing::from_pairs([("id", "1001"), ("NAME", "Cozy Loft"), ("price", "$120.50")]).enrich(0),
//! ];
//!
//! assert_eq!(
//!     dataset[0].thumbnail(),
//!     Some("https://picsum.photos/seed/1001/400/300")
//! );
//! assert_eq!(query::filter_by_price_range(&dataset, 100.0, 150.0).len(), 1);
//! assert!(query::get_by_id(&dataset, "9999").is_none());
//! ```

pub mod error;
pub mod listing;
pub mod query;
pub mod seed;

pub use error::{Error, Result};
pub use listing::Listing;
pub use query::{Filter, NameContains, NonEmptyName, PriceRange};
