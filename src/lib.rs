//! # listx
//!
//! Turns a CSV listing export into a JSON snapshot with stable placeholder
//! images, and serves that snapshot over a small JSON API.
//!
//! ## Quick Start
//!
//! ```bash
//! listx prepare airbnb_data.csv airbnb_with_photos.json
//! listx top airbnb_with_photos.json airbnb_with_photos_top100.json --count 100
//! listx serve --snapshot airbnb_with_photos.json --port 3000
//! ```
//!
//! ## Crate Structure
//!
//! - `listx-core` - listing records, image seeds and the query layer
//! - `listx-storage` - CSV ingest, JSON snapshots and the snapshot store
//! - `listx-api` - REST views over a snapshot

// Re-export core types
pub use listx_core::{
    query, seed,
    Listing, Filter, NameContains, PriceRange, NonEmptyName,
    Error, Result,
};

// Re-export storage
pub use listx_storage::{SnapshotStore, load, parse, persist, read_snapshot, create_top_n};

// Re-export API
pub use listx_api::{ApiConfig, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        query,
        Listing, Filter,
        Error, Result,
        SnapshotStore,
        ApiConfig, RestApi,
    };
}
