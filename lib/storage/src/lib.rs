pub mod loader;
pub mod snapshot;
pub mod store;

pub use loader::{load, parse};
pub use snapshot::{create_top_n, persist, read_snapshot, DEFAULT_TOP_COUNT};
pub use store::SnapshotStore;
