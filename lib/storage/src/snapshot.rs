// JSON snapshot files
use atomicwrites::{AtomicFile, OverwriteBehavior};
use listx_core::{Error, Listing, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Number of records kept by [`create_top_n`] unless told otherwise
pub const DEFAULT_TOP_COUNT: usize = 100;

/// Parse a snapshot file: a JSON array of listing objects
pub fn read_snapshot<P: AsRef<Path>>(path: P) -> Result<Vec<Listing>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| Error::Parse(format!("Failed to read {}: {}", path.display(), e)))?;

    serde_json::from_str(&text)
        .map_err(|e| Error::Parse(format!("Invalid snapshot {}: {}", path.display(), e)))
}

/// Write the dataset as one pretty-printed JSON document.
///
/// The file is replaced atomically so readers never see a partial snapshot.
pub fn persist<P: AsRef<Path>>(dataset: &[Listing], destination: P) -> Result<()> {
    let path = destination.as_ref();
    let json = serde_json::to_string_pretty(dataset)
        .map_err(|e| Error::Serialization(e.to_string()))?;

    let tmp_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    AtomicFile::new_with_tmpdir(path, OverwriteBehavior::AllowOverwrite, tmp_dir)
        .write(|f| f.write_all(json.as_bytes()))
        .map_err(|e| Error::Serialization(format!("Failed to write {}: {}", path.display(), e)))?;

    info!("Wrote {} with {} rows", path.display(), dataset.len());
    Ok(())
}

/// Copy the first `count` records of a snapshot into a new snapshot.
///
/// Records are copied verbatim in their original order. Returns how many were
/// written.
pub fn create_top_n<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
    count: usize,
) -> Result<usize> {
    let dataset = read_snapshot(source)?;
    let top = listx_core::query::head_slice(&dataset, count);
    persist(top, destination)?;
    Ok(top.len())
}
