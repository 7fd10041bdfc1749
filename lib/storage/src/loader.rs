// CSV source -> enriched listings
use listx_core::{Error, Listing, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const BOM: char = '\u{feff}';

/// Read a CSV file and enrich every row with its image URLs.
///
/// The first row is the header. Unreadable files, invalid UTF-8 and rows with a
/// different field count than the header are parse errors.
pub fn load<P: AsRef<Path>>(source: P) -> Result<Vec<Listing>> {
    let path = source.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| Error::Parse(format!("Failed to read {}: {}", path.display(), e)))?;

    let listings = parse(&text)?;
    info!("Loaded {} rows from {:?}", listings.len(), path);
    Ok(listings)
}

/// Same as [`load`] over in-memory CSV text
pub fn parse(text: &str) -> Result<Vec<Listing>> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers().map_err(csv_error)?.clone();
    debug!("CSV header: {} columns", headers.len());

    let mut listings = Vec::new();
    for (position, row) in reader.records().enumerate() {
        let row = row.map_err(csv_error)?;
        let raw = Listing::from_pairs(headers.iter().zip(row.iter()));
        listings.push(raw.enrich(position));
    }
    Ok(listings)
}

fn csv_error(e: csv::Error) -> Error {
    Error::Parse(e.to_string())
}
