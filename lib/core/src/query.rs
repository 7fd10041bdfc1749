// Read-only queries over a loaded dataset
use crate::Listing;

/// Predicate over a single listing
pub trait Filter {
    fn matches(&self, listing: &Listing) -> bool;
}

/// Case-insensitive substring match on the listing name
pub struct NameContains {
    needle: String,
}

impl NameContains {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }
}

impl Filter for NameContains {
    fn matches(&self, listing: &Listing) -> bool {
        listing
            .name()
            .map(|name| name.to_lowercase().contains(&self.needle))
            .unwrap_or_else(|| self.needle.is_empty())
    }
}

/// Inclusive price range. Listings without a parseable price never match.
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Filter for PriceRange {
    fn matches(&self, listing: &Listing) -> bool {
        listing
            .price()
            .and_then(|raw| parse_price(&raw))
            .map(|price| price >= self.min && price <= self.max)
            .unwrap_or(false)
    }
}

/// Listings whose name is present and not blank
pub struct NonEmptyName;

impl Filter for NonEmptyName {
    fn matches(&self, listing: &Listing) -> bool {
        listing
            .name()
            .map(|name| !name.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Parse a price such as `"$1,200.50"` by keeping only digits and dots.
///
/// Returns `None` when nothing numeric is left or the remainder is not a single
/// decimal number (`"12.3.4"`).
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// All listings matching `filter`, in dataset order
pub fn select<'a, F: Filter + ?Sized>(dataset: &'a [Listing], filter: &F) -> Vec<&'a Listing> {
    dataset.iter().filter(|l| filter.matches(l)).collect()
}

/// Bounds-checked positional lookup; negative or past-the-end indexes miss.
#[inline]
pub fn get_by_position(dataset: &[Listing], index: i64) -> Option<&Listing> {
    usize::try_from(index).ok().and_then(|i| dataset.get(i))
}

/// First listing whose `id`, as text, equals `id`
pub fn get_by_id<'a>(dataset: &'a [Listing], id: &str) -> Option<&'a Listing> {
    dataset
        .iter()
        .find(|listing| listing.id().is_some_and(|value| value == id))
}

#[inline]
pub fn search_by_name<'a>(dataset: &'a [Listing], query: &str) -> Vec<&'a Listing> {
    select(dataset, &NameContains::new(query))
}

/// Callers must ensure `min <= max`; an inverted range simply matches nothing.
#[inline]
pub fn filter_by_price_range(dataset: &[Listing], min: f64, max: f64) -> Vec<&Listing> {
    select(dataset, &PriceRange::new(min, max))
}

#[inline]
pub fn filter_non_empty_name(dataset: &[Listing]) -> Vec<&Listing> {
    select(dataset, &NonEmptyName)
}

#[inline]
pub fn head_slice(dataset: &[Listing], n: usize) -> &[Listing] {
    &dataset[..n.min(dataset.len())]
}
