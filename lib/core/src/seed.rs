// Deterministic image seeds and picsum.photos URLs
use std::fmt::Write;

use crate::listing::Listing;

/// Identifier columns tried in order when deriving a seed
pub const SEED_ID_FIELDS: [&str; 4] = ["id", "ID", "listing id", "listing_id"];

pub const IMAGE_HOST: &str = "https://picsum.photos";
pub const THUMBNAIL_SIZE: (u32, u32) = (400, 300);
pub const FULL_SIZE: (u32, u32) = (600, 400);
pub const IMAGE_VARIANTS: [&str; 3] = ["a", "b", "c"];

/// Seed for a record: the digits of its first present identifier column, or
/// `position` when there is none or the digits don't form a `u64`.
///
/// Only the first present candidate is considered, so an unparseable `id`
/// falls back to the position even if `listing_id` would parse.
pub fn seed_for(record: &Listing, position: usize) -> u64 {
    let Some(raw) = SEED_ID_FIELDS
        .iter()
        .find(|key| record.contains_key(key))
        .and_then(|key| record.text(key))
    else {
        return position as u64;
    };

    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<u64>().unwrap_or(position as u64)
}

#[inline]
pub fn thumbnail_url(seed: u64) -> String {
    image_url(&seed.to_string(), THUMBNAIL_SIZE)
}

#[inline]
pub fn full_url(seed_variant: &str) -> String {
    image_url(seed_variant, FULL_SIZE)
}

/// The three full-size gallery URLs for a seed, one per variant tag
pub fn image_urls(seed: u64) -> [String; 3] {
    IMAGE_VARIANTS.map(|tag| full_url(&format!("{seed}{tag}")))
}

fn image_url(seed: &str, (width, height): (u32, u32)) -> String {
    format!(
        "{}/seed/{}/{}/{}",
        IMAGE_HOST,
        encode_component(seed),
        width,
        height
    )
}

/// Percent-encode everything outside the `encodeURIComponent` unreserved set
fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                let _ = write!(out, "%{:02X}", byte);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Listing {
        Listing::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_seed_strips_non_digits() {
        assert_eq!(seed_for(&record(&[("id", "id-042")]), 9), 42);
        assert_eq!(seed_for(&record(&[("ID", " 1,001 ")]), 9), 1001);
        assert_eq!(seed_for(&record(&[("listing id", "#77")]), 9), 77);
        assert_eq!(seed_for(&record(&[("listing_id", "L-5")]), 9), 5);
    }

    #[test]
    fn test_seed_falls_back_to_position() {
        assert_eq!(seed_for(&record(&[("NAME", "Loft")]), 0), 0);
        assert_eq!(seed_for(&record(&[("NAME", "Loft")]), 17), 17);
        assert_eq!(seed_for(&record(&[("id", "abc")]), 3), 3);
        assert_eq!(seed_for(&record(&[("id", "")]), 5), 5);
        assert_eq!(seed_for(&record(&[("id", "99999999999999999999999")]), 6), 6);
    }

    #[test]
    fn test_seed_uses_first_present_candidate_only() {
        let rec = record(&[("listing_id", "12"), ("id", "none")]);
        assert_eq!(seed_for(&rec, 8), 8);

        let rec = record(&[("listing_id", "12"), ("ID", "34")]);
        assert_eq!(seed_for(&rec, 8), 34);
    }

    #[test]
    fn test_urls_are_deterministic() {
        assert_eq!(thumbnail_url(1001), thumbnail_url(1001));
        assert_eq!(image_urls(1001), image_urls(1001));
        assert_eq!(thumbnail_url(1001), "https://picsum.photos/seed/1001/400/300");
        assert_eq!(full_url("1001a"), "https://picsum.photos/seed/1001a/600/400");
    }

    #[test]
    fn test_image_urls_are_distinct() {
        let [a, b, c] = image_urls(3);
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
        assert!(c.ends_with("/seed/3c/600/400"));
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("1001a"), "1001a");
        assert_eq!(encode_component("a b/c"), "a%20b%2Fc");
        assert_eq!(encode_component("é"), "%C3%A9");
    }
}
