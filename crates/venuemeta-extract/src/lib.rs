//! Best-effort metadata extraction from URLs.
//!
//! Two independent extractors: venue-name recovery from a CDN image
//! filename convention ([`venue_name`]) and latitude/longitude recovery
//! from consumer maps share URLs ([`maps`]). Both are pure, total
//! functions where failure is an expected `None`, never an error —
//! callers run them over large batches of scraped records and one
//! unparseable input must not abort anything.

pub mod maps;
pub mod venue_name;

pub use maps::extract_coordinates;
pub use venue_name::extract_venue_name;
