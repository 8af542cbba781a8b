//! Transform stages for the TLF index pipeline: quote repair, segmentation,
//! pivoting, field derivation, ordering, and encoding scans.

pub mod derive;
pub mod encoding;
pub mod pivot;
pub mod quotes;
pub mod segment;
pub mod sort;

pub use derive::{DEFAULT_PLACEHOLDERS, PlaceholderRules, TITLE1_BANNER, derive_all, derive_record};
pub use encoding::{EncodingProfile, incompatible_positions};
pub use pivot::{pivot, pivot_all};
pub use quotes::{normalize_footnote_quotes, normalize_quotes};
pub use segment::segment;
pub use sort::{NaturalPart, TocPart, natural_sort_key, sort_records, toc_sort_key};
