//! Extractors pull structured facts out of raw document text
//!
//! - `dates`: the date pattern registry, normalizer and scanners
//! - `slots`: amounts, parties, statutes and actions used by summaries

pub mod dates;
pub mod slots;

pub use dates::{DateKind, DateScanner, LooseMatch, RawMatch};
pub use slots::Slots;
