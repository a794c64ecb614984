//! Rules applied to scanned text
//!
//! 1. Noise - drop headers, citations and boilerplate before classification
//! 2. Classify - score the base category and refine the specific event type

pub mod classify;
pub mod noise;

pub use classify::{Classification, Classifier, TypeRule};
pub use noise::{is_filler_context, is_noise_line, looks_like_header};
