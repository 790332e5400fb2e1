//! The inline listing dataset.
//!
//! Five hand-collected apartments act as templates; the rest of the dataset
//! is synthesized by copying a template and jittering three of its fields.
//! The random source is always passed in, so a seeded [`rand::rngs::StdRng`]
//! reproduces the same rows on every run.

pub mod builder;
pub mod listing;

pub use builder::{build_dataset, jitter, templates};
pub use listing::{AnalysedListing, Listing};
