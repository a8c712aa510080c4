//! Library scanning: find candidate audio files under the source directory.

mod scan;

pub use scan::{parse_filter, scan};
