//! Tag access: read the title/artist/albumartist record of a file and rewrite
//! title/artist on copies.
//!
//! Tags are validated when read: `title` and `artist` must be present and no
//! field may hold more than one value.

mod access;
mod model;

pub use access::{read_tags, rewrite_tags};
pub use model::*;

#[cfg(test)]
mod tests;
