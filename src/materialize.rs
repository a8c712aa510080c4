//! File materializer: place one source file into the destination tree.
//!
//! Each call reads the file's tags, derives `root/<artist dir>/<album dir>/<file>`,
//! and either hard links the file or copies it and rewrites its title/artist.
//! The destination namespace is write-once: an existing destination is never
//! touched.

use std::fs::{self, File, FileTimes};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{MaterializeError, Result};
use crate::tags::{self, TagRead, TagRewrite};

mod placement;

pub use placement::*;

/// Why a file was passed over without error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Not a regular file.
    NotAFile,
    /// The audio stream could not be decoded.
    Unsupported,
    /// Something already exists at the destination path.
    Duplicate,
}

/// Result of materializing one file.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Skipped(SkipReason),
    Linked,
    Copied(Placement),
}

impl Outcome {
    /// True when a new destination entry was created.
    pub fn is_created(self) -> bool {
        !matches!(self, Outcome::Skipped(_))
    }
}

/// Materialize `source` under `destination_root`.
pub fn materialize(source: &Path, destination_root: &Path) -> Result<Outcome> {
    if !source.is_file() {
        return Ok(Outcome::Skipped(SkipReason::NotAFile));
    }

    let track = match tags::read_tags(source)? {
        TagRead::Tags(track) => track,
        TagRead::Unsupported => return Ok(Outcome::Skipped(SkipReason::Unsupported)),
    };

    let dest = destination_for(source, destination_root)?;
    if let Some(dir) = dest.parent() {
        fs::create_dir_all(dir).map_err(|e| MaterializeError::io(dir, e))?;
    }

    if dest.exists() {
        info!(dest = %dest.display(), "skipping duplicate file");
        return Ok(Outcome::Skipped(SkipReason::Duplicate));
    }

    let placement = Placement::classify(source, &track);
    debug!(source = %source.display(), dest = %dest.display(), ?placement, "placing");

    match placement {
        Placement::DirectLink => {
            fs::hard_link(source, &dest).map_err(|e| MaterializeError::io(&dest, e))?;
            Ok(Outcome::Linked)
        }
        Placement::Compilation => {
            copy_with_metadata(source, &dest)?;
            tags::rewrite_tags(&dest, |current| Some(TagRewrite::compilation(current)))?;
            Ok(Outcome::Copied(placement))
        }
        Placement::RewrittenCopy => {
            copy_with_metadata(source, &dest)?;
            tags::rewrite_tags(&dest, TagRewrite::album_artist)?;
            Ok(Outcome::Copied(placement))
        }
    }
}

/// Copy contents and permissions, then carry over access/modification times.
fn copy_with_metadata(source: &Path, dest: &Path) -> Result<()> {
    fs::copy(source, dest).map_err(|e| MaterializeError::io(dest, e))?;

    let meta = fs::metadata(source).map_err(|e| MaterializeError::io(source, e))?;
    let mut times = FileTimes::new();
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }

    File::open(dest)
        .and_then(|f| f.set_times(times))
        .map_err(|e| MaterializeError::io(dest, e))
}
