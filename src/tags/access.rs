use std::path::Path;

use lofty::config::WriteOptions;
use lofty::error::{ErrorKind, LoftyError};
use lofty::file::{AudioFile, TaggedFileExt};
use tracing::debug;

use crate::error::{MaterializeError, Result};

use super::model::{TagField, TagRead, TagRewrite, TrackTags};

/// Stream decoding failures mark a file as unsupported rather than broken.
pub(super) fn is_unsupported_stream(err: &LoftyError) -> bool {
    matches!(err.kind(), ErrorKind::FileDecoding(_))
}

/// Read and validate the tags of `path`.
pub fn read_tags(path: &Path) -> Result<TagRead> {
    let tagged = match lofty::read_from_path(path) {
        Ok(tagged) => tagged,
        Err(e) if is_unsupported_stream(&e) => {
            debug!(path = %path.display(), error = %e, "undecodable stream");
            return Ok(TagRead::Unsupported);
        }
        Err(e) => return Err(MaterializeError::tag(path, e)),
    };

    let tag = tagged
        .primary_tag()
        .or_else(|| tagged.first_tag())
        .ok_or_else(|| MaterializeError::NoTags(path.to_path_buf()))?;

    TrackTags::from_tag(tag, path).map(TagRead::Tags)
}

/// Reopen `path`, validate its tags, and apply the rewrite `plan` computes from
/// them. Nothing is written when `plan` returns `None`.
pub fn rewrite_tags<F>(path: &Path, plan: F) -> Result<Option<TagRewrite>>
where
    F: FnOnce(&TrackTags) -> Option<TagRewrite>,
{
    let mut tagged = lofty::read_from_path(path).map_err(|e| MaterializeError::tag(path, e))?;

    let tag_type = tagged
        .primary_tag()
        .or_else(|| tagged.first_tag())
        .map(|tag| tag.tag_type())
        .ok_or_else(|| MaterializeError::NoTags(path.to_path_buf()))?;
    let tag = tagged
        .tag_mut(tag_type)
        .ok_or_else(|| MaterializeError::NoTags(path.to_path_buf()))?;

    let current = TrackTags::from_tag(tag, path)?;
    let Some(rewrite) = plan(&current) else {
        return Ok(None);
    };

    tag.insert_text(TagField::Title.item_key(), rewrite.title.clone());
    tag.insert_text(TagField::Artist.item_key(), rewrite.artist.clone());

    tagged
        .save_to_path(path, WriteOptions::default())
        .map_err(|e| MaterializeError::tag(path, e))?;

    debug!(
        path = %path.display(),
        title = %rewrite.title,
        artist = %rewrite.artist,
        "rewrote tags"
    );
    Ok(Some(rewrite))
}
