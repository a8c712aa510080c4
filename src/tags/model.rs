use std::path::Path;

use lofty::tag::{ItemKey, Tag};

use crate::error::{MaterializeError, Result};

/// Artist written to every track copied out of a `Compilations` directory.
pub const COMPILATION_ARTIST: &str = "Compilation";

/// The three tag fields this tool inspects.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TagField {
    Title,
    Artist,
    AlbumArtist,
}

impl TagField {
    pub fn name(self) -> &'static str {
        match self {
            TagField::Title => "title",
            TagField::Artist => "artist",
            TagField::AlbumArtist => "albumartist",
        }
    }

    pub fn item_key(self) -> ItemKey {
        match self {
            TagField::Title => ItemKey::TrackTitle,
            TagField::Artist => ItemKey::TrackArtist,
            TagField::AlbumArtist => ItemKey::AlbumArtist,
        }
    }

    /// All text values stored under this field, in tag order.
    pub fn values(self, tag: &Tag) -> Vec<&str> {
        tag.items()
            .filter(|item| match self {
                TagField::Title => matches!(item.key(), ItemKey::TrackTitle),
                TagField::Artist => matches!(item.key(), ItemKey::TrackArtist),
                TagField::AlbumArtist => matches!(item.key(), ItemKey::AlbumArtist),
            })
            .filter_map(|item| item.value().text())
            .collect()
    }

    /// The single value of this field, `None` when absent.
    fn single(self, tag: &Tag, path: &Path) -> Result<Option<String>> {
        let values = self.values(tag);
        match values.as_slice() {
            [] => Ok(None),
            [v] => Ok(Some((*v).to_string())),
            many => Err(MaterializeError::MultipleValues {
                path: path.to_path_buf(),
                field: self.name(),
                count: many.len(),
            }),
        }
    }

    fn required(self, tag: &Tag, path: &Path) -> Result<String> {
        self.single(tag, path)?
            .ok_or_else(|| MaterializeError::MissingField {
                path: path.to_path_buf(),
                field: self.name(),
            })
    }
}

/// Validated tag record of one track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackTags {
    pub title: String,
    pub artist: String,
    pub album_artist: Option<String>,
}

impl TrackTags {
    /// Build the record from a lofty tag. `path` is only used for error context.
    pub fn from_tag(tag: &Tag, path: &Path) -> Result<Self> {
        Ok(Self {
            title: TagField::Title.required(tag, path)?,
            artist: TagField::Artist.required(tag, path)?,
            album_artist: TagField::AlbumArtist.single(tag, path)?,
        })
    }

    /// True when the album artist is absent or equal to the track artist.
    pub fn credits_album_artist(&self) -> bool {
        match &self.album_artist {
            None => true,
            Some(album_artist) => *album_artist == self.artist,
        }
    }
}

/// Outcome of reading a file's tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagRead {
    Tags(TrackTags),
    /// The audio stream could not be decoded; the file is not eligible.
    Unsupported,
}

/// New title/artist values for a copied file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRewrite {
    pub title: String,
    pub artist: String,
}

impl TagRewrite {
    /// `Title [Artist]` credited to the compilation artist.
    pub fn compilation(tags: &TrackTags) -> Self {
        Self {
            title: credited_title(tags),
            artist: COMPILATION_ARTIST.to_string(),
        }
    }

    /// `Title [Artist]` credited to the album artist, `None` when there is none.
    pub fn album_artist(tags: &TrackTags) -> Option<Self> {
        tags.album_artist.as_ref().map(|album_artist| Self {
            title: credited_title(tags),
            artist: album_artist.clone(),
        })
    }
}

fn credited_title(tags: &TrackTags) -> String {
    format!("{} [{}]", tags.title, tags.artist)
}
