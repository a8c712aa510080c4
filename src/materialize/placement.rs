use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::error::{MaterializeError, Result};
use crate::tags::TrackTags;

/// Directory name that marks every track beneath it as part of a compilation.
pub const COMPILATIONS_DIR: &str = "Compilations";

/// How a track lands in the destination tree.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Copied and retagged as `Title [Artist]` by "Compilation".
    Compilation,
    /// Hard linked; tags are already right.
    DirectLink,
    /// Copied and retagged as `Title [Artist]` by the album artist.
    RewrittenCopy,
}

impl Placement {
    /// Decide placement. Compilation membership wins over the tag comparison.
    pub fn classify(source: &Path, tags: &TrackTags) -> Self {
        if is_compilation(source) {
            Placement::Compilation
        } else if tags.credits_album_artist() {
            Placement::DirectLink
        } else {
            Placement::RewrittenCopy
        }
    }
}

/// True when any directory above the file is literally `Compilations`.
pub fn is_compilation(source: &Path) -> bool {
    source
        .parent()
        .map(|dir| {
            dir.components()
                .any(|c| matches!(c, Component::Normal(name) if name == OsStr::new(COMPILATIONS_DIR)))
        })
        .unwrap_or(false)
}

/// `root/<grandparent>/<parent>/<file name>` for `source`.
pub fn destination_for(source: &Path, root: &Path) -> Result<PathBuf> {
    let invalid = || MaterializeError::InvalidPath(source.to_path_buf());

    let file_name = source.file_name().ok_or_else(invalid)?;
    let album_dir = source.parent().ok_or_else(invalid)?;
    let album = album_dir.file_name().ok_or_else(invalid)?;
    let artist = album_dir
        .parent()
        .and_then(Path::file_name)
        .ok_or_else(invalid)?;

    Ok(root.join(artist).join(album).join(file_name))
}
