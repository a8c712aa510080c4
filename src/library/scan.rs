use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}

/// Split a comma-separated `--filter` value into extensions.
///
/// `"m4a, .MP3,"` -> `["m4a", "mp3"]`
pub fn parse_filter(filter: &str) -> Vec<String> {
    filter
        .split(',')
        .map(normalize_extension)
        .filter(|e| !e.is_empty())
        .collect()
}

/// Whether `path` has one of `extensions` (case-insensitive, without dot).
pub fn is_audio_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            extensions.iter().any(|e| normalize_extension(e) == ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Lazily walk `dir` and yield entries matching the configured extensions, in
/// traversal order.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> impl Iterator<Item = PathBuf> {
    let include_hidden = settings.include_hidden;
    let extensions = settings.extensions.clone();

    WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .into_iter()
        .filter_entry(move |e| include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                None
            }
        })
        // Symlinks and other non-directories are passed through; the
        // materializer decides whether they are regular files.
        .filter(move |entry| {
            !entry.file_type().is_dir() && is_audio_file(entry.path(), &extensions)
        })
        .map(walkdir::DirEntry::into_path)
}
