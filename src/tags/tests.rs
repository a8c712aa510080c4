use super::access::is_unsupported_stream;
use super::*;
use crate::error::MaterializeError;
use crate::test_support::{tags_of, write_track};
use lofty::error::{ErrorKind, FileDecodingError, LoftyError};
use lofty::file::FileType;
use lofty::tag::{ItemKey, ItemValue, Tag, TagItem, TagType};
use std::path::Path;
use tempfile::tempdir;

fn tag_with(items: &[(ItemKey, &str)]) -> Tag {
    let mut tag = Tag::new(TagType::Id3v2);
    for (key, value) in items {
        tag.push(TagItem::new(key.clone(), ItemValue::Text(value.to_string())));
    }
    tag
}

fn tags(title: &str, artist: &str, album_artist: Option<&str>) -> TrackTags {
    TrackTags {
        title: title.into(),
        artist: artist.into(),
        album_artist: album_artist.map(Into::into),
    }
}

#[test]
fn from_tag_reads_single_values() {
    let tag = tag_with(&[
        (ItemKey::TrackTitle, "Song"),
        (ItemKey::TrackArtist, "Guest"),
        (ItemKey::AlbumArtist, "Band"),
    ]);
    let t = TrackTags::from_tag(&tag, Path::new("/tmp/a.m4a")).unwrap();
    assert_eq!(t, tags("Song", "Guest", Some("Band")));
}

#[test]
fn from_tag_requires_title_and_artist() {
    let tag = tag_with(&[(ItemKey::TrackTitle, "Song")]);
    let err = TrackTags::from_tag(&tag, Path::new("/tmp/a.m4a")).unwrap_err();
    assert!(matches!(err, MaterializeError::MissingField { field: "artist", .. }));

    let tag = tag_with(&[(ItemKey::TrackArtist, "Band")]);
    let err = TrackTags::from_tag(&tag, Path::new("/tmp/a.m4a")).unwrap_err();
    assert!(matches!(err, MaterializeError::MissingField { field: "title", .. }));
}

#[test]
fn from_tag_rejects_multiple_values() {
    let tag = tag_with(&[
        (ItemKey::TrackTitle, "Song"),
        (ItemKey::TrackArtist, "One"),
        (ItemKey::TrackArtist, "Two"),
    ]);
    let err = TrackTags::from_tag(&tag, Path::new("/tmp/a.m4a")).unwrap_err();
    assert!(matches!(
        err,
        MaterializeError::MultipleValues {
            field: "artist",
            count: 2,
            ..
        }
    ));
}

#[test]
fn credits_album_artist_when_absent_or_equal() {
    assert!(tags("Song", "Band", None).credits_album_artist());
    assert!(tags("Song", "Band", Some("Band")).credits_album_artist());
    assert!(!tags("Song", "Guest", Some("Band")).credits_album_artist());
}

#[test]
fn rewrites_append_original_artist_to_title() {
    let t = tags("Song", "Guest", Some("Band"));
    assert_eq!(
        TagRewrite::compilation(&t),
        TagRewrite {
            title: "Song [Guest]".into(),
            artist: COMPILATION_ARTIST.into(),
        }
    );
    assert_eq!(
        TagRewrite::album_artist(&t),
        Some(TagRewrite {
            title: "Song [Guest]".into(),
            artist: "Band".into(),
        })
    );
    assert_eq!(TagRewrite::album_artist(&tags("Song", "Band", None)), None);
}

#[test]
fn stream_decoding_errors_are_unsupported() {
    let decode = LoftyError::new(ErrorKind::FileDecoding(FileDecodingError::new(
        FileType::Mp4,
        "bad stream info",
    )));
    assert!(is_unsupported_stream(&decode));

    let io = LoftyError::new(ErrorKind::Io(std::io::Error::other("disk gone")));
    assert!(!is_unsupported_stream(&io));
}

#[test]
fn read_tags_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("song.wav");
    write_track(&path, Some("Song"), Some("Guest"), Some("Band"));

    assert_eq!(tags_of(&path), tags("Song", "Guest", Some("Band")));
}

#[test]
fn read_tags_reports_missing_tag() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bare.wav");
    write_track(&path, None, None, None);

    let err = read_tags(&path).unwrap_err();
    assert!(matches!(
        err,
        MaterializeError::NoTags(_) | MaterializeError::MissingField { .. }
    ));
}

#[test]
fn rewrite_tags_persists_new_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("song.wav");
    write_track(&path, Some("Song"), Some("Guest"), Some("Band"));

    let applied = rewrite_tags(&path, TagRewrite::album_artist).unwrap();
    assert_eq!(applied.map(|r| r.artist), Some("Band".to_string()));

    let after = tags_of(&path);
    assert_eq!(after.title, "Song [Guest]");
    assert_eq!(after.artist, "Band");
    assert_eq!(after.album_artist.as_deref(), Some("Band"));
}

#[test]
fn rewrite_tags_skips_save_when_plan_declines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("song.wav");
    write_track(&path, Some("Song"), Some("Band"), None);

    assert_eq!(rewrite_tags(&path, TagRewrite::album_artist).unwrap(), None);
    assert_eq!(tags_of(&path), tags("Song", "Band", None));
}
