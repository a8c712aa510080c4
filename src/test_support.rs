//! Fixtures shared by unit tests: tiny WAV files carrying an ID3v2 tag.

use std::fs;
use std::path::Path;

use lofty::config::WriteOptions;
use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::{ItemKey, Tag, TagType};

use crate::tags::{TagRead, TrackTags, read_tags};

/// Write a short silent-ish WAV to `path` (creating parents) and tag it.
pub fn write_track(path: &Path, title: Option<&str>, artist: Option<&str>, album_artist: Option<&str>) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 8000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for i in 0..800i32 {
        writer.write_sample(((i % 64) - 32) as i16 * 256).unwrap();
    }
    writer.finalize().unwrap();

    let mut tag = Tag::new(TagType::Id3v2);
    if let Some(v) = title {
        tag.insert_text(ItemKey::TrackTitle, v.to_string());
    }
    if let Some(v) = artist {
        tag.insert_text(ItemKey::TrackArtist, v.to_string());
    }
    if let Some(v) = album_artist {
        tag.insert_text(ItemKey::AlbumArtist, v.to_string());
    }

    let mut tagged = lofty::read_from_path(path).unwrap();
    tagged.insert_tag(tag);
    tagged.save_to_path(path, WriteOptions::default()).unwrap();
}

/// Read back the validated tags of a fixture, panicking on anything else.
pub fn tags_of(path: &Path) -> TrackTags {
    match read_tags(path).unwrap() {
        TagRead::Tags(tags) => tags,
        TagRead::Unsupported => panic!("{} is not decodable", path.display()),
    }
}
