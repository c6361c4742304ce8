// albumart-core/tests/ogg_tests.rs
//
// Vorbis comment picture handling against real Ogg files on disk.

mod common;

use albumart_core::tags::{self, EmbeddedPicture, ogg};
use common::write_vorbis_track;
use lofty::config::ParseOptions;
use lofty::file::AudioFile;
use lofty::ogg::{OggPictureStorage, VorbisFile};
use lofty::picture::{MimeType, PictureType};
use std::error::Error;
use std::fs::File;
use std::path::Path;
use tempfile::tempdir;

fn read_vorbis(path: &Path) -> Result<VorbisFile, Box<dyn Error>> {
    let mut file = File::open(path)?;
    Ok(VorbisFile::read_from(&mut file, ParseOptions::new())?)
}

fn jpeg_bytes(fill: u8) -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0];
    data.extend(std::iter::repeat(fill).take(28));
    data
}

#[test]
fn test_fresh_track_has_no_art() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let track = dir.path().join("song.ogg");
    write_vorbis_track(&track)?;

    assert!(!ogg::has_front_cover(&track)?);
    assert!(!tags::has_existing_art(&track)?);
    assert_eq!(ogg::read_front_cover(&track)?, None);

    dir.close()?;
    Ok(())
}

#[test]
fn test_embed_writes_single_front_cover() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let track = dir.path().join("song.ogg");
    write_vorbis_track(&track)?;

    let cover = EmbeddedPicture::front_cover("image/jpeg", jpeg_bytes(1));
    ogg::embed_front_cover(&track, &cover)?;

    assert!(ogg::has_front_cover(&track)?);
    assert_eq!(ogg::read_front_cover(&track)?, Some(cover));

    let vorbis = read_vorbis(&track)?;
    let pictures = vorbis.vorbis_comments().pictures();
    assert_eq!(pictures.len(), 1);
    assert_eq!(pictures[0].0.pic_type(), PictureType::CoverFront);
    assert_eq!(pictures[0].0.mime_type(), Some(&MimeType::Jpeg));

    dir.close()?;
    Ok(())
}

#[test]
fn test_reembed_replaces_cover() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let track = dir.path().join("song.ogg");
    write_vorbis_track(&track)?;

    ogg::embed_front_cover(&track, &EmbeddedPicture::front_cover("image/jpeg", jpeg_bytes(1)))?;
    ogg::embed_front_cover(&track, &EmbeddedPicture::front_cover("image/jpeg", jpeg_bytes(2)))?;

    let vorbis = read_vorbis(&track)?;
    let pictures = vorbis.vorbis_comments().pictures();
    assert_eq!(pictures.len(), 1);
    assert_eq!(pictures[0].0.data(), jpeg_bytes(2).as_slice());

    dir.close()?;
    Ok(())
}
