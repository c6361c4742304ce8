//! Vorbis comment handling for OGG tracks.
//!
//! Artwork lives under the `METADATA_BLOCK_PICTURE` comment as a
//! base64-encoded FLAC picture block. lofty decodes those entries into its
//! picture list on read and encodes the list back on save, so this module
//! only ever works with `comments.pictures()`.

use super::picture::{EmbeddedPicture, FRONT_COVER_TYPE};
use crate::error::CoreResult;

use lofty::config::{ParseOptions, WriteOptions};
use lofty::file::AudioFile;
use lofty::ogg::{OggPictureStorage, VorbisComments, VorbisFile};
use lofty::picture::{MimeType, Picture, PictureInformation, PictureType};
use lofty::tag::TagExt;
use log::debug;

use std::fs::File;
use std::path::Path;

fn read_comments(path: &Path) -> CoreResult<VorbisComments> {
    let mut file = File::open(path)?;
    let vorbis = VorbisFile::read_from(&mut file, ParseOptions::new())?;
    Ok(vorbis.vorbis_comments().clone())
}

/// True when the comments hold any picture.
#[must_use]
pub fn comments_have_picture(comments: &VorbisComments) -> bool {
    !comments.pictures().is_empty()
}

/// Drops every existing picture and stores `picture` as the only one.
pub fn apply_cover(comments: &mut VorbisComments, picture: &EmbeddedPicture) -> CoreResult<()> {
    let existing: Vec<PictureType> = comments
        .pictures()
        .iter()
        .map(|(pic, _)| pic.pic_type())
        .collect();
    for pic_type in existing {
        comments.remove_picture_type(pic_type);
    }

    let cover = Picture::new_unchecked(
        PictureType::CoverFront,
        Some(MimeType::from_str(&picture.mime_type)),
        Some(picture.description.clone()),
        picture.data.clone(),
    );
    // Undecodable data is stored with zeroed dimensions.
    let info = PictureInformation::from_picture(&cover).unwrap_or_default();
    debug!(
        "Picture block: {} {}x{} depth {}",
        picture.mime_type, info.width, info.height, info.color_depth
    );
    comments.insert_picture(cover, Some(info))?;
    Ok(())
}

/// Finds the front cover among the decoded pictures.
#[must_use]
pub fn front_cover_in(comments: &VorbisComments) -> Option<EmbeddedPicture> {
    comments
        .pictures()
        .iter()
        .map(|(pic, _)| pic)
        .find(|pic| pic.pic_type() == PictureType::CoverFront)
        .map(|pic| EmbeddedPicture {
            picture_type: FRONT_COVER_TYPE,
            mime_type: pic
                .mime_type()
                .map(|mime| mime.as_str().to_string())
                .unwrap_or_default(),
            description: pic.description().unwrap_or_default().to_string(),
            data: pic.data().to_vec(),
        })
}

pub fn has_front_cover(path: &Path) -> CoreResult<bool> {
    Ok(comments_have_picture(&read_comments(path)?))
}

/// Replaces the track's artwork with `picture` and saves the comments.
pub fn embed_front_cover(path: &Path, picture: &EmbeddedPicture) -> CoreResult<()> {
    let mut comments = read_comments(path)?;
    apply_cover(&mut comments, picture)?;
    comments.save_to_path(path, WriteOptions::default())?;
    Ok(())
}

pub fn read_front_cover(path: &Path) -> CoreResult<Option<EmbeddedPicture>> {
    Ok(front_cover_in(&read_comments(path)?))
}
