//! ID3v2 handling for MP3 tracks.

use super::picture::{EmbeddedPicture, FRONT_COVER_TYPE};
use crate::error::CoreResult;

use id3::frame::{Picture, PictureType};
use id3::{ErrorKind, Tag, TagLike, Version};
use log::debug;

use std::path::Path;

/// Reads the ID3 tag, mapping "no ID3 header at all" to `None`.
fn read_tag(path: &Path) -> CoreResult<Option<Tag>> {
    match Tag::read_from_path(path) {
        Ok(tag) => Ok(Some(tag)),
        Err(err) if matches!(err.kind, ErrorKind::NoTag) => {
            debug!("No ID3 tags in {}", path.display());
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

fn front_covers(tag: &Tag) -> impl Iterator<Item = &Picture> {
    tag.pictures()
        .filter(|picture| picture.picture_type == PictureType::CoverFront)
}

/// True when the tag holds at least one front-cover APIC frame.
pub fn has_front_cover(path: &Path) -> CoreResult<bool> {
    let Some(tag) = read_tag(path)? else {
        return Ok(false);
    };
    Ok(front_covers(&tag).next().is_some())
}

/// Number of front-cover APIC frames in the tag.
pub fn count_front_covers(path: &Path) -> CoreResult<usize> {
    Ok(read_tag(path)?.map_or(0, |tag| front_covers(&tag).count()))
}

/// Replaces any front cover with `picture` and writes the tag as ID3v2.4,
/// whose default text encoding is UTF-8. A track without a tag gets one.
pub fn embed_front_cover(path: &Path, picture: &EmbeddedPicture) -> CoreResult<()> {
    let mut tag = read_tag(path)?.unwrap_or_else(Tag::new);

    tag.remove_picture_by_type(PictureType::CoverFront);
    tag.add_frame(Picture {
        mime_type: picture.mime_type.clone(),
        picture_type: PictureType::CoverFront,
        description: picture.description.clone(),
        data: picture.data.clone(),
    });

    tag.write_to_path(path, Version::Id3v24)?;
    Ok(())
}

/// Returns the first front-cover APIC frame, if any.
pub fn read_front_cover(path: &Path) -> CoreResult<Option<EmbeddedPicture>> {
    let Some(tag) = read_tag(path)? else {
        return Ok(None);
    };
    Ok(front_covers(&tag).next().map(|picture| EmbeddedPicture {
        picture_type: FRONT_COVER_TYPE,
        mime_type: picture.mime_type.clone(),
        description: picture.description.clone(),
        data: picture.data.clone(),
    }))
}
