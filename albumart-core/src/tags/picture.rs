//! Format-neutral model of an embedded picture.
//!
//! Each tag handler converts between this and its own frame type (an ID3
//! `APIC` frame, a lofty `Picture` in Vorbis comments).

/// Picture type code for "Cover (front)" in both ID3 APIC and FLAC PICTURE.
pub const FRONT_COVER_TYPE: u32 = 3;

/// Description written with every embedded cover.
pub const COVER_DESCRIPTION: &str = "Cover";

/// A picture destined for, or read from, a track's tag container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedPicture {
    pub picture_type: u32,
    pub mime_type: String,
    pub description: String,
    pub data: Vec<u8>,
}

impl EmbeddedPicture {
    /// A front cover with the standard description.
    pub fn front_cover(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            picture_type: FRONT_COVER_TYPE,
            mime_type: mime_type.into(),
            description: COVER_DESCRIPTION.to_string(),
            data,
        }
    }

    #[must_use]
    pub fn is_front_cover(&self) -> bool {
        self.picture_type == FRONT_COVER_TYPE
    }
}
