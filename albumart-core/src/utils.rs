//! Utility functions for formatting and path handling.
//!
//! This module provides general-purpose helpers used throughout the
//! albumart-core library: extension handling, the image MIME map, and
//! byte formatting for log output.

use std::path::Path;

/// Returns the lowercased extension of `path`, without the dot.
#[must_use]
pub fn extension_lowercase(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

/// Maps an image extension to the MIME type embedded alongside it.
///
/// Only jpg, jpeg and png are embeddable; matching is case-insensitive.
#[must_use]
pub fn mime_for_extension(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        _ => None,
    }
}

/// Looks up the MIME type for an image path by its extension.
#[must_use]
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    extension_lowercase(path).and_then(|ext| mime_for_extension(&ext))
}

/// Picks a file extension for an embedded picture's MIME type.
#[must_use]
pub fn extension_for_mime(mime: &str) -> Option<&'static str> {
    match mime.to_ascii_lowercase().as_str() {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/bmp" => Some("bmp"),
        "image/tiff" => Some("tiff"),
        _ => None,
    }
}

/// Formats bytes with appropriate binary units (B, KiB, MiB, GiB).
#[must_use] pub fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    const GIB: f64 = MIB * 1024.0;

    let bytes_f64 = bytes as f64;
    if bytes_f64 >= GIB {
        format!("{:.2} GiB", bytes_f64 / GIB)
    } else if bytes_f64 >= MIB {
        format!("{:.2} MiB", bytes_f64 / MIB)
    } else if bytes_f64 >= KIB {
        format!("{:.2} KiB", bytes_f64 / KIB)
    } else {
        format!("{bytes} B")
    }
}

/// Returns the directory containing `path`, or "." for bare filenames.
#[must_use]
pub fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_extension_is_case_insensitive() {
        for ext in ["jpg", "JPG", "Jpg", "jpeg", "JPEG", "Jpeg"] {
            assert_eq!(mime_for_extension(ext), Some("image/jpeg"), "extension {ext}");
        }
        for ext in ["png", "PNG", "Png"] {
            assert_eq!(mime_for_extension(ext), Some("image/png"), "extension {ext}");
        }
        assert_eq!(mime_for_extension("gif"), None);
        assert_eq!(mime_for_extension("tiff"), None);
        assert_eq!(mime_for_extension(""), None);
    }

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("/music/album/Cover.PNG")), Some("image/png"));
        assert_eq!(mime_for_path(Path::new("folder.jpeg")), Some("image/jpeg"));
        assert_eq!(mime_for_path(Path::new("cover")), None);
        assert_eq!(mime_for_path(Path::new("cover.bmp")), None);
    }

    #[test]
    fn test_extension_for_mime() {
        assert_eq!(extension_for_mime("image/jpeg"), Some("jpg"));
        assert_eq!(extension_for_mime("image/jpg"), Some("jpg"));
        assert_eq!(extension_for_mime("IMAGE/PNG"), Some("png"));
        assert_eq!(extension_for_mime("image/webp"), None);
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.00 KiB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.00 MiB");
        assert_eq!(format_bytes(3 * 1024 * 1024 * 1024), "3.00 GiB");
    }

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir(Path::new("song.mp3")), Path::new("."));
        assert_eq!(parent_dir(Path::new("music/song.mp3")), Path::new("music"));
    }
}
