//! Cover art resizing.
//!
//! Images are thumbnailed into a square bounding box: the aspect ratio is
//! kept, neither side ends up larger than the box, and images already inside
//! it are never enlarged. The output format follows the destination
//! extension.

use crate::error::{CoreError, CoreResult};

use image::error::{ImageError, UnsupportedErrorKind};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, Rgb, RgbImage};
use log::{debug, info};

use std::path::{Path, PathBuf};

/// Dimensions of `width` x `height` scaled down to fit inside `bound`.
///
/// ```rust
/// use albumart_core::resize::fit_within;
///
/// assert_eq!(fit_within(2000, 1000, 500), (500, 250));
/// assert_eq!(fit_within(300, 200, 500), (300, 200));
/// ```
#[must_use]
pub fn fit_within(width: u32, height: u32, bound: u32) -> (u32, u32) {
    if width <= bound && height <= bound {
        return (width, height);
    }
    let scale = f64::from(bound) / f64::from(width.max(height));
    let scaled = |side: u32| ((f64::from(side) * scale).round() as u32).clamp(1, bound);
    (scaled(width), scaled(height))
}

/// Resizes `source` to fit within `bound` and writes it to `destination`.
///
/// When the destination encoder rejects the image's colour type (for
/// example an RGBA PNG saved as JPEG), the image is flattened onto white and
/// saved once more. Any other encoding failure is returned.
pub fn resize_image(source: &Path, bound: u32, destination: &Path) -> CoreResult<PathBuf> {
    let image = ImageReader::open(source)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| CoreError::ImageDecoding(format!("{}: {e}", source.display())))?;

    let (width, height) = (image.width(), image.height());
    let (new_width, new_height) = fit_within(width, height, bound);
    let resized = if (new_width, new_height) == (width, height) {
        debug!("{}x{} already fits in {bound}px, not scaling", width, height);
        image
    } else {
        image.resize_exact(new_width, new_height, FilterType::Lanczos3)
    };

    debug!("Trying to save the resized image...");
    save_with_fallback(&resized, destination)?;
    info!(
        "Resized {} to {}x{} and saved as {}",
        source.display(),
        new_width,
        new_height,
        destination.display()
    );
    Ok(destination.to_path_buf())
}

fn save_with_fallback(image: &DynamicImage, destination: &Path) -> CoreResult<()> {
    match image.save(destination) {
        Ok(()) => Ok(()),
        Err(ImageError::Unsupported(err)) if matches!(err.kind(), UnsupportedErrorKind::Color(_)) => {
            debug!(
                "Colour type {:?} can't be written to {}, converting to RGB and saving again",
                image.color(),
                destination.display()
            );
            flatten_to_rgb(image)
                .save(destination)
                .map_err(|e| CoreError::ImageEncoding(format!("{}: {e}", destination.display())))
        }
        Err(e) => Err(CoreError::ImageEncoding(format!("{}: {e}", destination.display()))),
    }
}

/// Composites the image over opaque white and drops the alpha channel.
#[must_use]
pub fn flatten_to_rgb(image: &DynamicImage) -> DynamicImage {
    let rgba = image.to_rgba8();
    let mut flat = RgbImage::new(rgba.width(), rgba.height());
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = u16::from(a);
        let blend = |channel: u8| {
            ((u16::from(channel) * alpha + 255 * (255 - alpha) + 127) / 255) as u8
        };
        flat.put_pixel(x, y, Rgb([blend(r), blend(g), blend(b)]));
    }
    DynamicImage::ImageRgb8(flat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_png(path: &Path, width: u32, height: u32, alpha: u8) {
        RgbaImage::from_pixel(width, height, Rgba([200, 10, 10, alpha]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_fit_within_preserves_aspect_ratio() {
        assert_eq!(fit_within(1000, 1000, 512), (512, 512));
        assert_eq!(fit_within(1000, 500, 512), (512, 256));
        assert_eq!(fit_within(500, 1000, 512), (256, 512));
        assert_eq!(fit_within(5000, 1, 100), (100, 1));
    }

    #[test]
    fn test_fit_within_never_upscales() {
        assert_eq!(fit_within(10, 20, 512), (10, 20));
        assert_eq!(fit_within(512, 512, 512), (512, 512));
    }

    #[test]
    fn test_fit_within_bound_holds_for_many_sizes() {
        for (w, h) in [(513, 1), (1, 513), (4000, 3000), (999, 1001), (1234, 1234)] {
            for bound in [1, 64, 300, 512] {
                let (nw, nh) = fit_within(w, h, bound);
                assert!(nw <= bound && nh <= bound, "{w}x{h} in {bound} gave {nw}x{nh}");
                assert!(nw >= 1 && nh >= 1);
                assert!(nw <= w && nh <= h);
            }
        }
    }

    #[test]
    fn test_resize_rgba_png_to_jpeg_flattens() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("cover.png");
        let destination = dir.path().join("cover-resized.jpg");
        write_png(&source, 800, 400, 0);

        let out = resize_image(&source, 200, &destination).unwrap();
        assert_eq!(out, destination);

        let saved = image::open(&destination).unwrap();
        assert_eq!(saved.dimensions(), (200, 100));
        // Fully transparent pixels flatten to white.
        let pixel = saved.to_rgb8().get_pixel(100, 50).0;
        assert!(pixel.iter().all(|c| *c > 240), "expected white, got {:?}", pixel);
    }

    #[test]
    fn test_resize_small_image_keeps_size() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("tiny.png");
        let destination = dir.path().join("tiny-out.png");
        write_png(&source, 40, 30, 255);

        resize_image(&source, 512, &destination).unwrap();
        assert_eq!(image::open(&destination).unwrap().dimensions(), (40, 30));
    }

    #[test]
    fn test_resize_unknown_destination_format_fails() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("cover.png");
        write_png(&source, 20, 20, 255);

        let result = resize_image(&source, 10, &dir.path().join("cover.unknownext"));
        assert!(matches!(result, Err(CoreError::ImageEncoding(_))));
    }

    #[test]
    fn test_resize_undecodable_source_fails() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("broken.png");
        std::fs::write(&source, b"not really a png").unwrap();

        let result = resize_image(&source, 10, &dir.path().join("out.jpg"));
        assert!(matches!(result, Err(CoreError::ImageDecoding(_))));
    }

    #[test]
    fn test_flatten_blends_over_white() {
        let half = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 128])));
        let flat = flatten_to_rgb(&half).to_rgb8();
        let [r, g, b] = flat.get_pixel(0, 0).0;
        assert_eq!((r, g, b), (127, 127, 127));
    }
}
