//! Turns stored portraits into small JPEGs the surface can embed.

use std::io::Cursor;

use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use rollbook_render_core::{EncodedImage, Surface};
use rollbook_traits::ResourceProvider;
use rollbook_types::Person;

/// Tallest thumbnail kept, in pixels.
pub const MAX_HEIGHT_PX: u32 = 300;
pub const JPEG_QUALITY: u8 = 75;

/// Resource path of a person's portrait.
pub fn thumbnail_path(person_id: &str) -> String {
    format!("{}.jpg", person_id)
}

/// Decodes `bytes`, shrinks the image to at most `MAX_HEIGHT_PX` tall and
/// re-encodes it as an RGB JPEG.
pub fn encode_thumbnail(bytes: &[u8]) -> Result<EncodedImage, image::ImageError> {
    let mut image = image::load_from_memory(bytes)?;
    if image.height() > MAX_HEIGHT_PX {
        image = image.resize(image.width(), MAX_HEIGHT_PX, FilterType::Triangle);
    }
    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());

    let mut data = Cursor::new(Vec::new());
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut data, JPEG_QUALITY))?;
    Ok(EncodedImage {
        data: data.into_inner(),
        width_px: rgb.width(),
        height_px: rgb.height(),
    })
}

/// Registers a thumbnail for each of `people` flagged as having one.
/// A portrait that cannot be loaded or decoded is logged and skipped; that
/// entry then renders without an image. Returns how many were registered.
pub fn register_thumbnails<'p>(
    surface: &mut dyn Surface,
    provider: &dyn ResourceProvider,
    people: impl IntoIterator<Item = &'p Person>,
) -> usize {
    let mut registered = 0;
    for person in people.into_iter().filter(|p| p.thumbnail) {
        if surface.image_info(&person.id).is_some() {
            continue;
        }

        let path = thumbnail_path(&person.id);
        let bytes = match provider.load(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::error!("Could not load thumbnail for '{}': {}", person.id, e);
                continue;
            }
        };
        let image = match encode_thumbnail(&bytes) {
            Ok(image) => image,
            Err(e) => {
                log::error!("Could not decode thumbnail '{}': {}", path, e);
                continue;
            }
        };
        match surface.register_image(&person.id, image) {
            Ok(()) => registered += 1,
            Err(e) => log::error!("Could not register thumbnail '{}': {}", path, e),
        }
    }
    log::debug!("Registered {} thumbnails from {}", registered, provider.name());
    registered
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};
    use rollbook_render_core::RecordingSurface;
    use rollbook_traits::InMemoryResourceProvider;
    use rollbook_types::Size;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let image = RgbImage::from_pixel(width, height, image::Rgb([200, 120, 40]));
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_tall_image_is_downsized() {
        let thumb = encode_thumbnail(&png(400, 600)).unwrap();
        assert_eq!(thumb.height_px, MAX_HEIGHT_PX);
        assert_eq!(thumb.width_px, 200);
        assert_eq!(&thumb.data[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_small_image_keeps_size() {
        let thumb = encode_thumbnail(&png(40, 60)).unwrap();
        assert_eq!((thumb.width_px, thumb.height_px), (40, 60));
    }

    #[test]
    fn test_garbage_fails_to_decode() {
        assert!(encode_thumbnail(b"not an image").is_err());
    }

    #[test]
    fn test_register_skips_broken_and_missing() {
        let provider = InMemoryResourceProvider::new();
        provider.add("1.jpg", png(30, 30)).unwrap();
        provider.add("2.jpg", b"broken".to_vec()).unwrap();

        let people: Vec<Person> = ["1", "2", "3"]
            .into_iter()
            .map(|id| Person {
                thumbnail: true,
                ..Person::new(id, "A", "B")
            })
            .collect();
        let mut surface = RecordingSurface::new(Size::new(215.9, 279.4));
        let count = register_thumbnails(&mut surface, &provider, &people);
        assert_eq!(count, 1);
        assert!(surface.image_info("1").is_some());
        assert!(surface.image_info("2").is_none());
    }
}
