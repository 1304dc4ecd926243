pub mod image_helper {
    use image::ImageEncoder;
    use image::codecs::png::PngEncoder;
    use image::{ImageError, RgbImage};
    use std::io::{BufWriter, Write};
    use std::path::Path;

    /// Encodes an RGB raster as PNG into any writer.
    pub fn write_png<W: Write>(writer: W, image: &RgbImage) -> Result<(), ImageError> {
        let encoder = PngEncoder::new(writer);

        encoder.write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::Rgb8,
        )?;

        Ok(())
    }

    /// Encodes an RGB raster as PNG and writes it to `path`.
    pub fn save(path: &Path, image: &RgbImage) -> Result<(), ImageError> {
        let output = std::fs::File::create(path)?;
        let mut writer = BufWriter::new(output);
        write_png(&mut writer, image)?;
        writer.flush()?;

        Ok(())
    }

    /// Encodes an RGB raster as an in-memory PNG.
    pub fn encode(image: &RgbImage) -> Result<Vec<u8>, ImageError> {
        let mut buffer = Vec::new();
        write_png(&mut buffer, image)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {

    use super::image_helper::*;
    use image::{Rgb, RgbImage};

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn encode_white_image() {
        let image = RgbImage::from_pixel(40, 30, Rgb([255, 255, 255]));
        let bytes = encode(&image).expect("Error Encoding Image.");

        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
        let decoded = image::load_from_memory(&bytes).expect("Error Decoding Image.").to_rgb8();
        assert_eq!(decoded.dimensions(), (40, 30));
        assert_eq!(decoded, image);
    }

    #[test]
    fn save_gradient_file() {
        let mut image = RgbImage::new(64, 64);
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            *pixel = Rgb([(x * 4) as u8, (y * 4) as u8, 128]);
        }
        let dir = std::env::temp_dir().join(format!("identicon_helper_{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("Error Creating Directory.");
        let path = dir.join("gradient_file.png");

        save(&path, &image).expect("Error Saving File.");

        let reloaded = image::open(&path).expect("Error Opening File.").to_rgb8();
        assert_eq!(reloaded, image);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let image = RgbImage::new(1, 1);
        let path = std::env::temp_dir()
            .join("identicon_helper_missing_dir")
            .join("nested")
            .join("out.png");

        assert!(matches!(save(&path, &image), Err(image::ImageError::IoError(_))));
    }
}
