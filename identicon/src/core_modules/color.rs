// THEORY:
// The `Color` module is a "dumb" data container for the single fill color of an
// identicon. The color is taken verbatim from the first three digest bytes; no
// transform, clamping or palette lookup is applied.

pub mod color {
    use crate::core_modules::digest::digest::Digest;
    use image::Rgb;

    pub type Channel = u8;

    const CHANNELS: usize = 3;

    /// An opaque RGB color.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Color {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
    }

    impl Color {
        pub const WHITE: Color = Color::new(255, 255, 255);

        pub const fn new(red: Channel, green: Channel, blue: Channel) -> Self {
            Color { red, green, blue }
        }
    }

    /// Reads digest bytes 0, 1 and 2 as red, green and blue.
    pub fn extract_color(digest: &Digest) -> Color {
        let [red, green, blue] = [digest[0], digest[1], digest[2]];
        Color::new(red, green, blue)
    }

    impl From<Color> for Rgb<Channel> {
        fn from(color: Color) -> Self {
            Rgb([color.red, color.green, color.blue])
        }
    }

    impl From<Rgb<Channel>> for Color {
        fn from(pixel: Rgb<Channel>) -> Self {
            let Rgb([red, green, blue]) = pixel;
            Color::new(red, green, blue)
        }
    }

    impl From<Color> for [Channel; CHANNELS] {
        fn from(color: Color) -> Self {
            [color.red, color.green, color.blue]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::color::*;
    use crate::core_modules::digest::digest::digest;

    #[test]
    fn color_uses_first_three_digest_bytes() {
        let mut bytes = [0u8; 16];
        bytes[..4].copy_from_slice(&[10, 20, 30, 40]);
        assert_eq!(extract_color(&bytes), Color::new(10, 20, 30));
    }

    #[test]
    fn reference_color() {
        assert_eq!(extract_color(&digest(b"bart")), Color::new(245, 65, 70));
    }

    #[test]
    fn converts_to_rgb_pixel_and_back() {
        let color = Color::new(1, 2, 3);
        let pixel: image::Rgb<u8> = color.into();
        assert_eq!(pixel, image::Rgb([1, 2, 3]));
        assert_eq!(Color::from(pixel), color);
        assert_eq!(<[u8; 3]>::from(color), [1, 2, 3]);
    }
}
