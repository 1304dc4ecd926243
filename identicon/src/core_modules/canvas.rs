// THEORY:
// The `Canvas` is the renderer's private raster: a fixed 250x250 RGB buffer that
// starts as a solid, fully opaque white and is painted one rectangle at a time.
// It is owned by a single render call and handed out only by exclusive reference
// while painting, so there is never more than one writer.
//
// Painting is a plain solid fill. If two rectangles ever overlapped, the later one
// would win, which is harmless because every fill uses the same color.
//
// Persisting the canvas is the only fallible step in the whole identicon system.
// Any failure there (missing directory, permissions, full disk) is reported as
// `RenderError::OutputWriteFailure` carrying the destination path.

use std::path::Path;

use image::{ImageError, RgbImage};

use crate::core_modules::color::color::Color;
use crate::core_modules::error::RenderError;
use crate::core_modules::rectangle::{CANVAS_SIZE, Rectangle};
use crate::core_modules::utils::image_helper::image_helper;

/// Color of every pixel no rectangle covers.
pub const BACKGROUND: Color = Color::WHITE;

/// A 250x250 RGB raster.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbImage,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// A blank canvas filled with the background color.
    pub fn new() -> Self {
        Self {
            image: RgbImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, BACKGROUND.into()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Paints `rect` solid `color`. Parts outside the canvas are ignored.
    pub fn fill(&mut self, rect: &Rectangle, color: Color) {
        let right = rect.bottom_right.x.min(self.width());
        let bottom = rect.bottom_right.y.min(self.height());
        let pixel = color.into();

        for y in rect.top_left.y..bottom {
            for x in rect.top_left.x..right {
                self.image.put_pixel(x, y, pixel);
            }
        }
    }

    /// The color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image.get_pixel_checked(x, y).map(|pixel| Color::from(*pixel))
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    /// Writes the canvas to `path` as PNG.
    pub fn save(&self, path: &Path) -> Result<(), RenderError> {
        image_helper::save(path, &self.image).map_err(|source| RenderError::OutputWriteFailure {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Encodes the canvas as PNG in memory.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, ImageError> {
        image_helper::encode(&self.image)
    }
}

/// Paints every rectangle, in order, onto a fresh canvas.
pub fn paint(color: Color, rectangles: &[Rectangle]) -> Canvas {
    let mut canvas = Canvas::new();
    for rect in rectangles {
        canvas.fill(rect, color);
    }
    canvas
}

/// Paints `rectangles` in `color` and persists the result to `destination`.
pub fn render(color: Color, rectangles: &[Rectangle], destination: &Path) -> Result<(), RenderError> {
    let canvas = paint(color, rectangles);
    canvas.save(destination)?;
    log::info!(
        "wrote identicon with {} filled cells to {}",
        rectangles.len(),
        destination.display()
    );
    Ok(())
}
