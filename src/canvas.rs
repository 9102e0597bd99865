use std::error::Error;
use std::path::Path;
use std::sync::Mutex;

use image::RgbImage;
use log::warn;

use crate::math::RGBColor;

/// Write side of a frame. Coordinates are centered on the canvas with y
/// pointing up. Implementations must tolerate calls from many threads.
pub trait Canvas: Sync {
    fn put_pixel(&self, x: i32, y: i32, color: RGBColor);
}

/// Canvas backed by an `RgbImage`; every write takes the lock.
pub struct ImageCanvas {
    width: u32,
    height: u32,
    buffer: Mutex<RgbImage>,
}

impl ImageCanvas {
    pub fn new(width: u32, height: u32) -> ImageCanvas {
        ImageCanvas {
            width,
            height,
            buffer: Mutex::new(RgbImage::new(width, height)),
        }
    }

    /// Centered coordinates to top-left, row-major image coordinates.
    /// `None` when the pixel falls outside the image.
    pub fn to_image_coords(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let i = (self.width / 2) as i64 + x as i64;
        let j = (self.height - self.height / 2) as i64 - 1 - y as i64;
        if i < 0 || j < 0 || i >= self.width as i64 || j >= self.height as i64 {
            return None;
        }
        Some((i as u32, j as u32))
    }

    pub fn into_image(self) -> RgbImage {
        match self.buffer.into_inner() {
            Ok(image) => image,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Encodes the canvas, format chosen from the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn Error>> {
        let image = self.buffer.lock().map_err(|_| "canvas lock poisoned")?;
        image.save(path)?;
        Ok(())
    }
}

impl Canvas for ImageCanvas {
    fn put_pixel(&self, x: i32, y: i32, color: RGBColor) {
        let (i, j) = match self.to_image_coords(x, y) {
            Some(coords) => coords,
            None => {
                warn!("dropped write to pixel ({}, {}) outside canvas", x, y);
                return;
            }
        };
        let mut image = self.buffer.lock().expect("canvas lock poisoned");
        image.put_pixel(i, j, color.into());
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_coordinate_change() {
        let canvas = ImageCanvas::new(4, 4);
        assert_eq!(canvas.to_image_coords(-2, 1), Some((0, 0)));
        assert_eq!(canvas.to_image_coords(1, -2), Some((3, 3)));
        assert_eq!(canvas.to_image_coords(0, 0), Some((2, 1)));
        assert_eq!(canvas.to_image_coords(2, 0), None);
        assert_eq!(canvas.to_image_coords(0, 2), None);

        let odd = ImageCanvas::new(5, 3);
        assert_eq!(odd.to_image_coords(-2, 1), Some((0, 0)));
        assert_eq!(odd.to_image_coords(2, -1), Some((4, 2)));
        assert_eq!(odd.to_image_coords(0, 0), Some((2, 1)));
    }

    #[test]
    fn test_put_pixel() {
        let canvas = ImageCanvas::new(2, 2);
        canvas.put_pixel(-1, 0, RGBColor::WHITE);
        canvas.put_pixel(0, -1, RGBColor::new(1.0, 0.0, 0.0));
        // outside, ignored
        canvas.put_pixel(5, 5, RGBColor::WHITE);

        let image = canvas.into_image();
        assert_eq!(*image.get_pixel(0, 0), Rgb([255, 255, 255]));
        assert_eq!(*image.get_pixel(1, 1), Rgb([255, 0, 0]));
        assert_eq!(*image.get_pixel(1, 0), Rgb([0, 0, 0]));
        assert_eq!(*image.get_pixel(0, 1), Rgb([0, 0, 0]));
    }
}
