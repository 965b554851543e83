use std::{fs::File, io::BufWriter, path::Path};

use image::RgbImage;

use crate::core::error::PaletteError;

const METERS_PER_INCH: f64 = 0.0254;

pub fn inches_to_pixels(inches: f64, dpi: u32) -> u32 {
    (inches * dpi as f64).round() as u32
}

/// Font sizes are given in points (1/72 inch).
pub fn points_to_pixels(points: f64, dpi: u32) -> f64 {
    points * dpi as f64 / 72.0
}

/// Inclusive-exclusive pixel rectangle: `x..x + width`, `y..y + height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRectangle {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/**
 * Smallest rectangle containing every pixel that differs from `background`,
 * grown by `padding` on each side and clamped to the image. An image with no
 * content keeps its full extent.
 */
pub fn tight_bounding_box(
    image: &RgbImage,
    background: image::Rgb<u8>,
    padding: u32,
) -> PixelRectangle {
    let (width, height) = image.dimensions();
    let mut min_corner = (u32::MAX, u32::MAX);
    let mut max_corner = (0, 0);

    for (x, y, pixel) in image.enumerate_pixels() {
        if *pixel != background {
            min_corner = (min_corner.0.min(x), min_corner.1.min(y));
            max_corner = (max_corner.0.max(x), max_corner.1.max(y));
        }
    }

    if min_corner.0 > max_corner.0 {
        return PixelRectangle {
            x: 0,
            y: 0,
            width,
            height,
        };
    }

    let x0 = min_corner.0.saturating_sub(padding);
    let y0 = min_corner.1.saturating_sub(padding);
    let x1 = (max_corner.0 + 1 + padding).min(width);
    let y1 = (max_corner.1 + 1 + padding).min(height);
    PixelRectangle {
        x: x0,
        y: y0,
        width: x1 - x0,
        height: y1 - y0,
    }
}

pub fn crop_to_content(image: &RgbImage, background: image::Rgb<u8>, padding: u32) -> RgbImage {
    let rect = tight_bounding_box(image, background, padding);
    image::imageops::crop_imm(image, rect.x, rect.y, rect.width, rect.height).to_image()
}

/**
 * Writes an 8-bit RGB PNG whose `pHYs` chunk declares `dpi`, so that image
 * viewers and document tools size it the same way it was laid out.
 */
pub fn save_png_with_dpi(
    image: &RgbImage,
    path: &Path,
    dpi: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path).map_err(|err| PaletteError::io(path, err))?;
    let writer = BufWriter::new(file);

    let pixels_per_meter = (dpi as f64 / METERS_PER_INCH).round() as u32;
    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: pixels_per_meter,
        yppu: pixels_per_meter,
        unit: png::Unit::Meter,
    }));

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(image.as_raw())?;
    png_writer.finish()?;
    Ok(())
}

pub fn write_image_to_file<F>(
    filename: &Path,
    save_lambda: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(&Path) -> Result<(), Box<dyn std::error::Error>>,
{
    save_lambda(filename)?;
    println!("INFO:  Wrote image file to: {}", filename.display());
    Ok(())
}
