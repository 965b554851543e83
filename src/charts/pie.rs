use plotters::{coord::Shift, prelude::*};
use rand::Rng;

use crate::charts::figure::FigureStyle;

/// Wedge sizes are drawn uniformly from `[PIE_SIZE_MIN, PIE_SIZE_MAX)`.
pub const PIE_SIZE_MIN: u32 = 10;
pub const PIE_SIZE_MAX: u32 = 30;

// Degrees, clockwise from 3 o'clock in screen space, i.e. 12 o'clock.
const PIE_START_ANGLE: f64 = -90.0;

// Fraction of the smaller cell dimension used as the radius.
const PIE_RADIUS_SCALE: f64 = 0.4;

pub fn pie_sizes<R: Rng>(rng: &mut R, count: usize) -> Vec<u32> {
    (0..count)
        .map(|_| rng.gen_range(PIE_SIZE_MIN..PIE_SIZE_MAX))
        .collect()
}

/**
 * `Pie` lays wedges out clockwise. Drawing them in reverse from 12 o'clock
 * puts the first palette color just counter-clockwise of 12 o'clock, with
 * the rest following counter-clockwise.
 */
pub fn counter_clockwise_order(
    colors: &[RGBColor],
    sizes: &[u32],
) -> (Vec<RGBColor>, Vec<f64>) {
    assert_eq!(colors.len(), sizes.len());
    let colors = colors.iter().rev().copied().collect();
    let sizes = sizes.iter().rev().map(|&size| size as f64).collect();
    (colors, sizes)
}

/**
 * Draws one wedge per color, counter-clockwise in palette order from
 * 12 o'clock, with the share of each wedge printed as a percentage.
 */
pub fn draw_pie_cell(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    colors: &[RGBColor],
    sizes: &[u32],
    style: &FigureStyle,
) -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(colors.len(), sizes.len());
    let body = area.titled(title, style.pie_title_font())?;
    if colors.is_empty() {
        return Ok(());
    }

    let (width, height) = body.dim_in_pixel();
    let center = ((width / 2) as i32, (height / 2) as i32);
    let radius = PIE_RADIUS_SCALE * width.min(height) as f64;
    let (colors, sizes) = counter_clockwise_order(colors, sizes);
    let labels = vec![""; colors.len()];

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(PIE_START_ANGLE);
    pie.percentages(style.tick_label_font().color(&BLACK));
    body.draw(&pie)?;

    Ok(())
}
