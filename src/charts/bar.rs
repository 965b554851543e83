use plotters::{coord::Shift, prelude::*};
use rand::Rng;

use crate::charts::figure::FigureStyle;

/// Bar heights are drawn uniformly from `[BAR_HEIGHT_MIN, BAR_HEIGHT_MAX)`.
pub const BAR_HEIGHT_MIN: u32 = 50;
pub const BAR_HEIGHT_MAX: u32 = 100;

// Headroom above the tallest possible bar.
const BAR_AXIS_TOP: u32 = 105;

/// One independent random height per color.
pub fn bar_heights<R: Rng>(rng: &mut R, count: usize) -> Vec<u32> {
    (0..count)
        .map(|_| rng.gen_range(BAR_HEIGHT_MIN..BAR_HEIGHT_MAX))
        .collect()
}

pub fn bar_label(index: usize) -> String {
    format!("C{}", index)
}

/**
 * Draws one bar per color, left to right in palette order, with a thin black
 * edge around each bar and `C<i>` labels along the x-axis.
 */
pub fn draw_bar_cell(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    colors: &[RGBColor],
    heights: &[u32],
    style: &FigureStyle,
) -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(colors.len(), heights.len());
    if colors.is_empty() {
        area.titled(title, style.subplot_title_font())?;
        return Ok(());
    }

    let bar_count = colors.len() as u32;
    let mut chart = ChartBuilder::on(area)
        .caption(title, style.subplot_title_font())
        .margin(style.cell_margin())
        .x_label_area_size(style.x_label_area())
        .y_label_area_size(style.y_label_area())
        .build_cartesian_2d((0..bar_count).into_segmented(), 0u32..BAR_AXIS_TOP)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(colors.len())
        .x_label_formatter(&|value| match value {
            SegmentValue::CenterOf(index) => bar_label(*index as usize),
            _ => String::new(),
        })
        .y_desc("Value")
        .label_style(style.tick_label_font())
        .axis_desc_style(style.axis_label_font())
        .draw()?;

    let gap = style.bar_gap();
    let bar_rectangle = |index: usize, height: u32, shape: ShapeStyle| {
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(index as u32), 0),
                (SegmentValue::Exact(index as u32 + 1), height),
            ],
            shape,
        );
        bar.set_margin(0, 0, gap, gap);
        bar
    };

    chart.draw_series(
        colors
            .iter()
            .zip(heights)
            .enumerate()
            .map(|(index, (color, &height))| bar_rectangle(index, height, color.filled())),
    )?;
    chart.draw_series(
        heights
            .iter()
            .enumerate()
            .map(|(index, &height)| bar_rectangle(index, height, BLACK.stroke_width(1))),
    )?;

    Ok(())
}
