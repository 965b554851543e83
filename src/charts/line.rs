use iter_num_tools::lin_space;
use plotters::{coord::Shift, prelude::*};

use crate::charts::figure::FigureStyle;

pub const LINE_SAMPLE_COUNT: usize = 100;
pub const LINE_DOMAIN: [f64; 2] = [0.0, 10.0];

// Per-line offsets that keep neighbouring curves apart.
pub const LINE_PHASE_STEP: f64 = 0.5;
pub const LINE_VERTICAL_STEP: f64 = 0.3;

/// Evenly spaced sample locations covering `LINE_DOMAIN`, endpoints included.
pub fn line_samples() -> Vec<f64> {
    lin_space(LINE_DOMAIN[0]..=LINE_DOMAIN[1], LINE_SAMPLE_COUNT).collect()
}

/// Value of the curve drawn for the color at `index` within its palette.
pub fn line_value(x: f64, index: usize) -> f64 {
    let index = index as f64;
    (x + index * LINE_PHASE_STEP).sin() + index * LINE_VERTICAL_STEP
}

pub fn line_points(samples: &[f64], index: usize) -> Vec<(f64, f64)> {
    samples.iter().map(|&x| (x, line_value(x, index))).collect()
}

/// Vertical extent covering every curve of a palette with `line_count` colors.
pub fn line_value_range(line_count: usize) -> std::ops::Range<f64> {
    let top_offset = line_count.saturating_sub(1) as f64 * LINE_VERTICAL_STEP;
    let padding = 0.1;
    (-1.0 - padding)..(1.0 + top_offset + padding)
}

pub fn line_label(index: usize) -> String {
    format!("L{}", index)
}

pub fn draw_line_cell(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    colors: &[RGBColor],
    style: &FigureStyle,
) -> Result<(), Box<dyn std::error::Error>> {
    if colors.is_empty() {
        area.titled(title, style.subplot_title_font())?;
        return Ok(());
    }

    let mut chart = ChartBuilder::on(area)
        .caption(title, style.subplot_title_font())
        .margin(style.cell_margin())
        .x_label_area_size(style.x_label_area())
        .y_label_area_size(style.y_label_area())
        .build_cartesian_2d(
            LINE_DOMAIN[0]..LINE_DOMAIN[1],
            line_value_range(colors.len()),
        )?;

    chart
        .configure_mesh()
        .bold_line_style(BLACK.mix(0.3))
        .light_line_style(BLACK.mix(0.08))
        .y_desc("Value")
        .label_style(style.tick_label_font())
        .axis_desc_style(style.axis_label_font())
        .draw()?;

    let samples = line_samples();
    let stroke = style.line_width();
    for (index, &color) in colors.iter().enumerate() {
        chart
            .draw_series(LineSeries::new(
                line_points(&samples, index),
                color.stroke_width(stroke),
            ))?
            .label(line_label(index))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(stroke))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .label_font(style.tick_label_font())
        .draw()?;

    Ok(())
}
