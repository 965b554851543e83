use image::RgbImage;
use plotters::prelude::*;
use rand::Rng;

use crate::charts::{bar, line, pie, ChartKind};
use crate::core::{
    color::{resolve_palette_colors, BACKGROUND},
    error::PaletteError,
    grid_layout::GridLayout,
    image_utils::{crop_to_content, inches_to_pixels, points_to_pixels},
    palette::NamedPalette,
};

/**
 * Physical size of a preview figure and of the text drawn on it. Lengths are
 * in inches and font sizes in points; both are converted to pixels at `dpi`.
 */
#[derive(Debug, Clone)]
pub struct FigureStyle {
    pub dpi: u32,
    pub columns: usize,
    pub width_inches: f64,
    pub row_height_inches: f64,
    pub pie_row_height_inches: f64,
    pub title_band_inches: f64,
    pub padding_inches: f64,
    pub figure_title_points: f64,
    pub subplot_title_points: f64,
    pub pie_title_points: f64,
    pub tick_label_points: f64,
    pub axis_label_points: f64,
    pub line_width_points: f64,
}

impl Default for FigureStyle {
    fn default() -> FigureStyle {
        FigureStyle {
            dpi: 150,
            columns: 5,
            width_inches: 15.0,
            row_height_inches: 3.0,
            pie_row_height_inches: 4.0,
            title_band_inches: 0.5,
            padding_inches: 0.1,
            figure_title_points: 16.0,
            subplot_title_points: 10.0,
            pie_title_points: 9.0,
            tick_label_points: 6.0,
            axis_label_points: 8.0,
            line_width_points: 1.5,
        }
    }
}

impl FigureStyle {
    pub fn row_height(&self, kind: ChartKind) -> f64 {
        match kind {
            ChartKind::Pie => self.pie_row_height_inches,
            ChartKind::Bar | ChartKind::Line => self.row_height_inches,
        }
    }

    /// Canvas size in pixels before the tight crop.
    pub fn figure_size(&self, kind: ChartKind, rows: usize) -> (u32, u32) {
        (
            inches_to_pixels(self.width_inches, self.dpi),
            inches_to_pixels(
                self.row_height(kind) * rows as f64 + self.title_band_inches,
                self.dpi,
            ),
        )
    }

    pub fn padding(&self) -> u32 {
        inches_to_pixels(self.padding_inches, self.dpi)
    }

    fn font(&self, points: f64, font_style: FontStyle) -> FontDesc<'static> {
        FontDesc::new(
            FontFamily::SansSerif,
            points_to_pixels(points, self.dpi),
            font_style,
        )
    }

    pub fn figure_title_font(&self) -> FontDesc<'static> {
        self.font(self.figure_title_points, FontStyle::Bold)
    }

    pub fn subplot_title_font(&self) -> FontDesc<'static> {
        self.font(self.subplot_title_points, FontStyle::Bold)
    }

    pub fn pie_title_font(&self) -> FontDesc<'static> {
        self.font(self.pie_title_points, FontStyle::Bold)
    }

    pub fn tick_label_font(&self) -> FontDesc<'static> {
        self.font(self.tick_label_points, FontStyle::Normal)
    }

    pub fn axis_label_font(&self) -> FontDesc<'static> {
        self.font(self.axis_label_points, FontStyle::Normal)
    }

    pub fn cell_margin(&self) -> u32 {
        self.padding()
    }

    pub fn x_label_area(&self) -> u32 {
        (2.5 * points_to_pixels(self.tick_label_points, self.dpi)).round() as u32
    }

    pub fn y_label_area(&self) -> u32 {
        (2.5 * points_to_pixels(self.axis_label_points, self.dpi)).round() as u32
    }

    pub fn bar_gap(&self) -> u32 {
        (0.1 * points_to_pixels(self.tick_label_points, self.dpi)).round() as u32 + 1
    }

    pub fn line_width(&self) -> u32 {
        (points_to_pixels(self.line_width_points, self.dpi).round() as u32).max(1)
    }
}

/**
 * Rasterizes one figure: `title` across the top, then a grid with one subplot
 * per palette drawn according to `kind`. Slots past the last palette are left
 * as background. The result is cropped to its content.
 *
 * Random bar heights and pie sizes are drawn from `rng`, palette by palette.
 */
pub fn render_figure<R: Rng>(
    kind: ChartKind,
    palettes: &[NamedPalette],
    title: &str,
    style: &FigureStyle,
    rng: &mut R,
) -> Result<RgbImage, Box<dyn std::error::Error>> {
    let canvas = render_figure_canvas(kind, palettes, title, style, rng)?;
    let background = image::Rgb([BACKGROUND.0, BACKGROUND.1, BACKGROUND.2]);
    Ok(crop_to_content(&canvas, background, style.padding()))
}

/// The full `figure_size` canvas behind `render_figure`, before cropping.
pub fn render_figure_canvas<R: Rng>(
    kind: ChartKind,
    palettes: &[NamedPalette],
    title: &str,
    style: &FigureStyle,
    rng: &mut R,
) -> Result<RgbImage, Box<dyn std::error::Error>> {
    let palette_colors = palettes
        .iter()
        .map(resolve_palette_colors)
        .collect::<Result<Vec<_>, _>>()?;

    let grid = GridLayout::new(palettes.len(), style.columns);
    let (width, height) = style.figure_size(kind, grid.rows);
    let mut buffer = vec![0u8; width as usize * height as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&BACKGROUND)?;
        let body = root.titled(title, style.figure_title_font())?;
        let cells = body.split_evenly((grid.rows, grid.columns));
        assert_eq!(cells.len(), grid.slot_count());

        for (slot, cell) in cells.iter().enumerate() {
            if grid.is_blank(slot) {
                continue;
            }
            let cell_title = format!("Palette: {}", palettes[slot].name);
            let colors = &palette_colors[slot];
            match kind {
                ChartKind::Bar => {
                    let heights = bar::bar_heights(rng, colors.len());
                    bar::draw_bar_cell(cell, &cell_title, colors, &heights, style)?
                }
                ChartKind::Line => line::draw_line_cell(cell, &cell_title, colors, style)?,
                ChartKind::Pie => {
                    let sizes = pie::pie_sizes(rng, colors.len());
                    pie::draw_pie_cell(cell, &cell_title, colors, &sizes, style)?
                }
            }
        }

        // To avoid the drawing failure being ignored silently, we manually call the present function
        root.present()?;
    }

    let canvas =
        RgbImage::from_raw(width, height, buffer).ok_or(PaletteError::ImageBuffer { width, height })?;
    Ok(canvas)
}
