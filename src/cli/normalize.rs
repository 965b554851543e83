use std::path::Path;

use crate::core::normalize::{normalize_palette_file, NormalizeReport};

pub fn normalize_palettes_in_place(
    palette_path: &str,
) -> Result<NormalizeReport, Box<dyn std::error::Error>> {
    let report = normalize_palette_file(Path::new(palette_path))?;
    println!(
        "INFO:  Converted {} of {} palettes to color lists in: {}",
        report.converted_count, report.palette_count, palette_path
    );
    Ok(report)
}
