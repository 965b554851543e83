use std::path::Path;

use crate::charts::{
    figure::FigureStyle,
    preview::{render_previews, PreviewJob, PreviewSummary},
};
use crate::core::{file_io::PREVIEW_ROOT, palette::PaletteSet};

fn print_summary(summary: &PreviewSummary, output_directory: &Path) {
    println!(
        "\nAll previews generated successfully in '{}'!",
        output_directory.display()
    );
    println!("Total palettes: {}", summary.palette_count);
    println!("Total images: {}", summary.image_paths.len());
}

fn generate_previews(
    palette_path: &str,
    job: PreviewJob,
) -> Result<PreviewSummary, Box<dyn std::error::Error>> {
    let palettes = PaletteSet::load(palette_path)?;
    let summary = render_previews(
        &palettes,
        &job,
        &FigureStyle::default(),
        &mut rand::thread_rng(),
    )?;
    print_summary(&summary, &job.file_prefix.directory_path);
    Ok(summary)
}

/// Batched previews: `previews/<palette-file-stem>/{bar,line,pie}_<n>.png`.
pub fn generate_batched_previews(
    palette_path: &str,
) -> Result<PreviewSummary, Box<dyn std::error::Error>> {
    let job = PreviewJob::batched(Path::new(PREVIEW_ROOT), Path::new(palette_path))?;
    generate_previews(palette_path, job)
}

/// One figure per chart kind: `previews/all_palettes_{bar,line,pie}.png`.
pub fn generate_combined_previews(
    palette_path: &str,
) -> Result<PreviewSummary, Box<dyn std::error::Error>> {
    generate_previews(palette_path, PreviewJob::combined(Path::new(PREVIEW_ROOT)))
}
