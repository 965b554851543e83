use std::path::{Path, PathBuf};

use rand::Rng;

use crate::charts::{
    figure::{render_figure, FigureStyle},
    ChartKind,
};
use crate::core::{
    error::PaletteError,
    file_io::FilePrefix,
    image_utils::{save_png_with_dpi, write_image_to_file},
    palette::{batch_count, Batch, PaletteSet},
    stopwatch::Stopwatch,
};

/// How the palette set is divided into figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPolicy {
    /// Fixed-size batches, sized per chart kind; files are numbered by batch.
    PerChartKind,
    /// Every palette in one figure per chart kind.
    WholeSet,
}

/// Where a preview run writes, and how it splits the palettes.
#[derive(Debug, Clone)]
pub struct PreviewJob {
    pub batch_policy: BatchPolicy,
    pub file_prefix: FilePrefix,
}

#[derive(Debug, Clone, Default)]
pub struct PreviewSummary {
    pub palette_count: usize,
    pub image_paths: Vec<PathBuf>,
}

impl PreviewJob {
    /// `<output_root>/<palette-file-stem>/<kind>_<n>.png`
    pub fn batched(output_root: &Path, palette_path: &Path) -> Result<PreviewJob, PaletteError> {
        Ok(PreviewJob {
            batch_policy: BatchPolicy::PerChartKind,
            file_prefix: FilePrefix::batched(output_root, palette_path)?,
        })
    }

    /// `<output_root>/all_palettes_<kind>.png`
    pub fn combined(output_root: &Path) -> PreviewJob {
        PreviewJob {
            batch_policy: BatchPolicy::WholeSet,
            file_prefix: FilePrefix::combined(output_root),
        }
    }

    pub fn batches<'a>(&self, kind: ChartKind, palettes: &'a PaletteSet) -> Vec<Batch<'a>> {
        match self.batch_policy {
            BatchPolicy::PerChartKind => palettes.batches(kind.batch_size()).collect(),
            BatchPolicy::WholeSet => palettes.single_batch().into_iter().collect(),
        }
    }

    /// Number of images one chart kind produces for `palettes`.
    pub fn image_count(&self, kind: ChartKind, palettes: &PaletteSet) -> usize {
        let batch_size = match self.batch_policy {
            BatchPolicy::PerChartKind => kind.batch_size(),
            BatchPolicy::WholeSet => palettes.len().max(1),
        };
        batch_count(palettes.len(), batch_size)
    }

    pub fn figure_title(&self, kind: ChartKind, batch: &Batch) -> String {
        match self.batch_policy {
            BatchPolicy::PerChartKind => {
                format!("{} - Palettes Batch {}", kind.title(), batch.index)
            }
            BatchPolicy::WholeSet => format!("{} - All Palettes", kind.title()),
        }
    }

    pub fn image_path(&self, kind: ChartKind, batch: &Batch) -> PathBuf {
        let suffix = match self.batch_policy {
            BatchPolicy::PerChartKind => format!("{}_{}.png", kind.file_stem(), batch.index),
            BatchPolicy::WholeSet => format!("{}.png", kind.file_stem()),
        };
        self.file_prefix.with_suffix(&suffix)
    }
}

/**
 * Renders every chart kind for every batch of `palettes` and writes one PNG
 * per (kind, batch), overwriting existing files. An empty palette set writes
 * nothing and is not an error.
 */
pub fn render_previews<R: Rng>(
    palettes: &PaletteSet,
    job: &PreviewJob,
    style: &FigureStyle,
    rng: &mut R,
) -> Result<PreviewSummary, Box<dyn std::error::Error>> {
    let image_total = ChartKind::ALL
        .iter()
        .map(|&kind| job.image_count(kind, palettes))
        .sum();
    let mut summary = PreviewSummary {
        palette_count: palettes.len(),
        image_paths: Vec::with_capacity(image_total),
    };

    if palettes.is_empty() {
        println!("WARN:  No palettes to render; no preview images were written.");
        return Ok(summary);
    }

    job.file_prefix.create_directory()?;
    let mut stopwatch = Stopwatch::new("Palette previews");

    for &kind in ChartKind::ALL.iter() {
        println!(
            "INFO:  Generating {} for all palettes...",
            kind.title().to_lowercase()
        );
        let batches = job.batches(kind, palettes);
        debug_assert_eq!(batches.len(), job.image_count(kind, palettes));
        for batch in batches.iter() {
            let image = render_figure(
                kind,
                batch.palettes,
                &job.figure_title(kind, batch),
                style,
                rng,
            )?;
            let path = job.image_path(kind, batch);
            write_image_to_file(&path, |path| save_png_with_dpi(&image, path, style.dpi))?;
            summary.image_paths.push(path);
        }
        stopwatch.record_split(kind.file_stem(), batches.len());
    }

    stopwatch.display(&mut std::io::stdout())?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palette::Palette;

    fn numbered_set(count: usize) -> PaletteSet {
        (0..count)
            .map(|i| (format!("p{}", i), Palette::Colors(vec!["#123456".to_owned()])))
            .collect()
    }

    #[test]
    fn test_batched_job_batches_per_kind() {
        let palettes = numbered_set(250);
        let job = PreviewJob::batched(Path::new("previews"), Path::new("color_ggsci.json")).unwrap();

        assert_eq!(job.batches(ChartKind::Bar, &palettes).len(), 2);
        assert_eq!(job.batches(ChartKind::Line, &palettes).len(), 3);
        assert_eq!(job.batches(ChartKind::Pie, &palettes).len(), 3);
        for &kind in ChartKind::ALL.iter() {
            assert_eq!(
                job.image_count(kind, &palettes),
                job.batches(kind, &palettes).len()
            );
        }
    }

    #[test]
    fn test_batched_job_names() {
        let palettes = numbered_set(150);
        let job = PreviewJob::batched(Path::new("previews"), Path::new("color_ggsci.json")).unwrap();
        let batches = job.batches(ChartKind::Line, &palettes);

        assert_eq!(
            job.figure_title(ChartKind::Line, &batches[1]),
            "Line Charts - Palettes Batch 2"
        );
        assert_eq!(
            job.image_path(ChartKind::Line, &batches[1]),
            PathBuf::from("previews/color_ggsci/line_2.png")
        );
    }

    #[test]
    fn test_combined_job_uses_one_batch() {
        let palettes = numbered_set(450);
        let job = PreviewJob::combined(Path::new("previews"));

        for &kind in ChartKind::ALL.iter() {
            let batches = job.batches(kind, &palettes);
            assert_eq!(batches.len(), 1);
            assert_eq!(batches[0].palettes.len(), 450);
            assert_eq!(job.image_count(kind, &palettes), 1);
            assert_eq!(job.image_count(kind, &PaletteSet::default()), 0);
        }

        let batches = job.batches(ChartKind::Pie, &palettes);
        assert_eq!(
            job.figure_title(ChartKind::Pie, &batches[0]),
            "Pie Charts - All Palettes"
        );
        assert_eq!(
            job.image_path(ChartKind::Pie, &batches[0]),
            PathBuf::from("previews/all_palettes_pie.png")
        );
    }

    #[test]
    fn test_empty_set_writes_nothing() {
        let job = PreviewJob::combined(Path::new("out/tests/never_created"));
        let summary = render_previews(
            &PaletteSet::default(),
            &job,
            &FigureStyle::default(),
            &mut rand::thread_rng(),
        )
        .unwrap();

        assert_eq!(summary.palette_count, 0);
        assert!(summary.image_paths.is_empty());
        assert!(job.batches(ChartKind::Bar, &PaletteSet::default()).is_empty());
    }
}
