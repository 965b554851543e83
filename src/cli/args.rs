use clap::{Args, Parser, Subcommand};

/// Palette file read by the preview generators when none is given.
pub const DEFAULT_PALETTE_FILE: &str = "color_ggsci.json";

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct PalettePreviewArgs {
    #[command(subcommand)]
    pub command: Option<CommandsEnum>,
}

#[derive(Debug, Subcommand)]
pub enum CommandsEnum {
    /// Render bar, line, and pie previews in batches, under `previews/<palette-file-stem>/`.
    Preview(PaletteFilePath),
    /// Render every palette into one bar, one line, and one pie preview under `previews/`.
    PreviewAll(PaletteFilePath),
    /// Rewrite keyed palettes as plain color lists. Overwrites the file in place.
    Normalize(RequiredPaletteFilePath),
}

#[derive(Debug, Args)]
pub struct PaletteFilePath {
    #[arg(default_value = DEFAULT_PALETTE_FILE)]
    pub palette_path: String,
}

#[derive(Debug, Args)]
pub struct RequiredPaletteFilePath {
    pub palette_path: String,
}
