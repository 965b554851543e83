use clap::Parser;
use palette_preview::cli::{
    args::{CommandsEnum, PalettePreviewArgs},
    normalize::normalize_palettes_in_place,
    preview::{generate_batched_previews, generate_combined_previews},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: PalettePreviewArgs = PalettePreviewArgs::parse();

    match &args.command {
        Some(CommandsEnum::Preview(params)) => {
            generate_batched_previews(&params.palette_path)?;
        }
        Some(CommandsEnum::PreviewAll(params)) => {
            generate_combined_previews(&params.palette_path)?;
        }
        Some(CommandsEnum::Normalize(params)) => {
            normalize_palettes_in_place(&params.palette_path)?;
        }
        None => {
            println!("Default command (nothing specified!)");
        }
    }
    Ok(())
}
