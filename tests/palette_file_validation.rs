#[cfg(test)]
mod tests {
    use glob::glob;
    use palette_preview::core::{color::resolve_palette_colors, palette::PaletteSet};

    /// Every palette file shipped with the crate must load, and every color in
    /// it must be drawable.
    #[test]
    fn test_ensure_all_palette_files_can_be_rendered() {
        let mut file_count = 0;
        for entry in glob("*.json").expect("Failed to read glob pattern") {
            let path = entry.unwrap_or_else(|e| panic!("Failed to read path: {:?}", e));
            let palettes = PaletteSet::load(&path)
                .unwrap_or_else(|e| panic!("Failed to load palette file {:?}: {}", path, e));

            assert!(!palettes.is_empty(), "{:?} has no palettes", path);
            for entry in palettes.iter() {
                if let Err(err) = resolve_palette_colors(entry) {
                    panic!("{:?}: {}", path, err);
                }
            }
            file_count += 1;
        }
        assert!(file_count > 0, "no palette files found");
    }
}
