#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use palette_preview::core::{error::PaletteError, normalize::normalize_palette_file};
    use serde_json::{json, Value};
    use sha2::{Digest, Sha256};

    fn build_test_file(name: &str, contents: &str) -> PathBuf {
        let directory_path: PathBuf = ["out", "tests", "normalize"].iter().collect();
        fs::create_dir_all(&directory_path).unwrap();
        let path = directory_path.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn compute_file_hash(path: &Path) -> String {
        let mut hasher = Sha256::new();
        hasher.update(fs::read(path).unwrap());
        format!("{:x}", hasher.finalize())
    }

    #[test]
    fn test_keyed_palettes_become_lists() {
        let path = build_test_file(
            "mixed.json",
            r##"{"A": {"a": "#fff", "b": "#000"}, "B": ["#111", "#222"]}"##,
        );

        let report = normalize_palette_file(&path).unwrap();
        assert_eq!(report.palette_count, 2);
        assert_eq!(report.converted_count, 1);

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, json!({"A": ["#fff", "#000"], "B": ["#111", "#222"]}));
    }

    #[test]
    fn test_written_file_keeps_palette_order_and_indent() {
        let path = build_test_file(
            "ordered.json",
            r##"{"zeta": {"x": "#1"}, "alpha": ["#2"]}"##,
        );

        normalize_palette_file(&path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "{\n  \"zeta\": [\n    \"#1\"\n  ],\n  \"alpha\": [\n    \"#2\"\n  ]\n}"
        );
    }

    #[test]
    fn test_second_run_is_byte_identical() {
        let path = build_test_file(
            "idempotent.json",
            r##"{"npg": {"Cinnabar": "#E64B35", "Shakespeare": "#4DBBD5"}, "jama": ["#374E55"]}"##,
        );

        normalize_palette_file(&path).unwrap();
        let first_hash = compute_file_hash(&path);

        let report = normalize_palette_file(&path).unwrap();
        assert_eq!(report.converted_count, 0);
        assert_eq!(compute_file_hash(&path), first_hash);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path: PathBuf = ["out", "tests", "normalize", "does_not_exist.json"]
            .iter()
            .collect();
        assert!(matches!(
            normalize_palette_file(&path),
            Err(PaletteError::Io { .. })
        ));
    }

    #[test]
    fn test_malformed_input_is_left_untouched() {
        let contents = r##"{"A": ["#fff", "#000""##;
        let path = build_test_file("malformed.json", contents);

        assert!(matches!(
            normalize_palette_file(&path),
            Err(PaletteError::Json(_))
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), contents);
    }

    #[test]
    fn test_top_level_list_is_rejected() {
        let path = build_test_file("list.json", r##"[["#fff"]]"##);
        assert!(matches!(
            normalize_palette_file(&path),
            Err(PaletteError::NotAnObject)
        ));
    }
}
