use std::path::{Path, PathBuf};

use crate::core::error::PaletteError;

/// All preview images are written below this directory.
pub const PREVIEW_ROOT: &str = "previews";

pub fn extract_base_name(path: &Path) -> Result<&str, PaletteError> {
    path.file_stem() // Get the base name component of the path
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            PaletteError::io(
                path,
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "unable to extract base name",
                ),
            )
        })
}

pub fn create_output_directory(directory_path: PathBuf) -> Result<PathBuf, PaletteError> {
    std::fs::create_dir_all(&directory_path)
        .map_err(|err| PaletteError::io(&directory_path, err))?;
    Ok(directory_path)
}

/**
 * Store a path and prefix together, making it easy to generate a collection
 * of files with the same prefix, but separate suffixes.
 */
#[derive(Debug, Clone)]
pub struct FilePrefix {
    pub directory_path: PathBuf,
    pub file_base: String,
}

impl FilePrefix {
    /// `<root>/<palette-file-stem>/`, files named only by their suffix.
    pub fn batched(root: &Path, palette_path: &Path) -> Result<FilePrefix, PaletteError> {
        Ok(FilePrefix {
            directory_path: root.join(extract_base_name(palette_path)?),
            file_base: String::new(),
        })
    }

    /// `<root>/all_palettes_<suffix>`
    pub fn combined(root: &Path) -> FilePrefix {
        FilePrefix {
            directory_path: root.to_path_buf(),
            file_base: "all_palettes_".to_owned(),
        }
    }

    pub fn with_suffix(&self, suffix: &str) -> PathBuf {
        self.directory_path.join(self.file_base.clone() + suffix)
    }

    pub fn create_directory(&self) -> Result<(), PaletteError> {
        create_output_directory(self.directory_path.clone()).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_base_name() {
        assert_eq!(
            extract_base_name(Path::new("color_ggsci.json")).unwrap(),
            "color_ggsci"
        );
        assert_eq!(
            extract_base_name(Path::new("/data/palettes/brewer.v2.json")).unwrap(),
            "brewer.v2"
        );
        assert!(extract_base_name(Path::new("/")).is_err());
    }

    #[test]
    fn test_batched_prefix() {
        let prefix =
            FilePrefix::batched(Path::new(PREVIEW_ROOT), Path::new("color_ggsci.json")).unwrap();
        assert_eq!(
            prefix.with_suffix("bar_1.png"),
            PathBuf::from("previews/color_ggsci/bar_1.png")
        );
    }

    #[test]
    fn test_combined_prefix() {
        let prefix = FilePrefix::combined(Path::new(PREVIEW_ROOT));
        assert_eq!(
            prefix.with_suffix("pie.png"),
            PathBuf::from("previews/all_palettes_pie.png")
        );
    }
}
