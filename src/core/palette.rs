use std::path::Path;

use indexmap::IndexMap;
use more_asserts::assert_gt;
use serde::{Deserialize, Serialize};

use crate::core::error::PaletteError;

/**
 * A single palette, as stored in the palette file. Older palette files store
 * some palettes keyed by color name; the colors are always read in key order.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Palette {
    Colors(Vec<String>),
    Keyed(IndexMap<String, String>),
}

impl Palette {
    pub fn colors(&self) -> Vec<&str> {
        match self {
            Palette::Colors(colors) => colors.iter().map(String::as_str).collect(),
            Palette::Keyed(colors) => colors.values().map(String::as_str).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Palette::Colors(colors) => colors.len(),
            Palette::Keyed(colors) => colors.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedPalette {
    pub name: String,
    pub palette: Palette,
}

/**
 * Every palette from one palette file, in the order they appear in the file.
 * Loaded once at the start of a run and then only read.
 */
#[derive(Debug, Clone, Default)]
pub struct PaletteSet {
    entries: Vec<NamedPalette>,
}

/// Consecutive run of palettes rendered into a single figure. `index` is 1-based.
#[derive(Debug, Clone, Copy)]
pub struct Batch<'a> {
    pub index: usize,
    pub palettes: &'a [NamedPalette],
}

impl PaletteSet {
    pub fn from_json_str(json: &str) -> Result<PaletteSet, PaletteError> {
        let raw: IndexMap<String, Palette> = serde_json::from_str(json)?;
        Ok(raw.into_iter().collect())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<PaletteSet, PaletteError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|err| PaletteError::io(path, err))?;
        PaletteSet::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamedPalette> {
        self.entries.iter()
    }

    /**
     * Splits the palettes into consecutive batches of `batch_size`; the last
     * batch holds the remainder. An empty set yields no batches.
     */
    pub fn batches(&self, batch_size: usize) -> impl Iterator<Item = Batch<'_>> {
        assert_gt!(batch_size, 0);
        self.entries
            .chunks(batch_size)
            .enumerate()
            .map(|(i, palettes)| Batch {
                index: i + 1,
                palettes,
            })
    }

    /// The whole set as a single batch, or nothing if the set is empty.
    pub fn single_batch(&self) -> Option<Batch<'_>> {
        if self.entries.is_empty() {
            None
        } else {
            Some(Batch {
                index: 1,
                palettes: &self.entries,
            })
        }
    }
}

impl std::iter::FromIterator<(String, Palette)> for PaletteSet {
    fn from_iter<I: IntoIterator<Item = (String, Palette)>>(iter: I) -> Self {
        PaletteSet {
            entries: iter
                .into_iter()
                .map(|(name, palette)| NamedPalette { name, palette })
                .collect(),
        }
    }
}

/// Number of batches `batches(batch_size)` yields for `palette_count` palettes.
pub fn batch_count(palette_count: usize, batch_size: usize) -> usize {
    assert_gt!(batch_size, 0);
    (palette_count + batch_size - 1) / batch_size
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors_of<'a>(set: &'a PaletteSet, name: &str) -> Vec<&'a str> {
        set.iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.palette.colors())
            .unwrap()
    }

    fn numbered_set(count: usize) -> PaletteSet {
        (0..count)
            .map(|i| (format!("p{}", i), Palette::Colors(vec!["#000000".to_owned()])))
            .collect()
    }

    #[test]
    fn test_parse_both_palette_forms() {
        let set = PaletteSet::from_json_str(
            r##"{"zeta": ["#111", "#222"], "alpha": {"b": "#fff", "a": "#000"}}"##,
        )
        .unwrap();

        let names: Vec<&str> = set.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(colors_of(&set, "zeta"), vec!["#111", "#222"]);
        // Key order from the file, not sorted order.
        assert_eq!(colors_of(&set, "alpha"), vec!["#fff", "#000"]);
    }

    #[test]
    fn test_top_level_must_be_object() {
        assert!(PaletteSet::from_json_str(r##"["#111"]"##).is_err());
        assert!(PaletteSet::from_json_str("not json").is_err());
    }

    #[test]
    fn test_batches_split_in_order() {
        let set = numbered_set(12);
        let batches: Vec<Batch> = set.batches(5).collect();

        assert_eq!(batches.len(), 3);
        assert_eq!(
            batches.iter().map(|b| b.palettes.len()).collect::<Vec<_>>(),
            vec![5, 5, 2]
        );
        assert_eq!(
            batches.iter().map(|b| b.index).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(batches[2].palettes[0].name, "p10");
    }

    #[test]
    fn test_batch_count_matches_batches() {
        for count in [0, 1, 99, 100, 101, 200, 250] {
            let set = numbered_set(count);
            for batch_size in [100, 200] {
                assert_eq!(
                    set.batches(batch_size).count(),
                    batch_count(count, batch_size)
                );
            }
        }
        assert_eq!(batch_count(250, 100), 3);
        assert_eq!(batch_count(0, 100), 0);
    }

    #[test]
    fn test_single_batch() {
        assert!(PaletteSet::default().single_batch().is_none());

        let set = numbered_set(7);
        let batch = set.single_batch().unwrap();
        assert_eq!(batch.index, 1);
        assert_eq!(batch.palettes.len(), 7);
    }

    #[test]
    #[should_panic]
    fn test_zero_batch_size() {
        let _ = numbered_set(3).batches(0);
    }
}
