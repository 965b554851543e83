use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::error::PaletteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeReport {
    pub palette_count: usize,
    pub converted_count: usize,
}

/**
 * Replaces every keyed palette (a JSON object) with the list of its values in
 * key order. Lists, and anything else that is not an object, are left as is.
 * @return: the number of palettes that were converted.
 */
pub fn normalize_palettes(palettes: &mut Map<String, Value>) -> usize {
    let mut converted_count = 0;
    for palette in palettes.values_mut() {
        if let Value::Object(keyed_colors) = palette {
            let colors: Vec<Value> = std::mem::take(keyed_colors)
                .into_iter()
                .map(|(_, color)| color)
                .collect();
            *palette = Value::Array(colors);
            converted_count += 1;
        }
    }
    converted_count
}

/// Pretty-prints with a two-space indent.
pub fn to_palette_json(palettes: &Map<String, Value>) -> Result<Vec<u8>, PaletteError> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"  ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    palettes.serialize(&mut serializer)?;
    Ok(buffer)
}

/**
 * Rewrites the palette file at `path` in place. The new contents are fully
 * serialized before the file is truncated. There is no backup.
 */
pub fn normalize_palette_file(path: &Path) -> Result<NormalizeReport, PaletteError> {
    let json = std::fs::read_to_string(path).map_err(|err| PaletteError::io(path, err))?;
    let mut palettes = match serde_json::from_str::<Value>(&json)? {
        Value::Object(palettes) => palettes,
        _ => return Err(PaletteError::NotAnObject),
    };

    let converted_count = normalize_palettes(&mut palettes);
    let output = to_palette_json(&palettes)?;
    std::fs::write(path, output).map_err(|err| PaletteError::io(path, err))?;

    Ok(NormalizeReport {
        palette_count: palettes.len(),
        converted_count,
    })
}
