use plotters::style::RGBColor;

use crate::core::{error::PaletteError, palette::NamedPalette};

/// Figure background; translucent palette colors are composited over it.
pub const BACKGROUND: RGBColor = RGBColor(255, 255, 255);

// Single-letter shorthands accepted by most plotting tools.
const SHORTHAND_COLORS: [(&str, RGBColor); 8] = [
    ("b", RGBColor(0, 0, 255)),
    ("g", RGBColor(0, 128, 0)),
    ("r", RGBColor(255, 0, 0)),
    ("c", RGBColor(0, 191, 191)),
    ("m", RGBColor(191, 0, 191)),
    ("y", RGBColor(191, 191, 0)),
    ("k", RGBColor(0, 0, 0)),
    ("w", RGBColor(255, 255, 255)),
];

const TABLEAU_COLORS: [(&str, RGBColor); 10] = [
    ("tab:blue", RGBColor(0x1f, 0x77, 0xb4)),
    ("tab:orange", RGBColor(0xff, 0x7f, 0x0e)),
    ("tab:green", RGBColor(0x2c, 0xa0, 0x2c)),
    ("tab:red", RGBColor(0xd6, 0x27, 0x28)),
    ("tab:purple", RGBColor(0x94, 0x67, 0xbd)),
    ("tab:brown", RGBColor(0x8c, 0x56, 0x4b)),
    ("tab:pink", RGBColor(0xe3, 0x77, 0xc2)),
    ("tab:gray", RGBColor(0x7f, 0x7f, 0x7f)),
    ("tab:olive", RGBColor(0xbc, 0xbd, 0x22)),
    ("tab:cyan", RGBColor(0x17, 0xbe, 0xcf)),
];

fn lookup(table: &[(&str, RGBColor)], name: &str) -> Option<RGBColor> {
    table
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, color)| *color)
}

/**
 * Parses a single color string. Anything `csscolorparser` understands is
 * accepted (hex, CSS names, `rgb()`, `hsl()`, ...), plus the shorthand and
 * `tab:` names above. The alpha channel is blended over `BACKGROUND`.
 */
pub fn parse_color(value: &str) -> Option<RGBColor> {
    let trimmed = value.trim();
    let lowered = trimmed.to_ascii_lowercase();
    if let Some(color) =
        lookup(&SHORTHAND_COLORS, trimmed).or_else(|| lookup(&TABLEAU_COLORS, &lowered))
    {
        return Some(color);
    }

    let [r, g, b, a] = csscolorparser::parse(trimmed).ok()?.to_rgba8();
    Some(blend_over_background([r, g, b], a))
}

fn blend_over_background(rgb: [u8; 3], alpha: u8) -> RGBColor {
    let weight = alpha as f32 / 255.0;
    let background = [BACKGROUND.0, BACKGROUND.1, BACKGROUND.2];
    let mix = |channel: usize| -> u8 {
        (rgb[channel] as f32 * weight + background[channel] as f32 * (1.0 - weight)).round() as u8
    };
    RGBColor(mix(0), mix(1), mix(2))
}

/// Resolves every color of a palette, failing on the first one that cannot be drawn.
pub fn resolve_palette_colors(entry: &NamedPalette) -> Result<Vec<RGBColor>, PaletteError> {
    entry
        .palette
        .colors()
        .into_iter()
        .map(|color| {
            parse_color(color).ok_or_else(|| PaletteError::InvalidColor {
                palette: entry.name.clone(),
                color: color.to_owned(),
            })
        })
        .collect()
}
