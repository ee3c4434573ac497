//! Static font catalog
//!
//! The fonts offered for quotes, tagged with the script they cover and the
//! category they are grouped under in font pickers.

use crate::shaping::{Script, detect_script};

/// Category a catalog font is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontCategory {
    ModernSans,
    ClassicSerif,
    Decorative,
    Modern,
    Traditional,
}

impl FontCategory {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::ModernSans => "Modern Sans",
            Self::ClassicSerif => "Classic Serif",
            Self::Decorative => "Decorative",
            Self::Modern => "Modern",
            Self::Traditional => "Traditional",
        }
    }
}

/// A font offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontCatalogEntry {
    /// Display name
    pub name: &'static str,
    /// Family name used for font matching
    pub family: &'static str,
    /// Script the font is meant for
    pub script: Script,
    pub category: FontCategory,
}

const fn entry(name: &'static str, script: Script, category: FontCategory) -> FontCatalogEntry {
    FontCatalogEntry { name, family: name, script, category }
}

/// Every font the wallpaper generator knows about, in picker order
pub static FONT_CATALOG: [FontCatalogEntry; 13] = [
    entry("Inter", Script::Latin, FontCategory::ModernSans),
    entry("Geist Sans", Script::Latin, FontCategory::ModernSans),
    entry("Poppins", Script::Latin, FontCategory::ModernSans),
    entry("Playfair Display", Script::Latin, FontCategory::ClassicSerif),
    entry("Crimson Text", Script::Latin, FontCategory::ClassicSerif),
    entry("Lora", Script::Latin, FontCategory::ClassicSerif),
    entry("Merriweather", Script::Latin, FontCategory::ClassicSerif),
    entry("Cinzel", Script::Latin, FontCategory::Decorative),
    entry("Old Standard TT", Script::Latin, FontCategory::Decorative),
    entry("Noto Sans Devanagari", Script::Devanagari, FontCategory::Modern),
    entry("Noto Serif Devanagari", Script::Devanagari, FontCategory::Traditional),
    entry("Hind", Script::Devanagari, FontCategory::Modern),
    entry("Kalam", Script::Devanagari, FontCategory::Decorative),
];

/// Look up a catalog font by name or family, falling back to the first entry
pub fn find_font(name: &str) -> &'static FontCatalogEntry {
    FONT_CATALOG
        .iter()
        .find(|f| f.name == name || f.family == name)
        .unwrap_or(&FONT_CATALOG[0])
}

/// Fonts for one script grouped by category, categories in catalog order
pub fn fonts_by_category(script: Script) -> Vec<(FontCategory, Vec<&'static FontCatalogEntry>)> {
    let mut groups: Vec<(FontCategory, Vec<&'static FontCatalogEntry>)> = Vec::new();

    for font in FONT_CATALOG.iter().filter(|f| f.script == script) {
        match groups.iter_mut().find(|(category, _)| *category == font.category) {
            Some((_, fonts)) => fonts.push(font),
            None => groups.push((font.category, vec![font])),
        }
    }

    groups
}

/// Fonts suited to the script detected in `text`
pub fn fonts_for_text(text: &str) -> Vec<(FontCategory, Vec<&'static FontCatalogEntry>)> {
    fonts_by_category(detect_script(text))
}
