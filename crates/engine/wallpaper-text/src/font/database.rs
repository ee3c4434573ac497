//! Font database for loading and matching fonts

use fontdb::Database;
use super::{FontId, FontQuery, resolve_generic_family};
use crate::{Result, TextError};

/// Font database for loading and matching fonts
pub struct FontDatabase {
    db: Database,
}

impl FontDatabase {
    /// Create a new empty font database
    pub fn new() -> Self {
        Self {
            db: Database::new(),
        }
    }

    /// Create a font database with system fonts loaded
    pub fn with_system_fonts() -> Self {
        let mut db = Self::new();
        db.load_system_fonts();
        db
    }

    /// Load system fonts into the database
    pub fn load_system_fonts(&mut self) {
        self.db.load_system_fonts();
        tracing::debug!(faces = self.db.len(), "loaded system fonts");
    }

    /// Load a font from file
    pub fn load_font_file(&mut self, path: &std::path::Path) -> Result<()> {
        self.db.load_font_file(path)
            .map_err(|e| TextError::FontLoading(format!("{}: {}", path.display(), e)))
    }

    /// Load every font in a directory
    pub fn load_fonts_dir(&mut self, dir: &std::path::Path) {
        self.db.load_fonts_dir(dir);
    }

    /// Find a font matching the query.
    ///
    /// Generic family names (`sans-serif`, `system-ui`, ...) are expanded
    /// into their concrete candidates in place.
    pub fn query(&self, query: &FontQuery) -> Option<FontId> {
        let names: Vec<&str> = query.families
            .iter()
            .flat_map(|family| {
                let generic = resolve_generic_family(family);
                if generic.is_empty() {
                    vec![family.as_str()]
                } else {
                    generic.to_vec()
                }
            })
            .collect();

        let mut families: Vec<fontdb::Family> = names
            .iter()
            .map(|name| fontdb::Family::Name(name))
            .collect();
        families.push(fontdb::Family::SansSerif);

        self.db.query(&fontdb::Query {
            families: &families,
            weight: fontdb::Weight(query.weight.0),
            stretch: fontdb::Stretch::Normal,
            style: query.style.into(),
        }).map(FontId)
    }

    /// Get font data by ID (for shaping and outlines)
    pub fn with_face_data<R>(&self, id: FontId, f: impl FnOnce(&[u8], u32) -> R) -> Option<R> {
        self.db.with_face_data(id.0, f)
    }

    /// Family name of a loaded face
    pub fn family_name(&self, id: FontId) -> Option<&str> {
        self.db.face(id.0)
            .and_then(|info| info.families.first())
            .map(|(name, _)| name.as_str())
    }

    /// Number of loaded fonts
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Check if database is empty
    pub fn is_empty(&self) -> bool {
        self.db.len() == 0
    }
}

impl Default for FontDatabase {
    fn default() -> Self {
        Self::new()
    }
}
