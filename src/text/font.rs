use std::path::Path;
use std::sync::Arc;

use crate::foundation::error::{EngineError, EngineResult};

/// Font face bytes selected for the text silhouette.
#[derive(Clone, Debug)]
pub struct ResolvedFont {
    /// Family name reported by the font database, or the file stem for bundled fonts.
    pub family: String,
    /// Raw font file bytes (may be a collection).
    pub data: Arc<Vec<u8>>,
    /// Face index inside `data`.
    pub index: u32,
}

impl ResolvedFont {
    /// Load a bundled font file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|e| EngineError::font(format!("read font '{}': {e}", path.display())))?;
        if data.is_empty() {
            return Err(EngineError::font(format!(
                "font file '{}' is empty",
                path.display()
            )));
        }
        let family = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "bundled".to_owned());
        Ok(Self {
            family,
            data: Arc::new(data),
            index: 0,
        })
    }

    /// Bundled file when given, otherwise the system lookup over `families`.
    pub fn resolve(font_path: Option<&Path>, families: &[String]) -> EngineResult<Self> {
        match font_path {
            Some(path) => Self::from_path(path),
            None => Self::system_bold(families),
        }
    }

    /// Pick a bold face from the system font database.
    ///
    /// Lookup order: `families`, the generic sans-serif family, a few widely installed sans
    /// families, then the installed face closest to bold.
    #[tracing::instrument(skip_all, fields(requested = families.len()))]
    pub fn system_bold(families: &[String]) -> EngineResult<Self> {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system font database");
        Self::bold_from_db(&db, families)
    }

    pub(crate) fn bold_from_db(
        db: &usvg::fontdb::Database,
        families: &[String],
    ) -> EngineResult<Self> {
        let mut query_families = families
            .iter()
            .map(|f| usvg::fontdb::Family::Name(f.as_str()))
            .collect::<Vec<_>>();
        query_families.push(usvg::fontdb::Family::SansSerif);
        query_families.extend(
            COMMON_SANS_FAMILIES
                .iter()
                .map(|f| usvg::fontdb::Family::Name(*f)),
        );

        let query = usvg::fontdb::Query {
            families: &query_families,
            weight: usvg::fontdb::Weight::BOLD,
            stretch: usvg::fontdb::Stretch::Normal,
            style: usvg::fontdb::Style::Normal,
        };

        let id = db
            .query(&query)
            .or_else(|| boldest_face(db))
            .ok_or_else(|| EngineError::font("no system fonts available"))?;

        let face = db
            .face(id)
            .ok_or_else(|| EngineError::font("resolved face vanished from the font database"))?;
        let family = face
            .families
            .first()
            .map(|(name, _)| name.clone())
            .unwrap_or_default();
        tracing::debug!(
            family = %family,
            weight = face.weight.0,
            index = face.index,
            "resolved text font"
        );

        let (data, index) = db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(|| EngineError::font(format!("face data for '{family}' is unavailable")))?;

        Ok(Self {
            family,
            data: Arc::new(data),
            index,
        })
    }
}

// fontdb maps the generic sans-serif family to Arial, which many Linux systems lack.
const COMMON_SANS_FAMILIES: &[&str] = &["DejaVu Sans", "Liberation Sans", "Noto Sans"];

// Prefer faces at or above bold (closest to bold first), then heavier faces, then upright
// ones. The first loaded face wins among equals.
fn boldest_face(db: &usvg::fontdb::Database) -> Option<usvg::fontdb::ID> {
    let bold = usvg::fontdb::Weight::BOLD.0;
    let rank = |f: &usvg::fontdb::FaceInfo| {
        let w = f.weight.0;
        let closeness = if w >= bold { u16::MAX - (w - bold) } else { w };
        (w >= bold, closeness, f.style == usvg::fontdb::Style::Normal)
    };
    let mut best: Option<&usvg::fontdb::FaceInfo> = None;
    for face in db.faces() {
        if best.is_none_or(|b| rank(face) > rank(b)) {
            best = Some(face);
        }
    }
    best.map(|f| f.id)
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
