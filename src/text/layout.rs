use crate::foundation::error::{EngineError, EngineResult};

/// Brush carried through Parley layouts; the silhouette only needs coverage, so a single
/// luminance channel is enough.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ink(pub u8);

/// Stateful helper for building Parley text layouts from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Ink>,
    last_family: Option<String>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            last_family: None,
        }
    }

    /// Family name registered by the most recent successful layout.
    pub fn last_family_name(&self) -> Option<&str> {
        self.last_family.as_deref()
    }

    /// Shape and lay out a single unwrapped line of bold text.
    ///
    /// `face_index` selects the family inside a font collection; single-face files use `0`.
    pub fn layout_bold_line(
        &mut self,
        text: &str,
        font_bytes: &[u8],
        face_index: u32,
        size_px: f32,
    ) -> EngineResult<parley::Layout<Ink>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(EngineError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .iter()
            .find(|(_, fonts)| fonts.iter().any(|f| f.index() == face_index))
            .or_else(|| families.first())
            .map(|(id, _)| *id)
            .ok_or_else(|| EngineError::font("no font families registered from font bytes"))?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| EngineError::font("registered font family has no name"))?
            .to_string();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::BOLD,
        ));
        builder.push_default(parley::style::StyleProperty::Brush(Ink(255)));

        let mut layout: parley::Layout<Ink> = builder.build(text);
        layout.break_all_lines(None);

        self.last_family = Some(family_name);
        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;
