use crate::foundation::error::{EngineError, EngineResult};
use crate::text::font::ResolvedFont;
use crate::text::layout::TextLayoutEngine;

/// Off-screen single-channel coverage bitmap, row-major, `0` = background.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphMask {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// One byte per pixel.
    pub coverage: Vec<u8>,
}

impl GlyphMask {
    /// Blank mask of the given size.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            coverage: vec![0; width as usize * height as usize],
        }
    }

    /// Coverage at `(x, y)`; out-of-bounds reads as background.
    pub fn at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.coverage[(y * self.width + x) as usize]
    }

    /// Number of pixels with non-zero coverage.
    pub fn lit_pixels(&self) -> usize {
        self.coverage.iter().filter(|&&c| c > 0).count()
    }
}

/// Render `text` centered on a `width × height` surface, white on black, and keep the red
/// channel as coverage.
#[tracing::instrument(skip(font, engine), fields(family = %font.family))]
pub fn rasterize_centered(
    engine: &mut TextLayoutEngine,
    text: &str,
    font: &ResolvedFont,
    size_px: f32,
    width: u32,
    height: u32,
) -> EngineResult<GlyphMask> {
    let w: u16 = width
        .try_into()
        .map_err(|_| EngineError::raster(format!("surface width exceeds u16: {width}")))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| EngineError::raster(format!("surface height exceeds u16: {height}")))?;
    if w == 0 || h == 0 {
        return Err(EngineError::raster("surface must be non-empty"));
    }

    let layout = engine.layout_bold_line(text, font.data.as_slice(), font.index, size_px)?;

    // Center the line box on the surface, matching a middle baseline with centered alignment.
    let dx = (f64::from(width) - f64::from(layout.width())) * 0.5;
    let dy = (f64::from(height) - f64::from(layout.height())) * 0.5;

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((dx, dy)));
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            // Glyph ids belong to the face the run was shaped with.
            ctx.glyph_run(run.run().font())
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    // Premultiplied white over transparent: red equals coverage, same as white over black.
    let coverage = pixmap
        .data_as_u8_slice()
        .chunks_exact(4)
        .map(|px| px[0])
        .collect::<Vec<_>>();

    let mask = GlyphMask {
        width,
        height,
        coverage,
    };
    tracing::debug!(lit = mask.lit_pixels(), "rasterized text silhouette");
    Ok(mask)
}

#[cfg(test)]
#[path = "../../tests/unit/text/raster.rs"]
mod tests;
