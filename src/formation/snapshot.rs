use crate::formation::particles::{ParticleSet, generate_foliage, generate_lights};
use crate::formation::photos::{PhotoEntry, layout_photos};
use crate::foundation::core::Vec3;
use crate::foundation::error::{EngineError, EngineResult};
use crate::foundation::rng::SeededRng;
use crate::scene::config::{EngineConfig, TextConfig};
use crate::text::font::ResolvedFont;
use crate::text::layout::TextLayoutEngine;
use crate::text::raster::{GlyphMask, rasterize_centered};
use crate::text::sampler::{CandidatePool, SilhouetteMapping, sample_silhouette};

/// Where the foliage text formation came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextSource {
    /// Text formation switched off in the configuration.
    Disabled,
    /// Sampled from a rendered string.
    Silhouette {
        /// Font family used for rendering.
        family: String,
        /// Foreground pixels found by the scan.
        candidates: usize,
    },
    /// Rendering failed or produced nothing; text targets are the tree positions.
    TreeFallback {
        /// Human-readable cause, also logged at startup.
        reason: String,
    },
}

/// Every precomputed formation, built once at startup and read by the blend driver.
#[derive(Clone, Debug, PartialEq)]
pub struct FormationSnapshot {
    /// Dense point cloud.
    pub foliage: ParticleSet,
    /// Instanced point lights (no text formation).
    pub lights: ParticleSet,
    /// Photo billboards in manifest order.
    pub photos: Vec<PhotoEntry>,
    /// Provenance of `foliage.text`.
    pub text_source: TextSource,
}

impl FormationSnapshot {
    /// Validate `cfg`, lay out every group and render the text silhouette.
    ///
    /// Font or raster trouble never fails the build: the foliage keeps its tree positions as
    /// text targets and the cause is recorded in [`FormationSnapshot::text_source`].
    #[tracing::instrument(skip_all, fields(foliage = cfg.foliage.count, lights = cfg.lights.count))]
    pub fn build(cfg: &EngineConfig) -> EngineResult<Self> {
        let mut snapshot = Self::layout(cfg)?;

        if let Some(text) = &cfg.text {
            let rendered = render_silhouette(text, snapshot.foliage.len(), cfg.text_seed);
            snapshot.text_source = match rendered {
                Ok((positions, family, candidates)) => {
                    snapshot.foliage.attach_text(positions)?;
                    TextSource::Silhouette { family, candidates }
                }
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        text = %text.text,
                        "text formation falls back to tree"
                    );
                    TextSource::TreeFallback {
                        reason: err.to_string(),
                    }
                }
            };
        }

        tracing::info!(
            foliage = snapshot.foliage.len(),
            lights = snapshot.lights.len(),
            photos = snapshot.photos.len(),
            text = ?snapshot.text_source,
            "formation snapshot ready"
        );
        Ok(snapshot)
    }

    /// Validate `cfg` and lay out foliage, lights and photos without touching fonts.
    ///
    /// All three groups share one generator in that order, so each group's layout depends on
    /// the counts of the groups before it.
    pub fn layout(cfg: &EngineConfig) -> EngineResult<Self> {
        cfg.validate()?;
        let mut rng = SeededRng::new(cfg.layout_seed);
        let foliage = generate_foliage(&cfg.foliage, &mut rng);
        let lights = generate_lights(&cfg.lights, &mut rng);
        let photos = layout_photos(&cfg.photos, &mut rng)?;
        tracing::debug!(
            foliage = foliage.len(),
            lights = lights.len(),
            photos = photos.len(),
            "laid out formations"
        );
        Ok(Self {
            foliage,
            lights,
            photos,
            text_source: TextSource::Disabled,
        })
    }

    /// Polyline through the photo spiral, oldest first.
    pub fn photo_guide(&self) -> Vec<Vec3> {
        self.photos.iter().map(|p| p.tree_position).collect()
    }
}

/// Sample `count` text positions from an already rendered mask.
///
/// A mask with no foreground pixels is an error here so callers can fall back to the tree.
pub fn silhouette_from_mask(
    mask: &GlyphMask,
    cfg: &TextConfig,
    count: usize,
    seed: i32,
) -> EngineResult<(Vec<Vec3>, usize)> {
    let pool = CandidatePool::scan(mask, cfg.stride, cfg.threshold);
    if pool.is_empty() {
        return Err(EngineError::raster(format!(
            "'{}' rendered no foreground pixels",
            cfg.text
        )));
    }
    let mapping = SilhouetteMapping {
        radius: cfg.radius,
        lift: cfg.lift,
        depth: cfg.depth,
    };
    let mut rng = SeededRng::new(seed);
    let positions = sample_silhouette(&pool, count, &mapping, &mut rng);
    Ok((positions, pool.len()))
}

/// Resolve the configured font and render `cfg.text` into a coverage mask.
pub fn render_mask(cfg: &TextConfig) -> EngineResult<(GlyphMask, ResolvedFont)> {
    let font = ResolvedFont::resolve(cfg.font_path.as_deref(), &cfg.families)?;
    let mut engine = TextLayoutEngine::new();
    let mask = rasterize_centered(
        &mut engine,
        &cfg.text,
        &font,
        cfg.size_px,
        cfg.canvas_width,
        cfg.canvas_height,
    )?;
    Ok((mask, font))
}

fn render_silhouette(
    cfg: &TextConfig,
    count: usize,
    seed: i32,
) -> EngineResult<(Vec<Vec3>, String, usize)> {
    let (mask, font) = render_mask(cfg)?;
    let (positions, candidates) = silhouette_from_mask(&mask, cfg, count, seed)?;
    Ok((positions, font.family, candidates))
}

#[cfg(test)]
#[path = "../../tests/unit/formation/snapshot.rs"]
mod tests;
