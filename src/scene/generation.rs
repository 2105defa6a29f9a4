use std::sync::Arc;

use crate::animate::driver::{StarVisual, animate_frame, animate_frame_par};
use crate::config::SceneConfig;
use crate::data::dataset::Dataset;
use crate::foundation::core::{Point, Viewport};
use crate::foundation::error::GlyphResult;
use crate::foundation::math::Fnv1a64;
use crate::glyph::geometry::{Glyph, GlyphIndex, Vertex, build_glyph};
use crate::layout::grid::{GridLayout, compute_grid};
use crate::scene::static_scene::{StaticScene, build_static_scene};

/// One complete, immutable snapshot: layout, centres, glyphs, flat vertex list and static scene.
///
/// A generation is valid until the next viewport change, at which point it is replaced wholesale.
#[derive(Clone, Debug)]
pub struct Generation {
    epoch: u64,
    viewport: Viewport,
    config: SceneConfig,
    layout: GridLayout,
    centers: Vec<Point>,
    glyphs: Vec<Glyph>,
    vertices: Vec<Vertex>,
    static_scene: StaticScene,
    fingerprint: u64,
}

impl Generation {
    /// Lay out `dataset` for `viewport` and build every derived artefact.
    #[tracing::instrument(skip(dataset, config), fields(rows = dataset.len()))]
    pub fn build(
        dataset: &Dataset,
        viewport: Viewport,
        config: &SceneConfig,
        epoch: u64,
    ) -> GlyphResult<Self> {
        config.validate()?;
        let (layout, centers) = compute_grid(viewport.width, dataset.len(), &config.grid)?;

        let total_vertices = dataset.rows().iter().map(Vec::len).sum();
        let mut vertices = Vec::<Vertex>::with_capacity(total_vertices);
        let mut glyphs = Vec::<Glyph>::with_capacity(dataset.len());

        for (idx, (row, &center)) in dataset.rows().iter().zip(&centers).enumerate() {
            let index = GlyphIndex(idx);
            let geom = build_glyph(index, row, config.grid.max_radius())?;
            let start = vertices.len();
            vertices.extend(geom.vertices);
            glyphs.push(Glyph {
                index,
                center,
                scale: geom.scale,
                vertices: start..vertices.len(),
                outline: geom.outline,
            });
        }

        let static_scene = build_static_scene(&layout, &glyphs, &config.palette);
        let fingerprint = geometry_fingerprint(&layout, &centers, &vertices);

        tracing::debug!(
            epoch,
            glyphs = glyphs.len(),
            vertices = vertices.len(),
            "built generation"
        );

        Ok(Self {
            epoch,
            viewport,
            config: config.clone(),
            layout,
            centers,
            glyphs,
            vertices,
            static_scene,
            fingerprint,
        })
    }

    /// Monotonic build counter; renderers key cached layers on it.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Viewport this generation was laid out for.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Grid layout.
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// One centre per row, indexed by [`GlyphIndex`].
    pub fn centers(&self) -> &[Point] {
        &self.centers
    }

    /// Laid-out glyphs in row order.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Flat list of every vertex, grouped by glyph in row order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertices of one glyph.
    pub fn glyph_vertices(&self, glyph: &Glyph) -> &[Vertex] {
        &self.vertices[glyph.vertices.clone()]
    }

    /// Cached background/outline layer description.
    pub fn static_scene(&self) -> &StaticScene {
        &self.static_scene
    }

    /// Star state of every vertex at `elapsed_ms`.
    pub fn stars_at(&self, elapsed_ms: f64) -> Vec<StarVisual> {
        animate_frame(&self.vertices, &self.centers, elapsed_ms, &self.config)
    }

    /// Parallel variant of [`Generation::stars_at`]; identical output.
    pub fn stars_at_par(&self, elapsed_ms: f64) -> Vec<StarVisual> {
        animate_frame_par(&self.vertices, &self.centers, elapsed_ms, &self.config)
    }

    /// Stable hash of the geometry (layout numbers, centres, vertex offsets), computed at build.
    ///
    /// The epoch is not part of the hash, so two builds from identical inputs compare equal.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}

fn geometry_fingerprint(layout: &GridLayout, centers: &[Point], vertices: &[Vertex]) -> u64 {
    let mut h = Fnv1a64::new_default();
    for v in [
        layout.canvas_width,
        layout.canvas_height,
        layout.outer_padding_x,
        layout.outer_padding_y,
        layout.padding,
        layout.diameter,
    ] {
        h.write_f64(v);
    }
    h.write_u64(layout.columns as u64);
    h.write_u64(layout.rows as u64);
    for c in centers {
        h.write_f64(c.x);
        h.write_f64(c.y);
    }
    for v in vertices {
        h.write_u64(v.glyph.0 as u64);
        h.write_f64(v.offset.x);
        h.write_f64(v.offset.y);
        h.write_f64(v.value);
        h.write_f64(v.scale);
    }
    h.finish()
}

/// Host-facing owner of the dataset and the current generation.
///
/// Every resize rebuilds a complete generation and swaps it in; callers holding the previous
/// `Arc<Generation>` keep a consistent snapshot until they drop it.
#[derive(Debug)]
pub struct Starfield {
    dataset: Dataset,
    config: SceneConfig,
    current: Arc<Generation>,
    next_epoch: u64,
}

impl Starfield {
    /// Build the first generation for `viewport`.
    pub fn new(dataset: Dataset, viewport: Viewport, config: SceneConfig) -> GlyphResult<Self> {
        let current = Arc::new(Generation::build(&dataset, viewport, &config, 0)?);
        Ok(Self {
            dataset,
            config,
            current,
            next_epoch: 1,
        })
    }

    /// Rebuild everything for a new viewport and swap it in.
    ///
    /// On error the previous generation stays current.
    pub fn resize(&mut self, viewport: Viewport) -> GlyphResult<Arc<Generation>> {
        let next = Arc::new(Generation::build(
            &self.dataset,
            viewport,
            &self.config,
            self.next_epoch,
        )?);
        self.next_epoch += 1;
        self.current = Arc::clone(&next);
        Ok(next)
    }

    /// The current generation.
    pub fn current(&self) -> Arc<Generation> {
        Arc::clone(&self.current)
    }

    /// Dataset being visualized.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

}

#[cfg(test)]
#[path = "../../tests/unit/scene/generation.rs"]
mod tests;
