use crate::config::Palette;
use crate::foundation::color::Rgba8;
use crate::foundation::core::{Affine, BezPath, Rect};
use crate::glyph::geometry::Glyph;
use crate::layout::grid::GridLayout;

/// One draw operation of the cached layer, in canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneOp {
    /// Filled and stroked cell background.
    Cell {
        /// Cell square.
        rect: Rect,
        /// Fill colour.
        fill: Rgba8,
        /// Border colour.
        stroke: Rgba8,
        /// Border width.
        stroke_width: f64,
    },
    /// Unfilled glyph outline.
    Outline {
        /// Closed polyline translated to the glyph centre.
        path: BezPath,
        /// Stroke colour.
        stroke: Rgba8,
        /// Stroke width.
        stroke_width: f64,
    },
}

/// Background, cells and outlines of one generation; built once and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticScene {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Canvas clear colour.
    pub background: Rgba8,
    /// Draw operations in painter's order.
    pub ops: Vec<SceneOp>,
}

/// Compose the static layer: for each glyph its cell, then its outline.
pub fn build_static_scene(layout: &GridLayout, glyphs: &[Glyph], palette: &Palette) -> StaticScene {
    let mut ops = Vec::with_capacity(glyphs.len() * 2);
    for glyph in glyphs {
        ops.push(SceneOp::Cell {
            rect: layout.cell_rect(glyph.index.0),
            fill: palette.cell_fill,
            stroke: palette.cell_stroke,
            stroke_width: palette.cell_stroke_width,
        });
        ops.push(SceneOp::Outline {
            path: Affine::translate(glyph.center.to_vec2()) * glyph.outline.clone(),
            stroke: palette.outline,
            stroke_width: palette.outline_width,
        });
    }
    StaticScene {
        width: layout.canvas_width,
        height: layout.canvas_height,
        background: palette.background,
        ops,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/static_scene.rs"]
mod tests;
