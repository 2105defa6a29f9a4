use std::ops::Range;

use crate::foundation::core::{BezPath, Point, Vec2};
use crate::foundation::error::{GlyphError, GlyphResult};
use crate::glyph::normalize::magnitude_scale;

/// Index of a glyph (equal to its row index in the dataset).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct GlyphIndex(pub usize);

/// One polar vertex of a glyph, stored as a cartesian offset from the glyph centre.
///
/// The centre itself is not copied in: it is resolved through [`Vertex::glyph`] against the
/// generation's centres, so a new layout moves every vertex that names it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    /// Owning glyph.
    pub glyph: GlyphIndex,
    /// Position of the value within its row.
    pub index: usize,
    /// Offset from the glyph centre.
    pub offset: Vec2,
    /// Raw row value.
    pub value: f64,
    /// The row's magnitude scale.
    pub scale: f64,
}

/// Geometry of one glyph: its vertices plus the closed outline through them.
#[derive(Clone, Debug)]
pub struct GlyphGeometry {
    /// Row magnitude scale used for normalization.
    pub scale: f64,
    /// Vertices in row order.
    pub vertices: Vec<Vertex>,
    /// Closed polyline through the vertex offsets, in glyph-local coordinates.
    pub outline: BezPath,
}

/// A laid-out glyph inside a generation.
#[derive(Clone, Debug)]
pub struct Glyph {
    /// Row index.
    pub index: GlyphIndex,
    /// Fixed anchor assigned by the grid layout.
    pub center: Point,
    /// Row magnitude scale.
    pub scale: f64,
    /// This glyph's slice of the generation's flat vertex list.
    pub vertices: Range<usize>,
    /// Closed outline in glyph-local coordinates.
    pub outline: BezPath,
}

/// Radius of `value` in a row of magnitude `scale`, mapped linearly onto `[-max_radius, max_radius]`.
pub fn vertex_radius(value: f64, scale: f64, max_radius: f64) -> f64 {
    if scale > 0.0 {
        value / scale * max_radius
    } else {
        0.0
    }
}

/// Cartesian offset of vertex `index` out of `count`, at signed `radius`.
///
/// Angles are `index * 360° / count`, with 0° on the positive x axis and increasing toward
/// positive y. Negative radii land on the opposite side of the centre.
pub fn vertex_offset(index: usize, count: usize, radius: f64) -> Vec2 {
    let angle_step_deg = 360.0 / count as f64;
    let angle = (index as f64 * angle_step_deg).to_radians();
    Vec2::new(radius * angle.cos(), radius * angle.sin())
}

/// Convert one row into its radial polygon.
///
/// Zero-length rows are rejected; an all-zero row is valid and collapses onto the centre.
pub fn build_glyph(glyph: GlyphIndex, row: &[f64], max_radius: f64) -> GlyphResult<GlyphGeometry> {
    if row.is_empty() {
        return Err(GlyphError::validation(format!(
            "row {} has no values; cannot derive an angle step",
            glyph.0
        )));
    }

    let scale = magnitude_scale(row);
    let count = row.len();

    let vertices = row
        .iter()
        .enumerate()
        .map(|(index, &value)| Vertex {
            glyph,
            index,
            offset: vertex_offset(index, count, vertex_radius(value, scale, max_radius)),
            value,
            scale,
        })
        .collect::<Vec<_>>();

    let mut outline = BezPath::new();
    for (i, v) in vertices.iter().enumerate() {
        let p = v.offset.to_point();
        if i == 0 {
            outline.move_to(p);
        } else {
            outline.line_to(p);
        }
    }
    outline.close_path();

    Ok(GlyphGeometry {
        scale,
        vertices,
        outline,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/geometry.rs"]
mod tests;
