//! Per-frame star state as a pure function of vertex attributes and elapsed time.
//!
//! Nothing here is stored between frames: size, colour and opacity are recomputed from the
//! vertex, its glyph centre and the wall clock every time, so frames can be produced in any
//! order (or in parallel) with identical results.

use std::f64::consts::TAU;

use rayon::prelude::*;

use crate::config::{Palette, SceneConfig, StarParams};
use crate::foundation::color::Rgba8;
use crate::foundation::core::Point;
use crate::foundation::math::{lerp, map_range};
use crate::glyph::geometry::Vertex;

/// Drawable state of one star for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarVisual {
    /// Canvas position (glyph centre + vertex offset).
    pub position: Point,
    /// Point diameter in pixels.
    pub size: f64,
    /// Colour; the alpha channel carries the pulse opacity.
    pub color: Rgba8,
}

/// Star diameter: `|value|` over `[0, scale]` mapped onto `[min_size, max_size]`.
pub fn star_size(value: f64, scale: f64, stars: &StarParams) -> f64 {
    if scale > 0.0 {
        map_range(value.abs(), 0.0, scale, stars.min_size, stars.max_size)
    } else {
        stars.min_size
    }
}

/// Opaque star colour: neutral at zero, blending toward the positive or negative reference as
/// `|value|` approaches `scale`.
pub fn star_color(value: f64, scale: f64, palette: &Palette) -> Rgba8 {
    if scale <= 0.0 || value == 0.0 {
        palette.neutral
    } else if value > 0.0 {
        palette.neutral.lerp(palette.positive, value / scale)
    } else {
        palette.neutral.lerp(palette.negative, value / -scale)
    }
}

/// Phase shift shared by every star of the glyph centred at `center`.
pub fn phase_offset(center: Point) -> f64 {
    map_range((center.x * center.y) % 100.0, 0.0, 100.0, 0.0, TAU)
}

/// Pulse period in milliseconds; `-scale` pulses fastest, `+scale` slowest.
///
/// Interpolates on `value / scale`, which stays within `[-1, 1]` even when `2 * scale` would
/// overflow.
pub fn cycle_length_ms(value: f64, scale: f64, stars: &StarParams) -> f64 {
    if scale > 0.0 {
        let t = (value / scale + 1.0) / 2.0;
        lerp(stars.min_cycle_ms, stars.max_cycle_ms, t)
    } else {
        stars.default_cycle_ms
    }
}

/// Opacity at `elapsed_ms`: a sine of the phase angle mapped onto `[min_alpha, max_alpha]`.
pub fn pulse_alpha(elapsed_ms: f64, cycle_ms: f64, phase: f64, stars: &StarParams) -> f64 {
    let angle = elapsed_ms * TAU / cycle_ms + phase;
    map_range(angle.sin(), -1.0, 1.0, stars.min_alpha, stars.max_alpha)
}

/// Full visual state of `vertex` (owned by the glyph at `center`) at `elapsed_ms`.
pub fn animate_vertex(
    vertex: &Vertex,
    center: Point,
    elapsed_ms: f64,
    stars: &StarParams,
    palette: &Palette,
) -> StarVisual {
    let cycle = cycle_length_ms(vertex.value, vertex.scale, stars);
    let alpha = pulse_alpha(elapsed_ms, cycle, phase_offset(center), stars);
    let color = star_color(vertex.value, vertex.scale, palette)
        .with_alpha(alpha.round().clamp(0.0, 255.0) as u8);

    StarVisual {
        position: center + vertex.offset,
        size: star_size(vertex.value, vertex.scale, stars),
        color,
    }
}

/// Visual state of every vertex, in vertex order.
///
/// `centers` is indexed by [`Vertex::glyph`].
pub fn animate_frame(
    vertices: &[Vertex],
    centers: &[Point],
    elapsed_ms: f64,
    config: &SceneConfig,
) -> Vec<StarVisual> {
    vertices
        .iter()
        .map(|v| {
            animate_vertex(
                v,
                centers[v.glyph.0],
                elapsed_ms,
                &config.stars,
                &config.palette,
            )
        })
        .collect()
}

/// Same as [`animate_frame`], spread over the rayon pool.
pub fn animate_frame_par(
    vertices: &[Vertex],
    centers: &[Point],
    elapsed_ms: f64,
    config: &SceneConfig,
) -> Vec<StarVisual> {
    vertices
        .par_iter()
        .map(|v| {
            animate_vertex(
                v,
                centers[v.glyph.0],
                elapsed_ms,
                &config.stars,
                &config.palette,
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animate/driver.rs"]
mod tests;
