//! starglyph renders a numeric dataset as a responsive grid of animated radial "star glyphs".
//!
//! Each row becomes a closed polygon whose vertices sit at evenly spaced angles around a
//! centre, with radius proportional to the row's values. Every vertex is overlaid with a
//! pulsing star whose colour and pulse speed encode the value's sign and magnitude.
//!
//! # Pipeline overview
//!
//! 1. **Layout**: `viewport width + row count -> GridLayout + centres` ([`compute_grid`])
//! 2. **Geometry**: `row -> scale + vertices + outline` ([`magnitude_scale`], [`build_glyph`])
//! 3. **Static scene**: cells and outlines composed once per layout ([`build_static_scene`])
//! 4. **Animate**: `vertices + elapsed time -> StarVisual`s, every frame ([`animate_frame`])
//! 5. **Render** (optional): cached static layer + stars into pixels ([`CpuRenderer`])
//!
//! Steps 1 to 3 run together as one [`Generation`], rebuilt in full whenever the viewport
//! changes; [`Starfield`] owns the current generation and swaps it on resize.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: layout and animation are pure; identical inputs give bit-identical output.
//! - **Stateless animation**: star state is recomputed from the wall clock each frame.
//! - **Premultiplied RGBA8** out of the renderer.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animate;
mod config;
mod data;
mod foundation;
mod glyph;
mod layout;
mod render;
mod scene;

pub use animate::driver::{
    StarVisual, animate_frame, animate_frame_par, animate_vertex, cycle_length_ms, phase_offset,
    pulse_alpha, star_color, star_size,
};
pub use config::{GridParams, Palette, SceneConfig, StarParams};
pub use data::dataset::{Dataset, Row};
pub use foundation::color::Rgba8;
pub use foundation::core::{Affine, BezPath, Fps, Point, Rect, Vec2, Viewport};
pub use foundation::error::{GlyphError, GlyphResult};
pub use foundation::math::{lerp, map_range};
pub use glyph::geometry::{
    Glyph, GlyphGeometry, GlyphIndex, Vertex, build_glyph, vertex_offset, vertex_radius,
};
pub use glyph::normalize::magnitude_scale;
pub use layout::grid::{GridLayout, compute_grid};
pub use render::backend::FrameRGBA;
pub use render::cpu::CpuRenderer;
pub use scene::generation::{Generation, Starfield};
pub use scene::static_scene::{SceneOp, StaticScene, build_static_scene};
