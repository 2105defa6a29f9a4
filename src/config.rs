//! Tunable constants for layout, star animation and styling.
//!
//! [`SceneConfig::default`] reproduces the stock look: 100 px glyphs on a 25 px gutter inside a
//! 50 px margin, stars pulsing between 1 s and 3 s. Every section is `#[serde(default)]`, so a
//! JSON file only needs to name what it overrides.

use std::path::Path;

use crate::foundation::color::Rgba8;
use crate::foundation::error::{GlyphError, GlyphResult};

/// Complete configuration for one starfield.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Grid geometry.
    pub grid: GridParams,
    /// Star (animated vertex) parameters.
    pub stars: StarParams,
    /// Colours and stroke widths.
    pub palette: Palette,
}

/// Fixed inputs of the grid layout engine.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridParams {
    /// Left/right margin before centring.
    pub outer_padding_x: f64,
    /// Top/bottom margin.
    pub outer_padding_y: f64,
    /// Gutter between cells.
    pub padding: f64,
    /// Cell and glyph diameter; the glyph's max radius is half of it.
    pub diameter: f64,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            outer_padding_x: 50.0,
            outer_padding_y: 50.0,
            padding: 25.0,
            diameter: 100.0,
        }
    }
}

impl GridParams {
    /// Radius a value of `±scale` reaches.
    pub fn max_radius(&self) -> f64 {
        self.diameter / 2.0
    }

    /// Horizontal/vertical stride between neighbouring cells.
    pub fn cell_stride(&self) -> f64 {
        self.diameter + self.padding
    }
}

/// Size, pulse speed and opacity ranges of the animated stars.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StarParams {
    /// Size of a zero-valued star (and of every star in an all-zero row).
    pub min_size: f64,
    /// Size of a star at `|value| == scale`.
    pub max_size: f64,
    /// Cycle length (ms) at `value == -scale`; the fastest pulse.
    pub min_cycle_ms: f64,
    /// Cycle length (ms) at `value == +scale`; the slowest pulse.
    pub max_cycle_ms: f64,
    /// Cycle length (ms) used when the row's scale is zero.
    pub default_cycle_ms: f64,
    /// Alpha at the trough of the pulse.
    pub min_alpha: f64,
    /// Alpha at the crest of the pulse.
    pub max_alpha: f64,
}

impl Default for StarParams {
    fn default() -> Self {
        Self {
            min_size: 5.0,
            max_size: 10.0,
            min_cycle_ms: 1000.0,
            max_cycle_ms: 3000.0,
            default_cycle_ms: 2000.0,
            min_alpha: 50.0,
            max_alpha: 255.0,
        }
    }
}

/// Colours and strokes for the static layer and the stars.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Canvas background.
    pub background: Rgba8,
    /// Cell background fill.
    pub cell_fill: Rgba8,
    /// Cell border.
    pub cell_stroke: Rgba8,
    /// Cell border width.
    pub cell_stroke_width: f64,
    /// Glyph outline colour (outlines are never filled).
    pub outline: Rgba8,
    /// Glyph outline width.
    pub outline_width: f64,
    /// Star colour for zero values.
    pub neutral: Rgba8,
    /// Star colour reached at `value == +scale`.
    pub positive: Rgba8,
    /// Star colour reached at `value == -scale`.
    pub negative: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba8::rgb(0x16, 0x25, 0x56),
            cell_fill: Rgba8::rgba(0xff, 0xff, 0xff, 0x08),
            cell_stroke: Rgba8::rgba(0xff, 0xff, 0xff, 0x80),
            cell_stroke_width: 0.2,
            outline: Rgba8::rgb(0xfd, 0xc7, 0x00),
            outline_width: 0.75,
            neutral: Rgba8::rgb(0xff, 0xff, 0xff),
            positive: Rgba8::rgb(0xff, 0xdf, 0x20),
            negative: Rgba8::rgb(0x51, 0xa2, 0xff),
        }
    }
}

impl SceneConfig {
    /// Read a (possibly partial) JSON config and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> GlyphResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            GlyphError::validation(format!("failed to read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json_str(text: &str) -> GlyphResult<Self> {
        let cfg: Self = serde_json::from_str(text)
            .map_err(|e| GlyphError::validation(format!("invalid config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check ranges the layout engine and animation driver rely on.
    pub fn validate(&self) -> GlyphResult<()> {
        let g = &self.grid;
        if !(g.diameter.is_finite() && g.diameter > 0.0) {
            return Err(GlyphError::validation("grid.diameter must be finite and > 0"));
        }
        for (name, v) in [
            ("grid.outer_padding_x", g.outer_padding_x),
            ("grid.outer_padding_y", g.outer_padding_y),
            ("grid.padding", g.padding),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(GlyphError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }

        let s = &self.stars;
        for (name, v) in [
            ("stars.min_cycle_ms", s.min_cycle_ms),
            ("stars.max_cycle_ms", s.max_cycle_ms),
            ("stars.default_cycle_ms", s.default_cycle_ms),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(GlyphError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if !(s.min_size.is_finite() && s.min_size >= 0.0 && s.min_size <= s.max_size) {
            return Err(GlyphError::validation(
                "stars.min_size must be >= 0 and <= stars.max_size",
            ));
        }
        if !s.max_size.is_finite() {
            return Err(GlyphError::validation("stars.max_size must be finite"));
        }
        if s.min_cycle_ms > s.max_cycle_ms {
            return Err(GlyphError::validation(
                "stars.min_cycle_ms must be <= stars.max_cycle_ms",
            ));
        }
        if !(s.min_alpha >= 0.0 && s.min_alpha <= s.max_alpha && s.max_alpha <= 255.0) {
            return Err(GlyphError::validation(
                "stars alpha range must satisfy 0 <= min_alpha <= max_alpha <= 255",
            ));
        }

        let p = &self.palette;
        for (name, v) in [
            ("palette.cell_stroke_width", p.cell_stroke_width),
            ("palette.outline_width", p.outline_width),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(GlyphError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
