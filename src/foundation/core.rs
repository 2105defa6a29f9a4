use crate::foundation::error::{GlyphError, GlyphResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Size of the drawing surface as delivered by the host (startup and every resize).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Surface width in pixels.
    pub width: f64,
    /// Surface height in pixels. Only the width drives the grid; the canvas height is derived.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport, rejecting non-finite or non-positive widths.
    pub fn new(width: f64, height: f64) -> GlyphResult<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(GlyphError::validation(format!(
                "viewport width must be finite and > 0, got {width}"
            )));
        }
        if !height.is_finite() || height < 0.0 {
            return Err(GlyphError::validation(format!(
                "viewport height must be finite and >= 0, got {height}"
            )));
        }
        Ok(Self { width, height })
    }
}

/// Rational frame rate used to turn frame indices into elapsed wall-clock time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator (must be > 0).
    pub den: u32,
}

impl Fps {
    /// Create a frame rate, rejecting zero numerator or denominator.
    pub fn new(num: u32, den: u32) -> GlyphResult<Self> {
        if den == 0 {
            return Err(GlyphError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(GlyphError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Duration of one frame in milliseconds.
    pub fn frame_duration_ms(self) -> f64 {
        1000.0 * f64::from(self.den) / f64::from(self.num)
    }

    /// Elapsed milliseconds at the start of `frame`.
    pub fn frames_to_ms(self, frame: u64) -> f64 {
        (frame as f64) * self.frame_duration_ms()
    }
}

impl std::str::FromStr for Fps {
    type Err = GlyphError;

    /// Parses `"60"` or `"30000/1001"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|e| GlyphError::validation(format!("invalid fps '{s}': {e}")))
        };
        match s.split_once('/') {
            Some((num, den)) => Self::new(parse(num)?, parse(den)?),
            None => Self::new(parse(s)?, 1),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
