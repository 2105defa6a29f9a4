use crate::config::GridParams;
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{GlyphError, GlyphResult};

/// Responsive grid computed from the viewport width and the number of glyphs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GridLayout {
    /// Canvas width (always the viewport width).
    pub canvas_width: f64,
    /// Canvas height derived from the row count.
    pub canvas_height: f64,
    /// Glyphs per grid row (always >= 1).
    pub columns: usize,
    /// Grid rows: `ceil(glyph_count / columns)`.
    pub rows: usize,
    /// Number of glyphs laid out.
    pub glyph_count: usize,
    /// Left edge of the first column; recomputed so the grid is horizontally centred.
    /// Negative when a single clamped column is wider than the viewport.
    pub outer_padding_x: f64,
    /// Top edge of the first row.
    pub outer_padding_y: f64,
    /// Gutter between cells.
    pub padding: f64,
    /// Cell/glyph diameter.
    pub diameter: f64,
}

impl GridLayout {
    /// Glyph radius (half the diameter).
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    /// Width occupied by the columns and the gutters between them.
    pub fn grid_width(&self) -> f64 {
        let cols = self.columns as f64;
        cols * self.diameter + (cols - 1.0) * self.padding
    }

    /// `(column, grid row)` of glyph `index`, filled row-major.
    pub fn cell_of(&self, index: usize) -> (usize, usize) {
        (index % self.columns, index / self.columns)
    }

    /// Cell square of glyph `index`.
    pub fn cell_rect(&self, index: usize) -> Rect {
        let (col, row) = self.cell_of(index);
        let stride = self.diameter + self.padding;
        let x = self.outer_padding_x + (col as f64) * stride;
        let y = self.outer_padding_y + (row as f64) * stride;
        Rect::new(x, y, x + self.diameter, y + self.diameter)
    }

    /// Centre of glyph `index`.
    pub fn center_of(&self, index: usize) -> Point {
        let cell = self.cell_rect(index);
        Point::new(cell.x0 + self.radius(), cell.y0 + self.radius())
    }
}

/// Pack `glyph_count` fixed-size glyphs into a viewport `viewport_width` pixels wide.
///
/// Returns the layout and one centre per glyph, assigned row-major. A viewport too narrow for
/// a single cell is clamped to one column.
///
/// The canvas height is `2 * outer_padding_y + rows * diameter + (rows - 1) * padding`, except
/// that the gutter count never goes below zero: an empty dataset gets `2 * outer_padding_y`
/// rather than the literal formula's `2 * outer_padding_y - padding`, so the canvas never
/// shrinks below its margins.
pub fn compute_grid(
    viewport_width: f64,
    glyph_count: usize,
    params: &GridParams,
) -> GlyphResult<(GridLayout, Vec<Point>)> {
    if !viewport_width.is_finite() || viewport_width <= 0.0 {
        return Err(GlyphError::validation(format!(
            "viewport width must be finite and > 0, got {viewport_width}"
        )));
    }
    if !(params.diameter.is_finite() && params.diameter > 0.0) {
        return Err(GlyphError::validation("grid diameter must be finite and > 0"));
    }
    if !(params.padding.is_finite() && params.padding >= 0.0) {
        return Err(GlyphError::validation("grid padding must be finite and >= 0"));
    }

    let available_width = viewport_width - 2.0 * params.outer_padding_x;
    let fitted = (available_width / params.cell_stride()).floor();
    let columns = if fitted >= 1.0 {
        fitted as usize
    } else {
        tracing::warn!(
            viewport_width,
            available_width,
            "viewport narrower than one cell; clamping to a single column"
        );
        1
    };
    let rows = glyph_count.div_ceil(columns);

    let rows_f = rows as f64;
    let canvas_height = 2.0 * params.outer_padding_y
        + rows_f * params.diameter
        + (rows.saturating_sub(1) as f64) * params.padding;

    let mut layout = GridLayout {
        canvas_width: viewport_width,
        canvas_height,
        columns,
        rows,
        glyph_count,
        outer_padding_x: 0.0,
        outer_padding_y: params.outer_padding_y,
        padding: params.padding,
        diameter: params.diameter,
    };
    layout.outer_padding_x = (viewport_width - layout.grid_width()) / 2.0;

    tracing::debug!(
        columns,
        rows,
        elements = rows * columns,
        canvas_width = layout.canvas_width,
        canvas_height = layout.canvas_height,
        "computed grid layout"
    );

    let centers = (0..glyph_count).map(|i| layout.center_of(i)).collect();
    Ok((layout, centers))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
