/// Symmetric normalization denominator of a row: `max(|max(row)|, |min(row)|)`.
///
/// An empty or all-zero row yields `0.0`, which collapses every vertex of its glyph onto the
/// centre.
pub fn magnitude_scale(row: &[f64]) -> f64 {
    if row.is_empty() {
        return 0.0;
    }
    let (min, max) = row
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    max.abs().max(min.abs())
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/normalize.rs"]
mod tests;
