use std::sync::Arc;

use kurbo::Shape;

use crate::animate::driver::StarVisual;
use crate::foundation::color::Rgba8;
use crate::foundation::core::{BezPath, Rect};
use crate::foundation::error::{GlyphError, GlyphResult};
use crate::render::backend::FrameRGBA;
use crate::render::composite::over_in_place;
use crate::scene::generation::Generation;
use crate::scene::static_scene::{SceneOp, StaticScene};

const CIRCLE_TOLERANCE: f64 = 0.05;

#[derive(Clone)]
struct CachedLayer {
    epoch: u64,
    fingerprint: u64,
    pixmap: Arc<vello_cpu::Pixmap>,
}

/// CPU renderer powered by `vello_cpu`.
///
/// Holds the rasterised static layer of the most recent generation; a generation with a new
/// epoch (or different geometry) replaces it wholesale.
pub struct CpuRenderer {
    ctx: Option<vello_cpu::RenderContext>,
    static_layer: Option<CachedLayer>,
    parallel_stars: bool,
}

impl Default for CpuRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuRenderer {
    /// Renderer with sequential star evaluation.
    pub fn new() -> Self {
        Self {
            ctx: None,
            static_layer: None,
            parallel_stars: false,
        }
    }

    /// Evaluate star state on the rayon pool when drawing frames.
    pub fn with_parallel_stars(mut self, parallel: bool) -> Self {
        self.parallel_stars = parallel;
        self
    }

    /// Rasterised static layer for `generation`, built on first use and cached per epoch.
    pub fn static_layer(&mut self, generation: &Generation) -> GlyphResult<Arc<vello_cpu::Pixmap>> {
        let fingerprint = generation.fingerprint();
        if let Some(cached) = &self.static_layer
            && cached.epoch == generation.epoch()
            && cached.fingerprint == fingerprint
        {
            return Ok(Arc::clone(&cached.pixmap));
        }

        let pixmap = Arc::new(self.rasterize_static(generation.static_scene())?);
        self.static_layer = Some(CachedLayer {
            epoch: generation.epoch(),
            fingerprint,
            pixmap: Arc::clone(&pixmap),
        });
        Ok(pixmap)
    }

    /// Draw the cached static layer at the origin, then every star of `generation` at `elapsed_ms`.
    pub fn render_frame(
        &mut self,
        generation: &Generation,
        elapsed_ms: f64,
    ) -> GlyphResult<FrameRGBA> {
        let layer = self.static_layer(generation)?;
        let stars = if self.parallel_stars {
            generation.stars_at_par(elapsed_ms)
        } else {
            generation.stars_at(elapsed_ms)
        };

        let (w, h) = (layer.width(), layer.height());
        let mut data = layer.data_as_u8_slice().to_vec();
        if !stars.is_empty() {
            let star_layer = self.rasterize_stars(&stars, w, h)?;
            over_in_place(&mut data, star_layer.data_as_u8_slice())?;
        }

        Ok(FrameRGBA {
            width: u32::from(w),
            height: u32::from(h),
            data,
            premultiplied: true,
        })
    }

    #[tracing::instrument(skip(self, scene), fields(ops = scene.ops.len()))]
    fn rasterize_static(&mut self, scene: &StaticScene) -> GlyphResult<vello_cpu::Pixmap> {
        let (w, h) = canvas_size(scene.width, scene.height)?;
        let mut pixmap = vello_cpu::Pixmap::new(w, h);

        self.with_ctx_mut(w, h, |ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(color_to_cpu(scene.background));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(w),
                f64::from(h),
            ));

            for op in &scene.ops {
                match op {
                    SceneOp::Cell {
                        rect,
                        fill,
                        stroke,
                        stroke_width,
                    } => {
                        let r = rect_to_cpu(*rect);
                        ctx.set_paint(color_to_cpu(*fill));
                        ctx.fill_rect(&r);
                        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*stroke_width));
                        ctx.set_paint(color_to_cpu(*stroke));
                        ctx.stroke_rect(&r);
                    }
                    SceneOp::Outline {
                        path,
                        stroke,
                        stroke_width,
                    } => {
                        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*stroke_width));
                        ctx.set_paint(color_to_cpu(*stroke));
                        ctx.stroke_path(&bezpath_to_cpu(path));
                    }
                }
            }

            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
        });

        Ok(pixmap)
    }

    fn rasterize_stars(
        &mut self,
        stars: &[StarVisual],
        w: u16,
        h: u16,
    ) -> GlyphResult<vello_cpu::Pixmap> {
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.with_ctx_mut(w, h, |ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            for star in stars {
                let dot = kurbo::Circle::new(star.position, star.size / 2.0);
                ctx.set_paint(color_to_cpu(star.color));
                ctx.fill_path(&bezpath_to_cpu(&dot.to_path(CIRCLE_TOLERANCE)));
            }
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
        });
        Ok(pixmap)
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> R,
    ) -> R {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx);
        self.ctx = Some(ctx);
        out
    }
}

/// Whole-pixel raster size for a canvas; rejects sizes `vello_cpu` cannot address.
pub(crate) fn canvas_size(width: f64, height: f64) -> GlyphResult<(u16, u16)> {
    fn dim(name: &str, v: f64) -> GlyphResult<u16> {
        let px = v.ceil();
        if !px.is_finite() || px < 1.0 || px > f64::from(u16::MAX) {
            return Err(GlyphError::render(format!(
                "canvas {name} {v} is outside the raster range 1..={}",
                u16::MAX
            )));
        }
        Ok(px as u16)
    }
    Ok((dim("width", width)?, dim("height", height)?))
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
