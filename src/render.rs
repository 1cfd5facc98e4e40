//! Rendering: draws the world to a 2D canvas context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only views of
//! world and camera state and produces pixels; it does not mutate any
//! application state. The fallible `Canvas2D` calls all sit in pattern
//! construction and propagate errors via `Result<_, JsValue>` to the boot
//! path in [`crate::engine`].

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasPattern, CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::camera::{Camera, hex_corners};
use crate::consts::{BACKGROUND_FILL, PATTERN_SIZE, PATTERN_WAVE_OFFSETS};
use crate::geom::Vec2;
use crate::world::{Hex, World};

/// Owns the target context and the pre-built background pattern.
pub struct Renderer {
    ctx: CanvasRenderingContext2d,
    background: CanvasPattern,
}

impl Renderer {
    /// Build a renderer for `ctx`, constructing the wave-motif background
    /// pattern on an offscreen canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the pattern canvas or its 2D context cannot be
    /// created.
    pub fn new(document: &Document, ctx: CanvasRenderingContext2d) -> Result<Self, JsValue> {
        let background = build_background_pattern(document, &ctx)?;
        Ok(Self { ctx, background })
    }

    /// Draw one full frame: clear, background, every hex, optional debug
    /// overlay.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call in the debug overlay fails.
    pub fn draw(
        &self,
        world: &World,
        camera: Camera,
        viewport: Vec2,
        debug: bool,
        hover: Option<Vec2>,
    ) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, viewport.x, viewport.y);
        self.draw_background(viewport);

        for hex in world.hexes() {
            self.draw_hex(world, camera, hex);
        }

        if debug {
            self.draw_debug(camera, viewport, hover)?;
        }
        Ok(())
    }

    fn draw_background(&self, viewport: Vec2) {
        self.ctx.save();
        self.ctx.set_fill_style_canvas_pattern(&self.background);
        self.ctx.fill_rect(0.0, 0.0, viewport.x, viewport.y);
        self.ctx.restore();
    }

    fn draw_hex(&self, world: &World, camera: Camera, hex: &Hex) {
        let center = camera.hex_center(hex.coord);
        let corners = hex_corners(center, camera.radius());

        self.ctx.begin_path();
        self.ctx.move_to(corners[0].x, corners[0].y);
        for corner in &corners[1..] {
            self.ctx.line_to(corner.x, corner.y);
        }
        self.ctx.close_path();

        self.ctx.set_fill_style_str(world.player(hex.owner).color);
        self.ctx.fill();
        self.ctx.stroke();
    }

    /// Cross lines through the canvas center, plus the hovered position in
    /// fractional grid units when one is known.
    fn draw_debug(&self, camera: Camera, viewport: Vec2, hover: Option<Vec2>) -> Result<(), JsValue> {
        let mid = viewport.scale(0.5);

        self.ctx.begin_path();
        self.ctx.move_to(mid.x, 0.0);
        self.ctx.line_to(mid.x, viewport.y);
        self.ctx.stroke();

        self.ctx.begin_path();
        self.ctx.move_to(0.0, mid.y);
        self.ctx.line_to(viewport.x, mid.y);
        self.ctx.stroke();

        if let Some(screen) = hover {
            let grid = camera.grid_position(screen);
            let label = format!("{:.1}, {:.1}", grid.x, grid.y);
            self.ctx.stroke_text(&label, mid.x + 4.0, mid.y - 4.0)?;
        }
        Ok(())
    }
}

/// A square tile of two bezier wave motifs over the background teal,
/// repeated across the viewport.
fn build_background_pattern(
    document: &Document,
    target: &CanvasRenderingContext2d,
) -> Result<CanvasPattern, JsValue> {
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // small positive constant
    let size = PATTERN_SIZE as u32;
    canvas.set_width(size);
    canvas.set_height(size);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("pattern canvas has no 2d context"))?
        .dyn_into()?;

    ctx.set_fill_style_str(BACKGROUND_FILL);
    ctx.fill_rect(0.0, 0.0, PATTERN_SIZE, PATTERN_SIZE);
    for y in PATTERN_WAVE_OFFSETS {
        wave(&ctx, y);
    }
    ctx.stroke();

    target
        .create_pattern_with_html_canvas_element(&canvas, "repeat")?
        .ok_or_else(|| JsValue::from_str("failed to build background pattern"))
}

/// One wave motif: two bezier arcs spanning the pattern tile at height `y`.
fn wave(ctx: &CanvasRenderingContext2d, y: f64) {
    ctx.move_to(0.0, y);
    ctx.bezier_curve_to(13.0, y, 13.0, y + 15.0, 25.0, y + 15.0);
    ctx.bezier_curve_to(38.0, y + 15.0, 38.0, y, 50.0, y);
}
