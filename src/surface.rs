use raylib::prelude::*;

const GRADIENT_SEGMENTS: usize = 8;

/// Immediate-mode 2D drawing target the effects render into.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_circle(&mut self, center: Vector2, radius: f32, color: Color);
    /// Straight line whose colour runs from `start` at `from` to `end` at `to`.
    fn stroke_gradient(&mut self, from: Vector2, to: Vector2, width: f32, start: Color, end: Color);
    fn text(&mut self, text: &str, position: Vector2, font_size: f32, color: Color);
}

/// Adapter over any raylib draw handle (window or texture mode).
pub struct RaylibSurface<'a, D: RaylibDraw> {
    d: &'a mut D,
    font: &'a WeakFont,
}

impl<'a, D: RaylibDraw> RaylibSurface<'a, D> {
    pub fn new(d: &'a mut D, font: &'a WeakFont) -> Self {
        Self { d, font }
    }
}

impl<D: RaylibDraw> Surface for RaylibSurface<'_, D> {
    fn clear(&mut self, color: Color) {
        self.d.clear_background(color);
    }

    fn fill_circle(&mut self, center: Vector2, radius: f32, color: Color) {
        self.d.draw_circle_v(center, radius, color);
    }

    fn stroke_gradient(&mut self, from: Vector2, to: Vector2, width: f32, start: Color, end: Color) {
        for (a, b, color) in gradient_segments(from, to, start, end) {
            self.d.draw_line_ex(a, b, width, color);
        }
    }

    // Float size so a fractional scale still shows; spacing matches draw_text
    fn text(&mut self, text: &str, position: Vector2, font_size: f32, color: Color) {
        self.d.draw_text_ex(self.font, text, position, font_size, font_size / 10.0, color);
    }
}

/// raylib has no gradient stroke, approximate it with short flat segments
/// each tinted at its midpoint.
fn gradient_segments(from: Vector2, to: Vector2, start: Color, end: Color) -> impl Iterator<Item = (Vector2, Vector2, Color)> {
    (0..GRADIENT_SEGMENTS).map(move |i| {
        let t0 = i as f32 / GRADIENT_SEGMENTS as f32;
        let t1 = (i + 1) as f32 / GRADIENT_SEGMENTS as f32;
        (from.lerp(to, t0), from.lerp(to, t1), start.lerp(end, (t0 + t1) * 0.5))
    })
}

#[cfg(test)]
#[derive(Debug, Clone)]
pub enum DrawCall {
    Clear(Color),
    Circle { center: Vector2, radius: f32, color: Color },
    Gradient { from: Vector2, to: Vector2, width: f32, start: Color, end: Color },
    Text { text: String, position: Vector2, font_size: f32, color: Color },
}

/// Records draw calls instead of rasterizing them.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_circle(&mut self, center: Vector2, radius: f32, color: Color) {
        self.calls.push(DrawCall::Circle { center, radius, color });
    }

    fn stroke_gradient(&mut self, from: Vector2, to: Vector2, width: f32, start: Color, end: Color) {
        self.calls.push(DrawCall::Gradient { from, to, width, start, end });
    }

    fn text(&mut self, text: &str, position: Vector2, font_size: f32, color: Color) {
        self.calls.push(DrawCall::Text { text: text.to_string(), position, font_size, color });
    }
}
