use std::f32::consts::TAU;
use rand::Rng;
use raylib::prelude::*;
use crate::constants::*;

/// One particle of the pool. `origin` is the offset from the screen center the
/// star was spawned at; everything on screen is derived from it and `z`.
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub origin: Vector2,
    pub z: f32,
    pub size: f32,
    pub angle: f32,
    pub speed: f32,
    pub screen: Vector2,
}

impl Star {
    /// Random star on a disk of radius `reach` around the center. Spans are
    /// multiplied rather than passed as ranges so a zero-sized viewport is fine.
    pub fn spawn<R: Rng>(rng: &mut R, reach: f32) -> Self {
        let angle = rng.random::<f32>() * TAU;
        let distance = rng.random::<f32>() * reach;

        Self {
            origin: Vector2::new(angle.cos() * distance, angle.sin() * distance),
            z: rng.random::<f32>() * MAX_DEPTH,
            size: rng.random::<f32>() * 2.0 + 0.5,
            angle,
            speed: rng.random::<f32>() * 0.5 + 0.2,
            screen: Vector2::new(0.0, 0.0),
        }
    }

    pub fn scale(&self) -> f32 {
        perspective(self.z)
    }

    /// 0 at the far plane, approaching 1 as the star closes in.
    pub fn depth(&self) -> f32 {
        1.0 - self.z / MAX_DEPTH
    }

    pub fn radius(&self) -> f32 {
        self.size * self.scale()
    }

    pub fn brightness(&self) -> f32 {
        self.depth()
    }

    pub fn is_green(&self) -> bool {
        is_green(self.origin.x, self.origin.y)
    }

    pub fn project(&mut self, center: Vector2, parallax: Vector2) {
        let scale = self.scale();
        self.screen = Vector2::new(
            center.x + self.origin.x * scale + parallax.x,
            center.y + self.origin.y * scale + parallax.y,
        );
    }
}

/// Linear perspective divide with the far plane as focal length.
pub fn perspective(z: f32) -> f32 {
    MAX_DEPTH / (MAX_DEPTH + z)
}

/// Colour classifier: the fractional residue of `1000 * (x + y)` lands above
/// the threshold for roughly 30% of origins. Computed in f64 so the result for
/// a given pair is stable; platforms may still disagree at rounding edges.
pub fn is_green(origin_x: f32, origin_y: f32) -> bool {
    let residue = (origin_x as f64 * 1000.0 + origin_y as f64 * 1000.0).rem_euclid(1.0);
    residue > GREEN_THRESHOLD
}
