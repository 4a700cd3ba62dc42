use rand::rngs::StdRng;
use raylib::prelude::*;
use crate::constants::*;
use crate::engine::Engine;
use crate::starfield::camera::Camera;
use crate::starfield::star::Star;
use crate::surface::Surface;

/// Stars radiating out of the screen center, with the whole field drifting
/// against the pointer. The pool is allocated once and recycled in place.
pub struct Starfield {
    stars: Vec<Star>,
    camera: Camera,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl Starfield {
    pub fn new(width: f32, height: f32, rng: StdRng) -> Self {
        let mut starfield = Self {
            stars: Vec::with_capacity(NUM_STARS),
            camera: Camera::new(),
            width: 0.0,
            height: 0.0,
            rng,
        };
        starfield.resize(width, height);
        starfield.init();
        starfield
    }

    /// Refill the pool and project every star without parallax.
    pub fn init(&mut self) {
        let reach = self.reach();
        let center = self.camera.center;

        self.stars.clear();
        for _ in 0..NUM_STARS {
            let mut star = Star::spawn(&mut self.rng, reach);
            star.project(center, Vector2::new(0.0, 0.0));
            self.stars.push(star);
        }
    }

    pub fn on_pointer_move(&mut self, pointer: Vector2, bounds: Rectangle) {
        self.camera.aim(pointer, bounds);
    }

    #[cfg(test)]
    pub(crate) fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[cfg(test)]
    pub(crate) fn camera(&self) -> &Camera {
        &self.camera
    }

    fn reach(&self) -> f32 {
        self.width.max(self.height)
    }
}

/// Fresh star parked on the far plane, where it fades in from black.
fn spawn_far(rng: &mut StdRng, reach: f32, center: Vector2) -> Star {
    let mut star = Star::spawn(rng, reach);
    star.z = MAX_DEPTH;
    star.project(center, Vector2::new(0.0, 0.0));
    star
}

fn is_offscreen(position: Vector2, width: f32, height: f32) -> bool {
    position.x < -SPAWN_MARGIN
        || position.x > width + SPAWN_MARGIN
        || position.y < -SPAWN_MARGIN
        || position.y > height + SPAWN_MARGIN
}

impl Engine for Starfield {
    fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.camera.recenter(self.width, self.height);
    }

    // Motion is per frame, not per second
    fn update(&mut self, _dt: f32) {
        self.camera.ease();

        let reach = self.reach();
        let Self { stars, camera, width, height, rng } = self;

        for star in stars.iter_mut() {
            star.z -= star.speed * DEPTH_STEP;
            star.project(camera.center, camera.parallax(star.depth()));

            if star.z < MIN_DEPTH || is_offscreen(star.screen, *width, *height) {
                *star = spawn_far(rng, reach, camera.center);
            }
        }
    }

    fn draw<S: Surface>(&self, surface: &mut S) {
        surface.clear(Color::BLACK);

        for star in &self.stars {
            let scale = star.scale();
            let radius = star.radius();
            let brightness = star.brightness();

            let (hue, alpha) = if star.is_green() {
                (TERMINAL_GREEN, brightness * 0.8)
            } else {
                (Color::WHITE, brightness)
            };

            surface.fill_circle(star.screen, radius, hue.alpha(alpha));

            // Streak behind fast stars, pointing back along the spawn direction
            if star.speed > TRAIL_SPEED {
                let length = (1.0 - scale) * TRAIL_LENGTH;
                let tail = Vector2::new(
                    star.screen.x - star.angle.cos() * length,
                    star.screen.y - star.angle.sin() * length,
                );
                surface.stroke_gradient(
                    star.screen,
                    tail,
                    radius,
                    hue.alpha(brightness * 0.5),
                    hue.alpha(0.0),
                );
            }
        }
    }
}
