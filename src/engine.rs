use crate::surface::Surface;

/// A self-contained effect driven by the main loop.
pub trait Engine {
    fn resize(&mut self, width: f32, height: f32);
    fn update(&mut self, dt: f32);
    fn draw<S: Surface>(&self, surface: &mut S);
}
