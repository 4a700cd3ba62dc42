use raylib::prelude::*;
use crate::constants::*;

/// Viewport center and the pointer-driven parallax offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct Camera {
    pub center: Vector2,
    current_offset: Vector2,
    target_offset: Vector2,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recenter(&mut self, width: f32, height: f32) {
        self.center = Vector2::new(width * 0.5, height * 0.5);
    }

    /// Aim opposite the pointer: a cursor at the left edge pushes stars right.
    /// Degenerate bounds leave the target untouched.
    pub fn aim(&mut self, pointer: Vector2, bounds: Rectangle) {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return;
        }

        let normalized_x = ((pointer.x - bounds.x) / bounds.width) * 2.0 - 1.0;
        let normalized_y = ((pointer.y - bounds.y) / bounds.height) * 2.0 - 1.0;

        self.target_offset = Vector2::new(-normalized_x * MAX_OFFSET, -normalized_y * MAX_OFFSET);
    }

    /// Exponential smoothing toward the target, one frame's worth.
    pub fn ease(&mut self) {
        self.current_offset.x += (self.target_offset.x - self.current_offset.x) * PARALLAX_EASING;
        self.current_offset.y += (self.target_offset.y - self.current_offset.y) * PARALLAX_EASING;
    }

    /// Displacement for a star at `depth`; near stars move the most.
    pub fn parallax(&self, depth: f32) -> Vector2 {
        let factor = depth * PARALLAX_DEPTH_FACTOR;
        Vector2::new(self.current_offset.x * factor, self.current_offset.y * factor)
    }

    #[cfg(test)]
    pub(crate) fn current_offset(&self) -> Vector2 {
        self.current_offset
    }

    #[cfg(test)]
    pub(crate) fn target_offset(&self) -> Vector2 {
        self.target_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rectangle {
        Rectangle::new(0.0, 0.0, 800.0, 600.0)
    }

    #[test]
    fn default_camera_is_at_rest() {
        let mut camera = Camera::default();
        camera.ease();
        assert_eq!(camera.center.x, 0.0);
        assert_eq!(camera.parallax(1.0).x, 0.0);
        assert_eq!(camera.parallax(1.0).y, 0.0);
    }

    #[test]
    fn pointer_at_center_has_no_offset() {
        let mut camera = Camera::new();
        camera.aim(Vector2::new(400.0, 300.0), bounds());
        assert_eq!(camera.target_offset().x, 0.0);
        assert_eq!(camera.target_offset().y, 0.0);
    }

    #[test]
    fn pointer_in_corner_inverts_to_max_offset() {
        let mut camera = Camera::new();
        camera.aim(Vector2::new(0.0, 0.0), bounds());
        assert_eq!(camera.target_offset().x, MAX_OFFSET);
        assert_eq!(camera.target_offset().y, MAX_OFFSET);

        camera.aim(Vector2::new(800.0, 600.0), bounds());
        assert_eq!(camera.target_offset().x, -MAX_OFFSET);
        assert_eq!(camera.target_offset().y, -MAX_OFFSET);
    }

    #[test]
    fn bounds_origin_is_respected() {
        let mut camera = Camera::new();
        camera.aim(Vector2::new(150.0, 70.0), Rectangle::new(100.0, 50.0, 100.0, 40.0));
        assert_eq!(camera.target_offset().x, 0.0);
        assert_eq!(camera.target_offset().y, 0.0);
    }

    #[test]
    fn empty_bounds_are_ignored() {
        let mut camera = Camera::new();
        camera.aim(Vector2::new(0.0, 0.0), bounds());
        camera.aim(Vector2::new(5.0, 5.0), Rectangle::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(camera.target_offset().x, MAX_OFFSET);
        assert!(camera.target_offset().y.is_finite());
    }

    #[test]
    fn easing_contracts_without_overshoot() {
        let mut camera = Camera::new();
        camera.aim(Vector2::new(0.0, 800.0), Rectangle::new(0.0, 0.0, 800.0, 800.0));
        let target = camera.target_offset();

        let mut gap = (target.x - camera.current_offset().x).abs();
        for _ in 0..120 {
            camera.ease();
            let current = camera.current_offset();
            let next_gap = (target.x - current.x).abs();
            assert!(next_gap < gap);
            assert!(current.x <= target.x);
            assert!(current.y >= target.y);
            gap = next_gap;
        }
        assert!(gap < 1.0);
    }

    #[test]
    fn parallax_scales_with_depth() {
        let mut camera = Camera::new();
        camera.aim(Vector2::new(0.0, 0.0), bounds());
        for _ in 0..200 {
            camera.ease();
        }
        assert_eq!(camera.parallax(0.0).x, 0.0);
        assert!(camera.parallax(1.0).x > camera.parallax(0.5).x);
        assert!(camera.parallax(1.0).x <= MAX_OFFSET * PARALLAX_DEPTH_FACTOR);
    }
}
