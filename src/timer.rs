/// Shortest delay a step may reschedule itself with (seconds). Keeps a chain of
/// zero-delay steps from spinning forever inside one frame.
const MIN_DELAY: f32 = 0.001;

/// One-shot countdown that its owner re-arms after every firing, so each step
/// picks its own delay. Overshoot from a long frame carries into the next delay.
#[derive(Debug, Clone, Copy)]
pub struct Timeout {
    remaining: f32,
}

impl Timeout {
    pub fn after(delay: f32) -> Self {
        Self { remaining: delay.max(MIN_DELAY) }
    }

    pub fn tick(&mut self, dt: f32) {
        self.remaining -= dt;
    }

    pub fn is_due(&self) -> bool {
        self.remaining <= 0.0
    }

    pub fn rearm(&mut self, delay: f32) {
        self.remaining += delay.max(MIN_DELAY);
    }

    #[cfg(test)]
    pub(crate) fn remaining(&self) -> f32 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_the_delay_has_elapsed() {
        let mut timer = Timeout::after(0.5);
        timer.tick(0.25);
        assert!(!timer.is_due());
        timer.tick(0.25);
        assert!(timer.is_due());
    }

    #[test]
    fn overshoot_carries_into_next_delay() {
        let mut timer = Timeout::after(0.5);
        timer.tick(0.75);
        assert!(timer.is_due());

        timer.rearm(1.0);
        assert!(!timer.is_due());
        assert_eq!(timer.remaining(), 0.75);
    }

    #[test]
    fn long_frame_fires_repeatedly() {
        let mut timer = Timeout::after(0.25);
        timer.tick(1.0);

        let mut fired = 0;
        while timer.is_due() {
            fired += 1;
            timer.rearm(0.25);
        }
        assert_eq!(fired, 4);
    }

    #[test]
    fn zero_delay_is_clamped() {
        let mut timer = Timeout::after(0.0);
        assert!(!timer.is_due());
        timer.tick(0.01);

        let mut fired = 0;
        while timer.is_due() {
            fired += 1;
            timer.rearm(0.0);
        }
        assert!((1..=11).contains(&fired));
    }
}
