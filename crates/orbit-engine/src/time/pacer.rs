use std::time::Duration;

/// Fixed software delay inserted before every frame.
///
/// The animation advances by a constant step per frame, so the delay is what
/// sets its speed. A zero delay disables pacing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FramePacer {
    delay: Duration,
}

impl FramePacer {
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub const fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Blocks the calling thread for the configured delay.
    pub fn pace(&self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn from_millis_sets_delay() {
        assert_eq!(FramePacer::from_millis(15).delay(), Duration::from_millis(15));
    }

    #[test]
    fn default_does_not_block() {
        let start = Instant::now();
        FramePacer::default().pace();
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn pace_sleeps_at_least_the_delay() {
        let pacer = FramePacer::from_millis(5);
        let start = Instant::now();
        pacer.pace();
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
