/// Turns animation-frame timestamps into frame deltas.
///
/// The host passes the `requestAnimationFrame` timestamp (milliseconds since
/// page load). The baseline starts at zero, so the first delta is the first
/// timestamp itself.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Timestamp of the previous frame, in milliseconds.
    prev_ms: f64,
    /// Number of frames seen so far.
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame timestamp and return the delta in milliseconds.
    /// A timestamp older than the previous one yields zero.
    pub fn advance(&mut self, timestamp_ms: f64) -> f32 {
        if timestamp_ms < self.prev_ms {
            log::debug!("frame timestamp went backwards ({} < {})", timestamp_ms, self.prev_ms);
        }
        let delta = (timestamp_ms - self.prev_ms).max(0.0);
        self.prev_ms = self.prev_ms.max(timestamp_ms);
        self.frames += 1;
        delta as f32
    }

    /// Timestamp of the most recent frame.
    pub fn last_timestamp(&self) -> f64 {
        self.prev_ms
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_delta_is_the_timestamp() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(16.0), 16.0);
    }

    #[test]
    fn deltas_between_frames() {
        let mut clock = FrameClock::new();
        clock.advance(100.0);
        assert_eq!(clock.advance(116.5), 16.5);
        assert_eq!(clock.advance(150.0), 33.5);
        assert_eq!(clock.frame_count(), 3);
    }

    #[test]
    fn backwards_timestamp_is_zero_delta() {
        let mut clock = FrameClock::new();
        clock.advance(200.0);
        assert_eq!(clock.advance(150.0), 0.0);
        assert_eq!(clock.last_timestamp(), 200.0);
        assert_eq!(clock.advance(210.0), 10.0);
    }
}
