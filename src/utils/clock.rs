use std::time::Instant;

/// Timing snapshot for one rendered frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the clock was created. Drives the cube rotation.
    pub elapsed: f32,
    /// Seconds since the previous tick.
    pub dt: f32,
    pub frame_index: u64,
}

#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frame_index: 0,
        }
    }

    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last);
        self.last = now;

        let time = FrameTime {
            elapsed: now.saturating_duration_since(self.start).as_secs_f32(),
            dt: dt.as_secs_f32(),
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        time
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_tick_counts_frames() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn test_elapsed_never_goes_backwards() {
        let mut clock = FrameClock::new();
        let first = clock.tick();
        std::thread::sleep(Duration::from_millis(2));
        let second = clock.tick();

        assert!(second.elapsed >= first.elapsed);
        assert!(second.dt > 0.0);
    }
}
