//! Time management utilities

/// Frame timer
///
/// Tracks the time between frames and the total time since the first frame.
/// The render loop drives it from the GLFW clock through [`Timer::update_from`]
/// so animation time and frame deltas come from the same source.
pub struct Timer {
    last_time: Option<f64>,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_time: None,
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer from an external clock reading in seconds
    ///
    /// The first reading only establishes the reference point, so the first
    /// frame reports a zero delta. Readings that go backwards are treated as
    /// a zero delta.
    pub fn update_from(&mut self, seconds: f64) {
        if let Some(last) = self.last_time {
            self.delta_time = (seconds - last).max(0.0) as f32;
        } else {
            self.delta_time = 0.0;
        }
        self.total_time = seconds as f32;
        self.last_time = Some(seconds);
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the clock reading of the latest frame in seconds
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since the first frame
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}
