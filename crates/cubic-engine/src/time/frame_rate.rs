/// Frames-per-second estimate averaged over a fixed time window.
///
/// The estimate is refreshed once per window, so it is stable enough to
/// display in a title bar or log line.
#[derive(Debug, Clone)]
pub struct FrameRate {
    window: f32,
    accumulated: f32,
    frames: u32,
    fps: Option<f32>,
}

impl FrameRate {
    /// `window` is the averaging period in seconds.
    pub fn new(window: f32) -> Self {
        Self {
            window: window.max(f32::EPSILON),
            accumulated: 0.0,
            frames: 0,
            fps: None,
        }
    }

    /// Records one frame of duration `dt` seconds.
    ///
    /// Returns the new estimate when a window completes.
    pub fn record(&mut self, dt: f32) -> Option<f32> {
        self.accumulated += dt.max(0.0);
        self.frames += 1;

        if self.accumulated < self.window {
            return None;
        }

        let fps = self.frames as f32 / self.accumulated;
        self.fps = Some(fps);
        self.accumulated = 0.0;
        self.frames = 0;
        Some(fps)
    }

    /// Last completed estimate.
    pub fn fps(&self) -> Option<f32> {
        self.fps
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_estimate_before_window_completes() {
        let mut rate = FrameRate::new(1.0);
        for _ in 0..10 {
            assert_eq!(rate.record(0.05), None);
        }
        assert_eq!(rate.fps(), None);
    }

    #[test]
    fn estimate_after_one_window() {
        let mut rate = FrameRate::new(0.5);
        let mut out = None;
        for _ in 0..100 {
            if let Some(fps) = rate.record(0.01) {
                out = Some(fps);
                break;
            }
        }
        let fps = out.expect("window should complete");
        assert!((fps - 100.0).abs() < 1.0, "fps = {fps}");
        assert_eq!(rate.fps(), Some(fps));
    }

    #[test]
    fn negative_dt_is_ignored() {
        let mut rate = FrameRate::new(0.1);
        assert_eq!(rate.record(-5.0), None);
        assert!(rate.record(0.2).is_some());
    }
}
