//! Page scroll progress as a 0–1 ratio, spring-smoothed for rendering.

use super::spring::{Spring, SpringConfig};

/// Stiff tuning: scroll input changes every event, so the indicator has to
/// settle fast to stay under the finger.
fn progress_spring() -> SpringConfig {
    SpringConfig {
        stiffness: 100.0,
        damping: 30.0,
        mass: 1.0,
        rest_delta: 0.001,
    }
}

/// One instance per page. Consumers that need the progress value subscribe
/// to this tracker's output instead of keeping their own.
#[derive(Debug, Clone, Copy)]
pub struct ScrollProgressTracker {
    spring: Spring,
}

impl Default for ScrollProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollProgressTracker {
    pub fn new() -> Self {
        Self {
            spring: Spring::new(0.0, progress_spring()),
        }
    }

    /// Feeds a scroll sample and returns the raw clamped ratio. A document
    /// no taller than the viewport has nothing to scroll: progress 0.
    pub fn on_scroll(&mut self, scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
        let range = document_height - viewport_height;
        let progress = if range <= 0.0 {
            0.0
        } else {
            (scroll_y / range).clamp(0.0, 1.0)
        };
        self.spring.set_target(progress);
        progress
    }

    /// Advances the smoothing spring; returns the render-ready value.
    pub fn tick(&mut self, dt: f64) -> f64 {
        self.spring.tick(dt)
    }

    /// Smoothed progress as of the last tick.
    pub fn progress(&self) -> f64 {
        self.spring.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / 60.0;

    #[test]
    fn test_initial_progress_is_zero() {
        let tracker = ScrollProgressTracker::new();
        assert_eq!(tracker.progress(), 0.0);
    }

    #[test]
    fn test_short_document_yields_zero() {
        let mut tracker = ScrollProgressTracker::new();
        assert_eq!(tracker.on_scroll(120.0, 700.0, 800.0), 0.0);
        assert_eq!(tracker.on_scroll(0.0, 800.0, 800.0), 0.0);
    }

    #[test]
    fn test_ratio_and_endpoints() {
        let mut tracker = ScrollProgressTracker::new();
        assert_eq!(tracker.on_scroll(0.0, 4800.0, 800.0), 0.0);
        assert_eq!(tracker.on_scroll(2000.0, 4800.0, 800.0), 0.5);
        assert_eq!(tracker.on_scroll(4000.0, 4800.0, 800.0), 1.0);
    }

    #[test]
    fn test_clamped_outside_range() {
        let mut tracker = ScrollProgressTracker::new();
        // overscroll bounce on touch devices
        assert_eq!(tracker.on_scroll(-80.0, 4800.0, 800.0), 0.0);
        assert_eq!(tracker.on_scroll(4500.0, 4800.0, 800.0), 1.0);
    }

    #[test]
    fn test_smoothed_value_converges_to_sample() {
        let mut tracker = ScrollProgressTracker::new();
        tracker.on_scroll(2000.0, 4800.0, 800.0);
        for _ in 0..300 {
            tracker.tick(DT);
        }
        assert!((tracker.progress() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_coalesced_events_converge_to_last_sample() {
        let mut tracker = ScrollProgressTracker::new();
        // many samples in one frame: only the last one matters
        for y in [100.0, 900.0, 1700.0, 2400.0, 3000.0] {
            tracker.on_scroll(y, 4800.0, 800.0);
        }
        for _ in 0..300 {
            tracker.tick(DT);
        }
        assert!((tracker.progress() - 0.75).abs() < 0.001);
    }
}
