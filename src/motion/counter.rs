//! Count-up stat animation: a spring from 0 to the final value, armed the
//! first time the element scrolls into view.

use super::spring::{Spring, SpringConfig};
use super::viewport::{Rect, ViewportObserver};

/// The counters arm slightly after entering the viewport.
const IN_VIEW_MARGIN: f64 = -50.0;

fn counter_spring() -> SpringConfig {
    SpringConfig {
        stiffness: 50.0,
        damping: 20.0,
        mass: 1.0,
        rest_delta: 0.01,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AnimatedCounter {
    spring: Spring,
    observer: ViewportObserver,
    value: f64,
}

impl AnimatedCounter {
    /// A counter at 0. A zero target needs no animation frame at all: the
    /// spring starts settled on it.
    pub fn new(value: f64) -> Self {
        Self {
            spring: Spring::new(0.0, counter_spring()),
            observer: ViewportObserver::new(0.0, IN_VIEW_MARGIN),
            value,
        }
    }

    pub fn has_been_visible(&self) -> bool {
        self.observer.has_been_visible()
    }

    /// Feeds fresh geometry. On the first visible observation the spring is
    /// aimed at the final value; afterwards this is a no-op.
    pub fn observe(&mut self, element: Rect, viewport: Rect) -> bool {
        let became_visible = self.observer.observe(element, viewport);
        if became_visible {
            self.spring.set_target(self.value);
        }
        became_visible
    }

    /// Retargets only on an actual change; re-rendering with the same value
    /// must not replay the count-up.
    pub fn set_value(&mut self, value: f64) {
        if value == self.value {
            return;
        }
        self.value = value;
        if self.observer.has_been_visible() {
            self.spring.set_target(value);
        }
    }

    pub fn tick(&mut self, dt: f64) -> f64 {
        self.spring.tick(dt)
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_settled()
    }

    /// Rounded, thousands-grouped value with the suffix appended verbatim.
    pub fn display(&self, suffix: &str) -> String {
        format!("{}{}", group_thousands(self.spring.current().round() as i64), suffix)
    }
}

/// en-US style digit grouping, what `toLocaleString()` renders by default.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / 60.0;

    fn onscreen() -> (Rect, Rect) {
        (
            Rect::new(100.0, 100.0, 200.0, 60.0),
            Rect::new(0.0, 0.0, 1280.0, 800.0),
        )
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(4000), "4,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-15000), "-15,000");
    }

    #[test]
    fn test_zero_renders_immediately() {
        let counter = AnimatedCounter::new(0.0);
        assert_eq!(counter.display(""), "0");
        assert!(counter.is_settled());
    }

    #[test]
    fn test_counts_up_to_formatted_value() {
        let (element, viewport) = onscreen();
        let mut counter = AnimatedCounter::new(4000.0);
        assert_eq!(counter.display("+"), "0+");

        assert!(counter.observe(element, viewport));
        let mut peak: f64 = 0.0;
        for _ in 0..600 {
            peak = peak.max(counter.tick(DT));
        }
        assert!(counter.is_settled());
        assert_eq!(counter.display("+"), "4,000+");
        // overdamped tuning: the count never overshoots
        assert!(peak <= 4000.0 + 1e-9);
    }

    #[test]
    fn test_does_not_arm_before_visible() {
        let mut counter = AnimatedCounter::new(2000.0);
        for _ in 0..120 {
            counter.tick(DT);
        }
        assert_eq!(counter.display(""), "0");
    }

    #[test]
    fn test_reobserving_does_not_replay() {
        let (element, viewport) = onscreen();
        let mut counter = AnimatedCounter::new(15.0);
        assert!(counter.observe(element, viewport));
        for _ in 0..600 {
            counter.tick(DT);
        }
        assert_eq!(counter.display("+"), "15+");

        // same geometry again, e.g. after a re-render
        assert!(!counter.observe(element, viewport));
        assert!(counter.is_settled());
    }

    #[test]
    fn test_same_value_does_not_retrigger() {
        let (element, viewport) = onscreen();
        let mut counter = AnimatedCounter::new(15.0);
        counter.observe(element, viewport);
        for _ in 0..600 {
            counter.tick(DT);
        }
        counter.set_value(15.0);
        assert!(counter.is_settled());
    }

    #[test]
    fn test_new_value_retriggers_while_visible() {
        let (element, viewport) = onscreen();
        let mut counter = AnimatedCounter::new(15.0);
        counter.observe(element, viewport);
        for _ in 0..600 {
            counter.tick(DT);
        }
        counter.set_value(30.0);
        assert!(!counter.is_settled());
        for _ in 0..600 {
            counter.tick(DT);
        }
        assert_eq!(counter.display(""), "30");
    }
}
