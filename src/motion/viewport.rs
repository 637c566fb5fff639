//! Viewport geometry and one-shot visibility detection.

/// Axis-aligned box in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Grows the box by `margin` on every side (negative shrinks, the CSS
    /// rootMargin sign convention).
    pub fn expand(&self, margin: f64) -> Rect {
        Rect::new(
            self.left - margin,
            self.top - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }

    pub fn intersection_area(&self, other: &Rect) -> f64 {
        let w = (self.right().min(other.right()) - self.left.max(other.left)).max(0.0);
        let h = (self.bottom().min(other.bottom()) - self.top.max(other.top)).max(0.0);
        w * h
    }
}

/// Detects the first time an element enters the viewport. Latches: once
/// visible, every later observation is a no-op, even after the element
/// leaves and re-enters.
#[derive(Debug, Clone, Copy)]
pub struct ViewportObserver {
    threshold: f64,
    margin_px: f64,
    has_been_visible: bool,
}

impl ViewportObserver {
    /// `threshold` is the required intersection area fraction of the
    /// element; a value ≤ 0 counts any positive overlap. `margin_px`
    /// expands (or, negative, contracts) the viewport before testing.
    pub fn new(threshold: f64, margin_px: f64) -> Self {
        Self {
            threshold,
            margin_px,
            has_been_visible: false,
        }
    }

    pub fn has_been_visible(&self) -> bool {
        self.has_been_visible
    }

    /// Returns true exactly once, on the observation that first finds the
    /// element visible.
    pub fn observe(&mut self, element: Rect, viewport: Rect) -> bool {
        if self.has_been_visible {
            return false;
        }
        let bounds = viewport.expand(self.margin_px);
        let overlap = element.intersection_area(&bounds);
        let visible = if self.threshold <= 0.0 {
            overlap > 0.0
        } else {
            let area = element.area();
            area > 0.0 && overlap / area >= self.threshold
        };
        if visible {
            self.has_been_visible = true;
        }
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 800.0)
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
        assert_eq!(rect.area(), 5000.0);
    }

    #[test]
    fn test_intersection_area() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        assert_eq!(a.intersection_area(&b), 2500.0);
        let c = Rect::new(200.0, 200.0, 10.0, 10.0);
        assert_eq!(a.intersection_area(&c), 0.0);
    }

    #[test]
    fn test_fires_exactly_once() {
        let mut observer = ViewportObserver::new(0.0, 0.0);
        let onscreen = Rect::new(100.0, 100.0, 200.0, 100.0);
        let offscreen = Rect::new(100.0, 2000.0, 200.0, 100.0);

        assert!(!observer.observe(offscreen, viewport()));
        assert!(observer.observe(onscreen, viewport()));
        // leave and re-enter: still latched
        assert!(!observer.observe(offscreen, viewport()));
        assert!(!observer.observe(onscreen, viewport()));
        assert!(observer.has_been_visible());
    }

    #[test]
    fn test_negative_margin_contracts_viewport() {
        let mut observer = ViewportObserver::new(0.0, -50.0);
        // 30 px tall sliver at the very bottom edge: inside the raw
        // viewport but outside the contracted one
        let edge = Rect::new(0.0, 780.0, 100.0, 30.0);
        assert!(!observer.observe(edge, viewport()));
        // fully past the contracted band
        let deeper = Rect::new(0.0, 600.0, 100.0, 30.0);
        assert!(observer.observe(deeper, viewport()));
    }

    #[test]
    fn test_threshold_requires_fraction() {
        let mut observer = ViewportObserver::new(0.5, 0.0);
        // 25% inside: not enough
        let quarter = Rect::new(-150.0, 0.0, 200.0, 100.0);
        assert!(!observer.observe(quarter, viewport()));
        // 75% inside: enough
        let most = Rect::new(-50.0, 0.0, 200.0, 100.0);
        assert!(observer.observe(most, viewport()));
    }

    #[test]
    fn test_zero_area_element_is_safe() {
        let mut observer = ViewportObserver::new(0.5, 0.0);
        let empty = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert!(!observer.observe(empty, viewport()));
        assert!(!observer.has_been_visible());
    }
}
