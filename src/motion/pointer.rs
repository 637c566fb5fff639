//! Pointer-tracking spotlight: region-relative offset plus hover opacity.

use super::viewport::Rect;

/// Pointer position relative to a region's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

/// The offset tracks the pointer 1:1 — no smoothing, by contract — and the
/// last value persists between moves. Opacity is hover-driven only.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerSpotlight {
    offset: PointerOffset,
    hovered: bool,
}

impl PointerSpotlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// `region` must be sampled fresh for every event; a cached rect goes
    /// stale the moment the page scrolls or the region resizes.
    pub fn on_pointer_move(&mut self, region: Rect, client_x: f64, client_y: f64) -> PointerOffset {
        self.offset = if region.width <= 0.0 || region.height <= 0.0 {
            PointerOffset::default()
        } else {
            PointerOffset {
                x: client_x - region.left,
                y: client_y - region.top,
            }
        };
        self.offset
    }

    pub fn enter(&mut self) {
        self.hovered = true;
    }

    pub fn leave(&mut self) {
        self.hovered = false;
    }

    pub fn offset(&self) -> PointerOffset {
        self.offset
    }

    pub fn opacity(&self) -> f64 {
        if self.hovered {
            1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> Rect {
        Rect::new(300.0, 500.0, 400.0, 250.0)
    }

    #[test]
    fn test_offset_is_region_relative() {
        let mut spotlight = PointerSpotlight::new();
        let offset = spotlight.on_pointer_move(region(), 350.0, 620.0);
        assert_eq!(offset, PointerOffset { x: 50.0, y: 120.0 });
    }

    #[test]
    fn test_tracks_every_move_exactly() {
        let mut spotlight = PointerSpotlight::new();
        spotlight.on_pointer_move(region(), 310.0, 510.0);
        let offset = spotlight.on_pointer_move(region(), 690.0, 740.0);
        // 1:1, no lag from the previous position
        assert_eq!(offset, PointerOffset { x: 390.0, y: 240.0 });
    }

    #[test]
    fn test_moved_region_recomputes() {
        let mut spotlight = PointerSpotlight::new();
        spotlight.on_pointer_move(region(), 350.0, 620.0);
        // the page scrolled: same pointer, region 100px higher
        let scrolled = Rect::new(300.0, 400.0, 400.0, 250.0);
        let offset = spotlight.on_pointer_move(scrolled, 350.0, 620.0);
        assert_eq!(offset, PointerOffset { x: 50.0, y: 220.0 });
    }

    #[test]
    fn test_stale_offset_persists() {
        let mut spotlight = PointerSpotlight::new();
        spotlight.on_pointer_move(region(), 350.0, 620.0);
        spotlight.leave();
        // no decay between events
        assert_eq!(spotlight.offset(), PointerOffset { x: 50.0, y: 120.0 });
    }

    #[test]
    fn test_degenerate_region_yields_origin() {
        let mut spotlight = PointerSpotlight::new();
        let flat = Rect::new(300.0, 500.0, 0.0, 250.0);
        assert_eq!(
            spotlight.on_pointer_move(flat, 350.0, 620.0),
            PointerOffset::default()
        );
    }

    #[test]
    fn test_opacity_follows_hover() {
        let mut spotlight = PointerSpotlight::new();
        assert_eq!(spotlight.opacity(), 0.0);
        spotlight.enter();
        assert_eq!(spotlight.opacity(), 1.0);
        spotlight.leave();
        assert_eq!(spotlight.opacity(), 0.0);
    }
}
