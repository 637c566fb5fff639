//! Read-only geometry sampling from the host environment.

use crate::motion::viewport::Rect;

/// Current viewport box in client coordinates.
pub fn window_viewport(window: &web_sys::Window) -> Rect {
    Rect::new(
        0.0,
        0.0,
        window
            .inner_width()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0),
        window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0),
    )
}

/// Fresh bounding box for an element. Sampled per event on purpose —
/// cached rects go stale when the page scrolls or the layout changes.
pub fn element_rect(element: &web_sys::Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}
