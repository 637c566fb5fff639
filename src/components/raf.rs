//! requestAnimationFrame driver delivering per-frame `dt` seconds.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

type FrameClosure = Closure<dyn FnMut(f64)>;

/// Frame loop bound to a component's lifetime: calls `f(dt)` once per
/// animation frame until `f` returns `false` or the loop is dropped.
/// Dropping cancels the pending frame, so an unmounted component never
/// keeps ticking.
pub struct RafLoop {
    handle: Rc<RefCell<Option<i32>>>,
    closure: Rc<RefCell<Option<FrameClosure>>>,
}

impl RafLoop {
    pub fn start<F>(mut f: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let handle: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
        let closure: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));

        let frame_handle = handle.clone();
        let frame_closure = closure.clone();
        let mut last_timestamp: Option<f64> = None;

        *closure.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            // rAF timestamps are milliseconds; the first frame gets dt 0
            let dt = last_timestamp
                .map(|previous| ((timestamp - previous) / 1000.0).max(0.0))
                .unwrap_or(0.0);
            last_timestamp = Some(timestamp);

            *frame_handle.borrow_mut() = None;
            if f(dt) {
                if let Some(id) = request_frame(&frame_closure) {
                    *frame_handle.borrow_mut() = Some(id);
                }
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(id) = request_frame(&closure) {
            *handle.borrow_mut() = Some(id);
        }

        Self { handle, closure }
    }
}

fn request_frame(closure: &Rc<RefCell<Option<FrameClosure>>>) -> Option<i32> {
    let window = window()?;
    let borrowed = closure.borrow();
    let callback = borrowed.as_ref()?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        if let Some(id) = self.handle.borrow_mut().take() {
            if let Some(window) = window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // break the closure's self-referencing Rc cycle
        self.closure.borrow_mut().take();
    }
}
