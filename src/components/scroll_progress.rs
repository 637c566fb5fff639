//! Fixed page-top scroll progress bar, spring-smoothed.

use std::cell::RefCell;
use std::rc::Rc;

use stylist::yew::styled_component;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::raf::RafLoop;
use crate::config;
use crate::motion::scroll::ScrollProgressTracker;

#[styled_component(ScrollProgressBar)]
pub fn scroll_progress_bar() -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let tracker = Rc::new(RefCell::new(ScrollProgressTracker::new()));

                let scroll_tracker = tracker.clone();
                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let document_height = scroll_window
                        .document()
                        .and_then(|document| document.document_element())
                        .map(|root| root.scroll_height() as f64)
                        .unwrap_or(0.0);
                    let viewport_height = scroll_window
                        .inner_height()
                        .ok()
                        .and_then(|value| value.as_f64())
                        .unwrap_or(0.0);
                    let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
                    scroll_tracker
                        .borrow_mut()
                        .on_scroll(scroll_y, document_height, viewport_height);
                }) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // render loop lives as long as the page does
                let raf = RafLoop::start(move |dt| {
                    let progress = {
                        let mut tracker = tracker.borrow_mut();
                        tracker.tick(dt);
                        tracker.progress()
                    };
                    if let Some(element) = node.cast::<web_sys::Element>() {
                        let _ = element
                            .set_attribute("style", &format!("transform: scaleX({progress});"));
                    }
                    true
                });

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    drop(raf);
                }
            },
            (),
        );
    }

    let bar = css!(
        r#"
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        height: 4px;
        z-index: 200;
        transform: scaleX(0);
        transform-origin: left;
        background: linear-gradient(to right, ${sky}, ${blue}, ${gold});
        "#,
        sky = config::SKY,
        blue = config::BLUE,
        gold = config::GOLD,
    );

    html! { <div ref={node} class={bar}></div> }
}
