//! Infinitely scrolling horizontal strip. Children are rendered three
//! times; the loop offset wraps on the width of one copy.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::raf::RafLoop;
use crate::motion::marquee::{MarqueeLoop, RENDER_COPIES};

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    /// Strip speed in px/s.
    #[prop_or(60.0)]
    pub speed: f64,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let strip = use_node_ref();

    {
        let strip = strip.clone();
        let speed = props.speed;
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let state = Rc::new(RefCell::new(MarqueeLoop::new(0.0)));

                let measure = {
                    let strip = strip.clone();
                    let state = state.clone();
                    move || {
                        if let Some(element) = strip.cast::<web_sys::Element>() {
                            let cycle = element.scroll_width() as f64 / RENDER_COPIES as f64;
                            state.borrow_mut().set_cycle_length(cycle);
                        }
                    }
                };

                let resize_measure = measure.clone();
                let resize_callback =
                    Closure::wrap(Box::new(move || resize_measure()) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // measure once the strip has laid out
                Timeout::new(0, measure).forget();

                let raf_strip = strip;
                let raf = RafLoop::start(move |dt| {
                    let offset = state.borrow_mut().tick(dt, speed);
                    if let Some(element) = raf_strip.cast::<web_sys::Element>() {
                        let _ = element
                            .set_attribute("style", &format!("transform: translateX({offset}px);"));
                    }
                    true
                });

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    drop(raf);
                }
            },
            (),
        );
    }

    html! {
        <div class={classes!("marquee", props.class.clone())}>
            <div ref={strip} class="marquee-strip">
                { for (0..RENDER_COPIES).map(|copy| html! {
                    <div key={copy} class="marquee-copy">
                        { for props.children.iter() }
                    </div>
                }) }
            </div>
        </div>
    }
}
