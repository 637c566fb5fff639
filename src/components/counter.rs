//! Stat counter span: counts up the first time it scrolls into view.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::dom;
use crate::components::raf::RafLoop;
use crate::motion::counter::AnimatedCounter;

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub value: f64,
    #[prop_or_default]
    pub suffix: String,
}

struct CounterState {
    counter: AnimatedCounter,
    raf: Option<RafLoop>,
}

fn observe_and_animate(
    state: &Rc<RefCell<CounterState>>,
    node: &NodeRef,
    display: &UseStateHandle<String>,
    suffix: &str,
) {
    let element = match node.cast::<web_sys::Element>() {
        Some(element) => element,
        None => return,
    };
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let became_visible = state
        .borrow_mut()
        .counter
        .observe(dom::element_rect(&element), dom::window_viewport(&window));
    if became_visible {
        start_animation(state, display, suffix);
    }
}

fn start_animation(
    state: &Rc<RefCell<CounterState>>,
    display: &UseStateHandle<String>,
    suffix: &str,
) {
    let raf_state = state.clone();
    let display = display.clone();
    let suffix = suffix.to_string();
    let raf = RafLoop::start(move |dt| {
        let mut state = raf_state.borrow_mut();
        state.counter.tick(dt);
        display.set(state.counter.display(&suffix));
        !state.counter.is_settled()
    });
    state.borrow_mut().raf = Some(raf);
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let state = {
        let value = props.value;
        use_mut_ref(move || CounterState {
            counter: AnimatedCounter::new(value),
            raf: None,
        })
    };
    let display = {
        let state = state.clone();
        let suffix = props.suffix.clone();
        use_state(move || state.borrow().counter.display(&suffix))
    };

    // a changed final value retargets the spring mid-flight; the same
    // value on a re-render must not replay the count-up
    {
        let state = state.clone();
        let display = display.clone();
        let suffix = props.suffix.clone();
        use_effect_with_deps(
            move |value: &f64| {
                let needs_animation = {
                    let mut state = state.borrow_mut();
                    state.counter.set_value(*value);
                    state.counter.has_been_visible() && !state.counter.is_settled()
                };
                if needs_animation {
                    start_animation(&state, &display, &suffix);
                }
                || ()
            },
            props.value,
        );
    }

    {
        let node = node.clone();
        let state = state.clone();
        let display = display.clone();
        let suffix = props.suffix.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let scroll_state = state.clone();
                let scroll_node = node.clone();
                let scroll_display = display.clone();
                let scroll_suffix = suffix.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    observe_and_animate(&scroll_state, &scroll_node, &scroll_display, &scroll_suffix);
                }) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // first check once the layout has settled
                let initial_state = state.clone();
                let initial_node = node.clone();
                let initial_display = display.clone();
                let initial_suffix = suffix.clone();
                Timeout::new(0, move || {
                    observe_and_animate(
                        &initial_state,
                        &initial_node,
                        &initial_display,
                        &initial_suffix,
                    );
                })
                .forget();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    // stop the frame loop with the component
                    state.borrow_mut().raf = None;
                }
            },
            (),
        );
    }

    html! {
        <span ref={node}>{ (*display).clone() }</span>
    }
}
