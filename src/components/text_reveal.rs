//! Headline whose words fade in one by one on first viewport entry.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::dom;
use crate::motion::reveal::{TextRevealSequencer, TOKEN_DURATION};

#[derive(Properties, PartialEq)]
pub struct TextRevealProps {
    pub text: String,
    #[prop_or_default]
    pub keyword: String,
    #[prop_or(0.0)]
    pub base_delay: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TextReveal)]
pub fn text_reveal(props: &TextRevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);
    let sequencer = {
        let text = props.text.clone();
        let keyword = props.keyword.clone();
        let base_delay = props.base_delay;
        use_mut_ref(move || TextRevealSequencer::new(&text, &keyword, base_delay))
    };

    {
        let node = node.clone();
        let revealed = revealed.clone();
        let sequencer = sequencer.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                // one observation gates the whole block; the latch makes
                // later calls no-ops
                let check = {
                    let node = node.clone();
                    let revealed = revealed.clone();
                    let sequencer = sequencer.clone();
                    let window = window.clone();
                    move || {
                        if let Some(element) = node.cast::<web_sys::Element>() {
                            let became_visible = sequencer.borrow_mut().observe(
                                dom::element_rect(&element),
                                dom::window_viewport(&window),
                            );
                            if became_visible {
                                revealed.set(true);
                            }
                        }
                    }
                };

                let scroll_check = check.clone();
                let scroll_callback =
                    Closure::wrap(Box::new(move || scroll_check()) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                Timeout::new(0, check).forget();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // the state mirrors the sequencer's latch and forces the re-render
    let sequencer = sequencer.borrow();
    let is_revealed = *revealed || sequencer.is_revealed();

    html! {
        <h2
            ref={node}
            class={classes!("text-reveal", is_revealed.then(|| "revealed"), props.class.clone())}
        >
            { for sequencer.tokens().iter().map(|token| {
                let class = if token.is_highlighted {
                    "reveal-token highlight"
                } else {
                    "reveal-token"
                };
                html! {
                    <span
                        key={token.index}
                        class={class}
                        style={format!(
                            "transition-duration: {}s; transition-delay: {}s;",
                            TOKEN_DURATION, token.delay,
                        )}
                    >
                        { token.text.clone() }
                    </span>
                }
            }) }
        </h2>
    }
}
