//! Card with a pointer-tracking radial highlight.

use yew::prelude::*;

use crate::components::dom;
use crate::motion::pointer::PointerSpotlight;

#[derive(Properties, PartialEq)]
pub struct SpotlightCardProps {
    #[prop_or_else(|| "rgba(255, 255, 255, 0.1)".to_string())]
    pub border_color: String,
    #[prop_or_else(|| "rgba(255, 255, 255, 0.1)".to_string())]
    pub glow_color: String,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(SpotlightCard)]
pub fn spotlight_card(props: &SpotlightCardProps) -> Html {
    let node = use_node_ref();
    let spotlight = use_mut_ref(PointerSpotlight::new);
    let glow = use_state(String::new);
    let hovered = use_state(|| false);

    let onmousemove = {
        let node = node.clone();
        let spotlight = spotlight.clone();
        let glow = glow.clone();
        let glow_color = props.glow_color.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(element) = node.cast::<web_sys::Element>() {
                // fresh rect every event; the card may have scrolled or resized
                let region = dom::element_rect(&element);
                let offset = spotlight.borrow_mut().on_pointer_move(
                    region,
                    event.client_x() as f64,
                    event.client_y() as f64,
                );
                glow.set(format!(
                    "background: radial-gradient(650px circle at {}px {}px, {}, transparent 80%);",
                    offset.x, offset.y, glow_color
                ));
            }
        })
    };

    let onmouseenter = {
        let spotlight = spotlight.clone();
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| {
            spotlight.borrow_mut().enter();
            hovered.set(true);
        })
    };

    let onmouseleave = {
        let spotlight = spotlight.clone();
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| {
            spotlight.borrow_mut().leave();
            hovered.set(false);
        })
    };

    // `hovered` only forces the re-render; the opacity itself comes from
    // the spotlight state (hover-driven, never offset-driven)
    let opacity = if *hovered { spotlight.borrow().opacity() } else { 0.0 };

    html! {
        <div
            ref={node}
            class={classes!("spotlight-card", props.class.clone())}
            style={format!("border-color: {};", props.border_color)}
            {onmousemove}
            {onmouseenter}
            {onmouseleave}
        >
            <div
                class="spotlight-glow"
                style={format!("{} opacity: {};", *glow, opacity)}
            ></div>
            <div class="spotlight-content">{ for props.children.iter() }</div>
        </div>
    }
}
