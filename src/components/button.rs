//! Primary call-to-action button with gradient variants.

use stylist::yew::styled_component;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Gold,
    Dark,
}

#[derive(Properties, PartialEq)]
pub struct PrimeButtonProps {
    #[prop_or(ButtonVariant::Gold)]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[styled_component(PrimeButton)]
pub fn prime_button(props: &PrimeButtonProps) -> Html {
    let (background, color, border, glow) = match props.variant {
        ButtonVariant::Primary => (
            format!(
                "linear-gradient(135deg, {} 0%, {} 100%)",
                config::BLUE,
                config::SKY
            ),
            "#ffffff".to_string(),
            "rgba(96, 165, 250, 0.5)".to_string(),
            format!("{}40", config::BLUE),
        ),
        ButtonVariant::Gold => (
            format!("linear-gradient(135deg, {} 0%, #d4c030 100%)", config::GOLD),
            config::BG.to_string(),
            "rgba(250, 204, 21, 0.5)".to_string(),
            format!("{}40", config::GOLD),
        ),
        ButtonVariant::Dark => (
            "rgba(255, 255, 255, 0.05)".to_string(),
            "#ffffff".to_string(),
            "rgba(255, 255, 255, 0.1)".to_string(),
            format!("{}40", config::BLUE),
        ),
    };

    let style = css!(
        r#"
        position: relative;
        overflow: hidden;
        padding: 1rem 2rem;
        border-radius: 12px;
        border: 1px solid ${border};
        background: ${background};
        color: ${color};
        font-family: inherit;
        font-size: 10px;
        font-weight: 900;
        letter-spacing: 2px;
        text-transform: uppercase;
        cursor: pointer;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
        transition: transform 0.2s ease, box-shadow 0.2s ease;

        &:hover {
            transform: scale(1.05);
            box-shadow: 0 0 25px ${glow};
        }

        &:active {
            transform: scale(0.95);
        }
        "#,
        background = background,
        color = color,
        border = border,
        glow = glow,
    );

    html! {
        <button class={classes!(style, props.class.clone())} onclick={props.onclick.clone()}>
            <span class="btn-shine"></span>
            <span class="btn-label">{ for props.children.iter() }</span>
        </button>
    }
}
