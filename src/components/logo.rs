//! Brand logo with a labeled placeholder when the asset fails to load.

use yew::prelude::*;

pub const LOGO_SRC: &str = "/assets/logo.png";
pub const PLACEHOLDER_LABEL: &str = "LOGO.PNG (404)";

/// Load-failure latch; once the image errors the placeholder stays.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogoFallback {
    failed: bool,
}

impl LogoFallback {
    pub fn on_error(&mut self) {
        self.failed = true;
    }

    pub fn show_placeholder(&self) -> bool {
        self.failed
    }
}

#[function_component(BrandLogo)]
pub fn brand_logo() -> Html {
    let fallback = use_state(LogoFallback::default);

    let onerror = {
        let fallback = fallback.clone();
        Callback::from(move |_: Event| {
            let mut next = *fallback;
            next.on_error();
            fallback.set(next);
        })
    };

    html! {
        <div class="brand-logo">
            {
                if fallback.show_placeholder() {
                    html! { <div class="brand-logo-placeholder">{ PLACEHOLDER_LABEL }</div> }
                } else {
                    html! { <img src={LOGO_SRC} alt="Master Prime Elite" {onerror} /> }
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_load_switches_to_placeholder() {
        let mut fallback = LogoFallback::default();
        assert!(!fallback.show_placeholder());
        fallback.on_error();
        assert!(fallback.show_placeholder());
        // never flips back
        fallback.on_error();
        assert!(fallback.show_placeholder());
    }

    #[test]
    fn test_placeholder_is_labeled() {
        assert_eq!(PLACEHOLDER_LABEL, "LOGO.PNG (404)");
    }
}
