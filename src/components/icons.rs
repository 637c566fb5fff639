//! Inline stroke icons. Sized and colored by the surrounding element
//! (`currentColor` + font-relative CSS sizing).

use yew::prelude::*;

fn icon(body: Html) -> Html {
    html! {
        <svg
            class="icon"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            { body }
        </svg>
    }
}

pub fn shield_check() -> Html {
    icon(html! {
        <>
            <path d="M12 2 4 5v6c0 5 3.4 9.4 8 11 4.6-1.6 8-6 8-11V5l-8-3Z" />
            <path d="m9 12 2 2 4-4" />
        </>
    })
}

pub fn shield_alert() -> Html {
    icon(html! {
        <>
            <path d="M12 2 4 5v6c0 5 3.4 9.4 8 11 4.6-1.6 8-6 8-11V5l-8-3Z" />
            <path d="M12 8v4" />
            <path d="M12 16h.01" />
        </>
    })
}

pub fn trending_up() -> Html {
    icon(html! {
        <>
            <path d="m3 17 6-6 4 4 8-8" />
            <path d="M15 7h6v6" />
        </>
    })
}

pub fn users() -> Html {
    icon(html! {
        <>
            <circle cx="9" cy="8" r="3.5" />
            <path d="M2.5 20c0-3.6 2.9-6 6.5-6s6.5 2.4 6.5 6" />
            <path d="M16 5a3.5 3.5 0 0 1 0 7" />
            <path d="M18.5 14.5c1.9.8 3 2.6 3 5.5" />
        </>
    })
}

pub fn award() -> Html {
    icon(html! {
        <>
            <circle cx="12" cy="9" r="6" />
            <path d="m8.5 14-1.5 8 5-3 5 3-1.5-8" />
        </>
    })
}

pub fn briefcase() -> Html {
    icon(html! {
        <>
            <rect x="3" y="7" width="18" height="13" rx="2" />
            <path d="M9 7V5a2 2 0 0 1 2-2h2a2 2 0 0 1 2 2v2" />
        </>
    })
}

pub fn briefcase_business() -> Html {
    icon(html! {
        <>
            <rect x="3" y="7" width="18" height="13" rx="2" />
            <path d="M9 7V5a2 2 0 0 1 2-2h2a2 2 0 0 1 2 2v2" />
            <path d="M3 13h18" />
            <path d="M12 11v4" />
        </>
    })
}

pub fn coins() -> Html {
    icon(html! {
        <>
            <circle cx="9" cy="9" r="6" />
            <path d="M18.1 10.4a6 6 0 1 1-7.7 7.7" />
        </>
    })
}

pub fn zap() -> Html {
    icon(html! {
        <path d="M13 2 4 14h6l-1 8 9-12h-6l1-8Z" />
    })
}

pub fn scale() -> Html {
    icon(html! {
        <>
            <path d="M12 3v18" />
            <path d="M8 21h8" />
            <path d="M3 7h18" />
            <path d="m6 7-3 6a3 3 0 0 0 6 0L6 7Z" />
            <path d="m18 7-3 6a3 3 0 0 0 6 0l-3-6Z" />
        </>
    })
}

pub fn gem() -> Html {
    icon(html! {
        <>
            <path d="M6 3h12l4 6-10 12L2 9l4-6Z" />
            <path d="M2 9h20" />
            <path d="m9 3 3 6 3-6" />
            <path d="m9 9 3 12 3-12" />
        </>
    })
}

pub fn building() -> Html {
    icon(html! {
        <>
            <rect x="4" y="2" width="16" height="20" rx="1" />
            <path d="M9 22v-4h6v4" />
            <path d="M8 6h.01M12 6h.01M16 6h.01M8 10h.01M12 10h.01M16 10h.01M8 14h.01M12 14h.01M16 14h.01" />
        </>
    })
}

pub fn car() -> Html {
    icon(html! {
        <>
            <path d="M5 11 6.5 6.5A2 2 0 0 1 8.4 5h7.2a2 2 0 0 1 1.9 1.5L19 11" />
            <path d="M3 11h18v5a1 1 0 0 1-1 1h-1a2 2 0 0 1-4 0H9a2 2 0 0 1-4 0H4a1 1 0 0 1-1-1v-5Z" />
        </>
    })
}

pub fn globe() -> Html {
    icon(html! {
        <>
            <circle cx="12" cy="12" r="9" />
            <path d="M3 12h18" />
            <path d="M12 3a13.5 13.5 0 0 1 0 18 13.5 13.5 0 0 1 0-18Z" />
        </>
    })
}

pub fn check_circle() -> Html {
    icon(html! {
        <>
            <circle cx="12" cy="12" r="9" />
            <path d="m8.5 12 2.5 2.5 4.5-5" />
        </>
    })
}

pub fn star_filled() -> Html {
    html! {
        <svg class="icon" viewBox="0 0 24 24" fill="currentColor" stroke="none">
            <path d="m12 2 2.9 6.3 6.9.7-5.2 4.6 1.5 6.8L12 16.9 5.9 20.4l1.5-6.8L2.2 9l6.9-.7L12 2Z" />
        </svg>
    }
}

pub fn arrow_up_right() -> Html {
    icon(html! {
        <>
            <path d="M7 17 17 7" />
            <path d="M8 7h9v9" />
        </>
    })
}

pub fn phone() -> Html {
    icon(html! {
        <path d="M21 16.5v3a2 2 0 0 1-2.2 2A19.5 19.5 0 0 1 2.5 5.2 2 2 0 0 1 4.5 3h3a2 2 0 0 1 2 1.7c.1 1 .4 2 .8 2.9a2 2 0 0 1-.5 2.1L8.6 11a16 16 0 0 0 4.4 4.4l1.3-1.2a2 2 0 0 1 2.1-.5c.9.4 1.9.7 2.9.8a2 2 0 0 1 1.7 2Z" />
    })
}

pub fn map_pin() -> Html {
    icon(html! {
        <>
            <path d="M12 22s7-5.8 7-12a7 7 0 1 0-14 0c0 6.2 7 12 7 12Z" />
            <circle cx="12" cy="10" r="2.5" />
        </>
    })
}

pub fn clock() -> Html {
    icon(html! {
        <>
            <circle cx="12" cy="12" r="9" />
            <path d="M12 7v5l3 2" />
        </>
    })
}

pub fn mail() -> Html {
    icon(html! {
        <>
            <rect x="3" y="5" width="18" height="14" rx="2" />
            <path d="m3 7 9 6 9-6" />
        </>
    })
}

pub fn message_circle() -> Html {
    icon(html! {
        <path d="M21 11.5a8.5 8.5 0 0 1-12.3 7.6L3 21l1.9-5.7A8.5 8.5 0 1 1 21 11.5Z" />
    })
}

pub fn menu() -> Html {
    icon(html! {
        <>
            <path d="M4 6h16" />
            <path d="M4 12h16" />
            <path d="M4 18h16" />
        </>
    })
}

pub fn close() -> Html {
    icon(html! {
        <>
            <path d="m6 6 12 12" />
            <path d="m18 6-12 12" />
        </>
    })
}
